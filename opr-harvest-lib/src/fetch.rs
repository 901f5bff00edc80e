use opr_harvest_core::{ArmyBookDetail, GameSystem};
use opr_harvest_forge::ArmyBookSource;

use crate::index::IndexedBook;

/// Fetch an indexed book's detail once, through its primary system.
pub fn fetch_book<S: ArmyBookSource + ?Sized>(
    source: &S,
    book: &IndexedBook,
) -> Option<ArmyBookDetail> {
    fetch_detail(source, &book.uid, book.name(), book.primary_system())
}

/// Fetch one army book's detail as seen under `system`.
///
/// Returns `None` on any failure; the failure is logged and the book
/// contributes nothing to the output. There is no retry.
pub fn fetch_detail<S: ArmyBookSource + ?Sized>(
    source: &S,
    uid: &str,
    name: &str,
    system: GameSystem,
) -> Option<ArmyBookDetail> {
    match source.army_book(uid, system.id()) {
        Ok(detail) => Some(detail),
        Err(e) => {
            log::warn!("Failed to fetch army details for {} ({}): {}", name, uid, e);
            None
        }
    }
}
