use opr_harvest_core::{DiscoveredBook, GameSystem};
use opr_harvest_forge::ArmyBookSource;

/// List the official army books for one game system, tagged with that system.
///
/// Returns `None` if the listing could not be fetched; the failure is logged
/// and the caller moves on to the next system. Entries without a uid are
/// dropped.
pub fn scan_system<S: ArmyBookSource + ?Sized>(
    source: &S,
    system: GameSystem,
) -> Option<Vec<DiscoveredBook>> {
    let summaries = match source.list_official(system) {
        Ok(summaries) => summaries,
        Err(e) => {
            log::warn!("Failed to fetch army books for {}: {}", system, e);
            return None;
        }
    };

    let mut books = Vec::with_capacity(summaries.len());
    for summary in summaries {
        if summary.uid.is_none() {
            log::warn!(
                "Skipping army book without uid ({}) listed under {}",
                summary.name_or_unknown(),
                system
            );
            continue;
        }
        books.push(DiscoveredBook { summary, system });
    }

    log::debug!("{} lists {} army books", system, books.len());
    Some(books)
}
