use opr_harvest_core::{ArmyBookDetail, ArmyBookSummary, GameSystem};

use crate::client::ArmyForgeClient;
use crate::error::ForgeError;

/// Anything that can answer the two army-book queries a harvest needs.
///
/// The collectors are written against this trait so they can run against
/// the live API or an in-memory catalog.
pub trait ArmyBookSource {
    /// Official army books listed under `system`.
    fn list_official(&self, system: GameSystem) -> Result<Vec<ArmyBookSummary>, ForgeError>;

    /// Full detail for one army book, requested under `system_id`.
    fn army_book(&self, uid: &str, system_id: u32) -> Result<ArmyBookDetail, ForgeError>;
}

impl ArmyBookSource for ArmyForgeClient {
    fn list_official(&self, system: GameSystem) -> Result<Vec<ArmyBookSummary>, ForgeError> {
        ArmyForgeClient::list_official(self, system)
    }

    fn army_book(&self, uid: &str, system_id: u32) -> Result<ArmyBookDetail, ForgeError> {
        ArmyForgeClient::army_book(self, uid, system_id)
    }
}

impl<T: ArmyBookSource + ?Sized> ArmyBookSource for &T {
    fn list_official(&self, system: GameSystem) -> Result<Vec<ArmyBookSummary>, ForgeError> {
        (**self).list_official(system)
    }

    fn army_book(&self, uid: &str, system_id: u32) -> Result<ArmyBookDetail, ForgeError> {
        (**self).army_book(uid, system_id)
    }
}
