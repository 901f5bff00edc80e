//! Core types shared across the opr-harvest workspace: game systems, the
//! Army Forge payload shapes, and flat output records.

pub mod army_book;
pub mod game_system;
pub mod record;

pub use army_book::{ArmyBookDetail, ArmyBookSummary, DiscoveredBook, SpecialRule, Spell};
pub use game_system::{GameSystem, GameSystemParseError};
pub use record::{RecordOrigin, RecordSet, SpecialRuleRecord, SpellRecord};
