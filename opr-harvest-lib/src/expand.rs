//! Re-emit a fetched army book once per game system it is valid under.

use opr_harvest_core::{
    ArmyBookDetail, GameSystem, RecordOrigin, RecordSet, SpecialRuleRecord, SpellRecord,
};

use crate::index::IndexedBook;

/// Systems, out of those a book was discovered under, that get output rows.
///
/// A system qualifies when `force` is set, when the book declares it in
/// `enabledGameSystems`, or when it is the only discovery system. The primary
/// system gets no special treatment: a cross-system book that declares
/// compatibility without listing its primary id emits nothing for it.
pub fn compatible_systems(
    discovered: &[GameSystem],
    enabled: &[u32],
    force: bool,
) -> Vec<GameSystem> {
    let single = discovered.len() == 1;
    discovered
        .iter()
        .copied()
        .filter(|system| force || single || enabled.contains(&system.id()))
        .collect()
}

/// Expand one deduplicated book into records for every compatible system.
pub fn expand_book(book: &IndexedBook, detail: &ArmyBookDetail, force: bool) -> RecordSet {
    let systems = compatible_systems(&book.systems, &detail.enabled_game_systems, force);
    let origin = RecordOrigin::with_provenance(
        book.summary.name.clone(),
        book.uid.clone(),
        detail.enabled_game_systems.clone(),
    );
    expand_for_systems(&origin, &systems, detail)
}

/// One record per (spell, system) and per (rule, system), spells first, in
/// upstream order.
pub fn expand_for_systems(
    origin: &RecordOrigin,
    systems: &[GameSystem],
    detail: &ArmyBookDetail,
) -> RecordSet {
    let mut records = RecordSet::new();

    for spell in &detail.spells {
        for &system in systems {
            records.spells.push(SpellRecord::new(origin, system, spell));
        }
    }

    for rule in &detail.special_rules {
        for &system in systems {
            records
                .special_rules
                .push(SpecialRuleRecord::new(origin, system, rule));
        }
    }

    records
}
