//! Flat output records: one row per (spell | special rule) × game system.
//!
//! Field order here is the column order of the CSV output, so records of one
//! kind must always serialize the same key set. Optional provenance columns
//! (`armyUid`, `enabledGameSystems`) are controlled per run by `RecordOrigin`,
//! never per record.

use serde::Serialize;
use serde_json::Value;

use crate::army_book::{Spell, SpecialRule};
use crate::game_system::GameSystem;

/// Where a batch of records came from. Shared by every record emitted for one
/// army book.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOrigin {
    pub faction: Option<String>,
    pub army_uid: Option<String>,
    pub enabled_game_systems: Option<Vec<u32>>,
}

impl RecordOrigin {
    /// Origin for deduplicated collection, carrying the army uid and the
    /// book's declared system compatibility.
    pub fn with_provenance(
        faction: Option<String>,
        army_uid: impl Into<String>,
        enabled_game_systems: Vec<u32>,
    ) -> Self {
        Self {
            faction,
            army_uid: Some(army_uid.into()),
            enabled_game_systems: Some(enabled_game_systems),
        }
    }

    /// Origin for per-system collection (faction only).
    pub fn faction_only(faction: Option<String>) -> Self {
        Self {
            faction,
            army_uid: None,
            enabled_game_systems: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRecord {
    pub faction: Option<String>,
    pub game_system: GameSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub army_uid: Option<String>,
    pub spell_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub spell_type: Option<Value>,
    pub threshold: Option<Value>,
    pub effect: Option<String>,
    pub effect_skirmish: Option<String>,
    pub spellbook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_game_systems: Option<Vec<u32>>,
}

impl SpellRecord {
    pub fn new(origin: &RecordOrigin, system: GameSystem, spell: &Spell) -> Self {
        Self {
            faction: origin.faction.clone(),
            game_system: system,
            army_uid: origin.army_uid.clone(),
            spell_id: spell.id.clone(),
            name: spell.name.clone(),
            spell_type: spell.spell_type.clone(),
            threshold: spell.threshold.clone(),
            effect: spell.effect.clone(),
            effect_skirmish: spell.effect_skirmish.clone(),
            spellbook_id: spell.spellbook_id.clone(),
            enabled_game_systems: origin.enabled_game_systems.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialRuleRecord {
    pub faction: Option<String>,
    pub game_system: GameSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub army_uid: Option<String>,
    pub rule_id: Option<String>,
    pub name: Option<String>,
    pub aliased_rule_id: Option<String>,
    pub description: Option<String>,
    pub has_rating: Option<bool>,
    pub core_type: Option<Value>,
    pub target_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_game_systems: Option<Vec<u32>>,
}

impl SpecialRuleRecord {
    pub fn new(origin: &RecordOrigin, system: GameSystem, rule: &SpecialRule) -> Self {
        Self {
            faction: origin.faction.clone(),
            game_system: system,
            army_uid: origin.army_uid.clone(),
            rule_id: rule.id.clone(),
            name: rule.name.clone(),
            aliased_rule_id: rule.aliased_rule_id.clone(),
            description: rule.description.clone(),
            has_rating: rule.has_rating,
            core_type: rule.core_type.clone(),
            target_type: rule.target_type.clone(),
            enabled_game_systems: origin.enabled_game_systems.clone(),
        }
    }
}

/// Accumulated output of one collection run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub spells: Vec<SpellRecord>,
    pub special_rules: Vec<SpecialRuleRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty() && self.special_rules.is_empty()
    }

    /// Append another batch, preserving order.
    pub fn extend(&mut self, other: RecordSet) {
        self.spells.extend(other.spells);
        self.special_rules.extend(other.special_rules);
    }
}
