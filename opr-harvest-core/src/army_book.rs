use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::game_system::GameSystem;

/// One entry of the official army book listing for a game system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArmyBookSummary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

impl ArmyBookSummary {
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// An army book summary tagged with the system whose listing returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredBook {
    pub summary: ArmyBookSummary,
    pub system: GameSystem,
}

/// Full army book detail from `army-books/{uid}?gameSystem={id}`.
///
/// Only the fields the harvester reads are modeled; everything else in the
/// payload (units, upgrades, ...) is ignored. No field is validated: a value
/// of an unexpected JSON type reads as absent, and a malformed list element
/// is dropped without affecting its siblings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmyBookDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "system_ids")]
    pub enabled_game_systems: Vec<u32>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub spells: Vec<Spell>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub special_rules: Vec<SpecialRule>,
}

/// A spell as published in an army book.
///
/// `type` and `threshold` are passed through untouched; their JSON type is
/// not stable across books.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub spell_type: Option<Value>,
    #[serde(default)]
    pub threshold: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub effect: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub effect_skirmish: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub spellbook_id: Option<String>,
}

/// A special rule as published in an army book.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialRule {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub aliased_rule_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_rating: Option<bool>,
    #[serde(default)]
    pub core_type: Option<Value>,
    #[serde(default)]
    pub target_type: Option<Value>,
}

/// Any value that does not deserialize as `T` reads as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Strings as-is, numbers and booleans as their JSON text, anything else
/// as `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
        _ => None,
    })
}

/// A list whose malformed elements are skipped. A non-array reads as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Game system ids, skipping anything that is not a non-negative integer
/// in `u32` range.
fn system_ids<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_u64)
            .filter_map(|id| u32::try_from(id).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
#[path = "tests/army_book_tests.rs"]
mod tests;
