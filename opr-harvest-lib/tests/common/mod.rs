#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use opr_harvest_core::{ArmyBookDetail, ArmyBookSummary, GameSystem};
use opr_harvest_forge::{ArmyBookSource, ForgeError};
use serde_json::{Value, json};

/// In-memory Army Forge that records every detail request.
#[derive(Default)]
pub struct FakeSource {
    listings: HashMap<GameSystem, Result<Vec<ArmyBookSummary>, u16>>,
    details: HashMap<String, Result<Value, u16>>,
    detail_calls: RefCell<Vec<(String, u32)>>,
    listing_calls: RefCell<Vec<GameSystem>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// List `(uid, name)` books under `system`.
    pub fn list(mut self, system: GameSystem, books: &[(&str, &str)]) -> Self {
        let summaries = books
            .iter()
            .map(|(uid, name)| ArmyBookSummary {
                uid: Some(uid.to_string()),
                name: Some(name.to_string()),
            })
            .collect();
        self.listings.insert(system, Ok(summaries));
        self
    }

    pub fn fail_listing(mut self, system: GameSystem, status: u16) -> Self {
        self.listings.insert(system, Err(status));
        self
    }

    pub fn book(mut self, uid: &str, detail: Value) -> Self {
        self.details.insert(uid.to_string(), Ok(detail));
        self
    }

    pub fn fail_book(mut self, uid: &str, status: u16) -> Self {
        self.details.insert(uid.to_string(), Err(status));
        self
    }

    pub fn detail_calls(&self) -> Vec<(String, u32)> {
        self.detail_calls.borrow().clone()
    }

    pub fn listing_calls(&self) -> Vec<GameSystem> {
        self.listing_calls.borrow().clone()
    }
}

impl ArmyBookSource for FakeSource {
    fn list_official(&self, system: GameSystem) -> Result<Vec<ArmyBookSummary>, ForgeError> {
        self.listing_calls.borrow_mut().push(system);
        match self.listings.get(&system) {
            Some(Ok(books)) => Ok(books.clone()),
            Some(Err(status)) => Err(ForgeError::Status {
                status: *status,
                url: format!("fake://army-books?gameSystemSlug={}", system.slug()),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn army_book(&self, uid: &str, system_id: u32) -> Result<ArmyBookDetail, ForgeError> {
        self.detail_calls
            .borrow_mut()
            .push((uid.to_string(), system_id));
        let status = match self.details.get(uid) {
            Some(Ok(value)) => {
                return serde_json::from_value(value.clone())
                    .map_err(|e| ForgeError::api(e.to_string()));
            }
            Some(Err(status)) => *status,
            None => 404,
        };
        Err(ForgeError::Status {
            status,
            url: format!("fake://army-books/{uid}?gameSystem={system_id}"),
        })
    }
}

/// Detail payload with `spells` spells and `rules` special rules.
pub fn detail(uid: &str, enabled: &[u32], spells: usize, rules: usize) -> Value {
    let spells: Vec<Value> = (0..spells)
        .map(|i| {
            json!({
                "id": format!("{uid}-spell{i}"),
                "name": format!("Spell {i}"),
                "type": 0,
                "threshold": 4 + i,
                "effect": "Target enemy unit takes 2 hits.",
                "effectSkirmish": "Target model takes 1 hit.",
                "spellbookId": format!("{uid}-book"),
            })
        })
        .collect();
    let rules: Vec<Value> = (0..rules)
        .map(|i| {
            json!({
                "id": format!("{uid}-rule{i}"),
                "name": format!("Rule {i}"),
                "aliasedRuleId": null,
                "description": "Gets +X to hit rolls.",
                "hasRating": i % 2 == 0,
                "coreType": "army",
                "targetType": null,
            })
        })
        .collect();
    json!({
        "uid": uid,
        "enabledGameSystems": enabled,
        "spells": spells,
        "specialRules": rules,
    })
}
