use super::*;

#[test]
fn test_detail_full_payload() {
    let json = r#"{
        "uid": "abc123",
        "name": "Battle Brothers",
        "enabledGameSystems": [2, 3],
        "units": [{"id": "u1"}],
        "spells": [{
            "id": "sp1",
            "name": "Psalm of Fire",
            "type": 0,
            "threshold": 4,
            "effect": "Target enemy unit takes 4 hits.",
            "effectSkirmish": "Target model takes 2 hits.",
            "spellbookId": "book1"
        }],
        "specialRules": [{
            "id": "r1",
            "name": "Fearless",
            "aliasedRuleId": null,
            "description": "Gets +1 to morale tests.",
            "hasRating": false,
            "coreType": "army",
            "targetType": null
        }]
    }"#;

    let detail: ArmyBookDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.uid.as_deref(), Some("abc123"));
    assert_eq!(detail.enabled_game_systems, vec![2, 3]);
    assert_eq!(detail.spells.len(), 1);
    assert_eq!(detail.spells[0].threshold, Some(serde_json::json!(4)));
    assert_eq!(detail.spells[0].effect_skirmish.as_deref(), Some("Target model takes 2 hits."));
    assert_eq!(detail.spells[0].spellbook_id.as_deref(), Some("book1"));
    assert_eq!(detail.special_rules[0].has_rating, Some(false));
    assert_eq!(detail.special_rules[0].core_type, Some(serde_json::json!("army")));
    assert_eq!(detail.special_rules[0].target_type, None);
}

#[test]
fn test_detail_missing_lists_default_empty() {
    let detail: ArmyBookDetail = serde_json::from_str(r#"{"uid": "x"}"#).unwrap();
    assert!(detail.enabled_game_systems.is_empty());
    assert!(detail.spells.is_empty());
    assert!(detail.special_rules.is_empty());
}

#[test]
fn test_detail_null_lists_default_empty() {
    let detail: ArmyBookDetail = serde_json::from_str(
        r#"{"uid": "x", "enabledGameSystems": null, "spells": null, "specialRules": null}"#,
    )
    .unwrap();
    assert!(detail.enabled_game_systems.is_empty());
    assert!(detail.spells.is_empty());
    assert!(detail.special_rules.is_empty());
}

#[test]
fn test_spell_with_no_fields() {
    let spell: Spell = serde_json::from_str("{}").unwrap();
    assert!(spell.id.is_none());
    assert!(spell.spell_type.is_none());
    assert!(spell.threshold.is_none());
}

#[test]
fn test_summary_listing() {
    let json = r#"[
        {"uid": "abc123", "name": "Battle Brothers", "official": true},
        {"name": "Nameless"},
        {"uid": "def456"}
    ]"#;
    let books: Vec<ArmyBookSummary> = serde_json::from_str(json).unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].uid.as_deref(), Some("abc123"));
    assert!(books[1].uid.is_none());
    assert_eq!(books[2].name_or_unknown(), "Unknown");
}

#[test]
fn test_mistyped_fields_read_as_absent() {
    let json = r#"{
        "uid": "abc123",
        "enabledGameSystems": [2, "3", null, 4.5, -1, 9],
        "spells": [
            {"id": "s1", "name": "Zap"},
            {"id": 42, "name": ["not", "a", "string"], "effect": {"text": "x"}},
            null,
            "garbage"
        ],
        "specialRules": [
            {"id": "r1", "hasRating": 1, "description": "Gets +X to hit."},
            {"id": "r2", "hasRating": true, "aliasedRuleId": false}
        ]
    }"#;

    let detail: ArmyBookDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.enabled_game_systems, vec![2, 9]);

    assert_eq!(detail.spells.len(), 2);
    assert_eq!(detail.spells[0].id.as_deref(), Some("s1"));
    assert_eq!(detail.spells[1].id.as_deref(), Some("42"));
    assert!(detail.spells[1].name.is_none());
    assert!(detail.spells[1].effect.is_none());

    assert_eq!(detail.special_rules.len(), 2);
    assert_eq!(detail.special_rules[0].has_rating, None);
    assert_eq!(detail.special_rules[0].description.as_deref(), Some("Gets +X to hit."));
    assert_eq!(detail.special_rules[1].has_rating, Some(true));
    assert_eq!(detail.special_rules[1].aliased_rule_id.as_deref(), Some("false"));
}

#[test]
fn test_non_array_lists_read_as_empty() {
    let detail: ArmyBookDetail = serde_json::from_str(
        r#"{"uid": "x", "enabledGameSystems": "2,3", "spells": {}, "specialRules": 7}"#,
    )
    .unwrap();
    assert!(detail.enabled_game_systems.is_empty());
    assert!(detail.spells.is_empty());
    assert!(detail.special_rules.is_empty());
}

#[test]
fn test_summary_numeric_uid() {
    let books: Vec<ArmyBookSummary> =
        serde_json::from_str(r#"[{"uid": 17, "name": "Orcs"}, {"uid": {}, "name": null}]"#)
            .unwrap();
    assert_eq!(books[0].uid.as_deref(), Some("17"));
    assert!(books[1].uid.is_none());
    assert!(books[1].name.is_none());
}
