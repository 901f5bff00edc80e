//! Post-harvest summaries printed after a run.

use std::collections::{HashMap, HashSet};

use opr_harvest_core::SpecialRuleRecord;

/// Substrings in a rule description that suggest a numeric rating.
pub const RATING_INDICATORS: &[&str] = &["(X)", "+X", "-X", "X dice", "X\"", "X+"];

/// How many leading rule records `rating_hints` inspects.
pub const RATING_HINT_SAMPLE: usize = 50;

/// How often one special rule name occurs across the harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFrequency {
    pub name: String,
    pub count: usize,
    /// Number of distinct factions carrying the rule
    pub factions: usize,
}

/// Names of rules (among the first `RATING_HINT_SAMPLE`) whose description
/// mentions a rating indicator. Unique, first-seen order, at most `limit`.
pub fn rating_hints(rules: &[SpecialRuleRecord], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut hints = Vec::new();

    for rule in rules.iter().take(RATING_HINT_SAMPLE) {
        if hints.len() >= limit {
            break;
        }
        let description = rule.description.as_deref().unwrap_or("");
        if !RATING_INDICATORS.iter().any(|ind| description.contains(ind)) {
            continue;
        }
        let Some(name) = rule.name.as_deref() else {
            continue;
        };
        if seen.insert(name) {
            hints.push(name.to_string());
        }
    }

    hints
}

/// The `top` most frequent rule names, by instance count descending. Ties
/// keep first-seen order.
pub fn common_rules(rules: &[SpecialRuleRecord], top: usize) -> Vec<RuleFrequency> {
    let mut order: Vec<&str> = Vec::new();
    let mut stats: HashMap<&str, (usize, HashSet<&str>)> = HashMap::new();

    for rule in rules {
        let name = rule.name.as_deref().unwrap_or("");
        let entry = stats.entry(name).or_insert_with(|| {
            order.push(name);
            (0, HashSet::new())
        });
        entry.0 += 1;
        if let Some(faction) = rule.faction.as_deref() {
            entry.1.insert(faction);
        }
    }

    let mut freqs: Vec<RuleFrequency> = order
        .into_iter()
        .map(|name| {
            let (count, factions) = &stats[name];
            RuleFrequency {
                name: name.to_string(),
                count: *count,
                factions: factions.len(),
            }
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    freqs.sort_by(|a, b| b.count.cmp(&a.count));
    freqs.truncate(top);
    freqs
}
