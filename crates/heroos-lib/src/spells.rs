//! Spell registry: a fixed code → record table with O(1) lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Error, Result};

/// Maximum number of near-miss codes reported with an unknown-spell error.
const MAX_SUGGESTIONS: usize = 3;

/// Similarity threshold for near-miss suggestions (0.0 – 1.0).
const SUGGESTION_THRESHOLD: f64 = 0.8;

static STANDARD: Lazy<SpellRegistry> = Lazy::new(|| {
    SpellRegistry::from_records(vec![
        SpellRecord::new("fire", "豪火球之術", 500, "火系"),
        SpellRecord::new("ice", "絕對零度", 450, "冰系"),
        SpellRecord::new("heal", "大回復術", -200, "治癒"),
        SpellRecord::new("thunder", "麒麟", 600, "雷系"),
    ])
});

/// A single spell definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellRecord {
    pub code: String,
    pub name: String,
    /// Damage dealt; negative values heal.
    pub damage: i32,
    pub element: String,
}

impl SpellRecord {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        damage: i32,
        element: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            damage,
            element: element.into(),
        }
    }

    pub fn is_healing(&self) -> bool {
        self.damage < 0
    }
}

/// Read-only spell table keyed by code.
#[derive(Debug, Clone, Default)]
pub struct SpellRegistry {
    spells: HashMap<String, SpellRecord>,
    order: Vec<String>,
}

impl SpellRegistry {
    /// The built-in spell table shared by the whole process.
    pub fn standard() -> &'static SpellRegistry {
        &STANDARD
    }

    /// Build a registry from records. Later records replace earlier ones with
    /// the same code.
    pub fn from_records(records: Vec<SpellRecord>) -> Self {
        let mut spells = HashMap::with_capacity(records.len());
        let mut order = Vec::with_capacity(records.len());
        for record in records {
            if !spells.contains_key(&record.code) {
                order.push(record.code.clone());
            }
            spells.insert(record.code.clone(), record);
        }
        Self { spells, order }
    }

    /// Look up a spell by its exact code.
    ///
    /// Case folding is the caller's job: `"Fire"` does not match `"fire"`.
    pub fn lookup(&self, code: &str) -> Result<&SpellRecord> {
        self.spells.get(code).ok_or_else(|| Error::UnknownSpell {
            code: code.to_string(),
            suggestions: self.suggestions(code),
        })
    }

    /// Known spell codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    fn suggestions(&self, code: &str) -> Vec<String> {
        let needle = code.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .order
            .iter()
            .map(|candidate| (strsim::jaro_winkler(&needle, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}
