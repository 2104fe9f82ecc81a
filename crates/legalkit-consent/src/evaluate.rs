//! # Effective-Consent Evaluation
//!
//! Resolves allow/deny decisions for `(category, entry)` addresses by
//! combining the configuration's defaults with explicitly stored user
//! preferences.
//!
//! ## Invariants
//!
//! - `required` (on the category or the entry) always evaluates to
//!   allowed; a stored `false` cannot revoke it.
//! - Without a stored preference, an entry falls back to its
//!   default-allowed value (`required` or `default_state == On`).
//! - A category-level query is the conjunction over its entries.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConsentCategory, ConsentEntry, DefaultState};

/// Preference-store key for an entry: `"category:entry"`.
pub fn entry_key(category_id: &str, entry_id: &str) -> String {
    format!("{category_id}:{entry_id}")
}

/// Explicitly stored user choices, keyed by [`entry_key`]. Absence of a
/// key means "no decision recorded" — evaluation falls back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsentPreferences {
    values: BTreeMap<String, bool>,
}

impl ConsentPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice for an entry key.
    pub fn set(&mut self, key: impl Into<String>, allowed: bool) {
        self.values.insert(key.into(), allowed);
    }

    /// The stored choice for a key, if any.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    /// Remove a stored choice.
    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, bool> {
        self.values.iter()
    }
}

impl FromIterator<(String, bool)> for ConsentPreferences {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn default_allowed(category: &ConsentCategory, entry: &ConsentEntry) -> bool {
    category.required || entry.required || entry.default_state == DefaultState::On
}

fn entry_allowed(
    category: &ConsentCategory,
    entry: &ConsentEntry,
    preferences: &ConsentPreferences,
) -> bool {
    if category.required || entry.required {
        return true;
    }
    preferences
        .get(&entry_key(&category.id, &entry.id))
        .unwrap_or_else(|| default_allowed(category, entry))
}

/// Resolve effective consent for a category, or for one entry within it.
///
/// Unknown category or entry ids resolve to `false`. A category query
/// (`entry_id = None`) is `true` only if every entry in the category is
/// individually allowed.
pub fn has_consent(
    config: &[ConsentCategory],
    preferences: &ConsentPreferences,
    category_id: &str,
    entry_id: Option<&str>,
) -> bool {
    let Some(category) = config.iter().find(|c| c.id == category_id) else {
        return false;
    };
    match entry_id {
        Some(entry_id) => {
            let Some(entry) = category.entries.iter().find(|e| e.id == entry_id) else {
                return false;
            };
            entry_allowed(category, entry, preferences)
        }
        None => category
            .entries
            .iter()
            .all(|entry| entry_allowed(category, entry, preferences)),
    }
}

/// One preference per entry, at its default-allowed value. This is what a
/// banner shows before the user has decided anything.
pub fn default_preferences(config: &[ConsentCategory]) -> ConsentPreferences {
    config
        .iter()
        .flat_map(|category| {
            category.entries.iter().map(|entry| {
                (
                    entry_key(&category.id, &entry.id),
                    default_allowed(category, entry),
                )
            })
        })
        .collect()
}

/// Every entry granted.
pub fn accept_all(config: &[ConsentCategory]) -> ConsentPreferences {
    config
        .iter()
        .flat_map(|category| {
            category
                .entries
                .iter()
                .map(|entry| (entry_key(&category.id, &entry.id), true))
        })
        .collect()
}

/// Everything revocable denied; required entries stay granted.
pub fn reject_all(config: &[ConsentCategory]) -> ConsentPreferences {
    config
        .iter()
        .flat_map(|category| {
            category.entries.iter().map(|entry| {
                (
                    entry_key(&category.id, &entry.id),
                    category.required || entry.required,
                )
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
