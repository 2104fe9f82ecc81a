//! # Preference Snapshots
//!
//! The serialized payload a caller-side preference store keeps,
//! typically in browser local storage. The snapshot is versioned
//! so a stored payload from an incompatible schema is rejected instead of
//! silently misread; the caller then falls back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConsentCategory;
use crate::evaluate::{default_preferences, ConsentPreferences};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: &str = "v1";

/// Snapshot decoding failures.
#[derive(Debug, Error)]
pub enum ConsentSnapshotError {
    /// The payload declares a schema version this build does not read.
    #[error("unsupported consent snapshot version: {0:?}")]
    UnsupportedVersion(String),

    /// The payload is not valid snapshot JSON.
    #[error("malformed consent snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A stored consent decision set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentSnapshot {
    pub version: String,
    pub preferences: ConsentPreferences,
}

impl ConsentSnapshot {
    /// Wrap preferences in a current-version snapshot.
    pub fn new(preferences: ConsentPreferences) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            preferences,
        }
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> Result<String, ConsentSnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored payload, rejecting unknown schema versions.
    pub fn from_json(raw: &str) -> Result<Self, ConsentSnapshotError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ConsentSnapshotError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }

    /// Overlay the stored choices onto the configuration's defaults.
    ///
    /// Entries added to the configuration after the snapshot was stored
    /// pick up their default-allowed value; stored choices win for
    /// everything else.
    pub fn merged_with_defaults(&self, config: &[ConsentCategory]) -> ConsentPreferences {
        let mut merged = default_preferences(config);
        for (key, allowed) in self.preferences.iter() {
            merged.set(key.clone(), *allowed);
        }
        merged
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsentEntry, DefaultState};
    use crate::evaluate::entry_key;

    fn config() -> Vec<ConsentCategory> {
        vec![ConsentCategory {
            id: "analytics".into(),
            title: "Analytics".into(),
            description: None,
            required: false,
            entries: vec![
                ConsentEntry {
                    id: "plausible".into(),
                    label: "Plausible".into(),
                    description: None,
                    cookies: None,
                    required: false,
                    default_state: DefaultState::Off,
                },
                ConsentEntry {
                    id: "umami".into(),
                    label: "Umami".into(),
                    description: None,
                    cookies: None,
                    required: false,
                    default_state: DefaultState::On,
                },
            ],
        }]
    }

    #[test]
    fn round_trips_through_json() {
        let mut preferences = ConsentPreferences::new();
        preferences.set(entry_key("analytics", "plausible"), true);
        let snapshot = ConsentSnapshot::new(preferences);
        let json = snapshot.to_json().unwrap();
        let back = ConsentSnapshot::from_json(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn rejects_unknown_versions() {
        let raw = r#"{"version":"v2","preferences":{}}"#;
        let err = ConsentSnapshot::from_json(raw).unwrap_err();
        assert!(matches!(
            err,
            ConsentSnapshotError::UnsupportedVersion(version) if version == "v2"
        ));
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(matches!(
            ConsentSnapshot::from_json("not json").unwrap_err(),
            ConsentSnapshotError::Parse(_)
        ));
    }

    #[test]
    fn merge_prefers_stored_choices_and_defaults_new_entries() {
        let mut preferences = ConsentPreferences::new();
        preferences.set(entry_key("analytics", "plausible"), true);
        let snapshot = ConsentSnapshot::new(preferences);
        let merged = snapshot.merged_with_defaults(&config());
        assert_eq!(merged.get("analytics:plausible"), Some(true));
        // umami was not in the snapshot; it takes its On default.
        assert_eq!(merged.get("analytics:umami"), Some(true));
    }
}
