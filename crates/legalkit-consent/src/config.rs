//! # Consent Categories & Composition
//!
//! The consent data model and the composer that derives a deployment's
//! configuration from a baseline plus category-level overrides.
//!
//! Categories are open-ended — a deployment may add its own — so ids are
//! plain strings rather than a closed enum. The well-known baseline ids
//! live in [`category_ids`] and [`entry_ids`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use legalkit_core::{replace_tokens, TokenMap};

/// Well-known category ids shipped by the vanilla baseline.
pub mod category_ids {
    pub const NECESSARY: &str = "necessary";
    pub const PREFERENCES: &str = "preferences";
    pub const ANALYTICS: &str = "analytics";
    pub const ADVERTISING: &str = "advertising";
    pub const SOCIAL: &str = "social";
}

/// Well-known entry ids shipped by the vanilla baseline.
pub mod entry_ids {
    pub const SESSION: &str = "session";
    pub const PAYMENTS: &str = "payments";
    pub const UI_PREFERENCES: &str = "ui-preferences";
    pub const PLAUSIBLE: &str = "plausible";
    pub const UMAMI: &str = "umami";
    pub const GOOGLE_ADS: &str = "google-ads";
    pub const META: &str = "meta";
    pub const LINKEDIN: &str = "linkedin";
}

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Whether an entry is pre-granted before the user makes any choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultState {
    On,
    #[default]
    Off,
}

/// One grantable purpose inside a category, typically a single provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentEntry {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cookie name patterns set by this provider (informational; shown in
    /// the banner's detail view). `*` suffixes are wildcard conventions
    /// for the UI, not evaluated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<String>>,
    /// Required entries are always effectively granted.
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_state: DefaultState,
}

/// A user-facing group of consent entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCategory {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A required category forces every entry it contains.
    #[serde(default)]
    pub required: bool,
    pub entries: Vec<ConsentEntry>,
}

/// A full consent configuration, in banner display order.
pub type ConsentConfig = Vec<ConsentCategory>;

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// A partial patch for one category. Non-`entries` fields shallow-merge;
/// `entries`, when present, replaces the category's entry list (appended
/// extras are concatenated afterwards).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<ConsentEntry>>,
}

/// Deployment-level adjustments to a baseline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsentOverrides {
    /// Extra entries appended to a category, keyed by category id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub append_entries: BTreeMap<String, Vec<ConsentEntry>>,
    /// Field patches per category id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub update_categories: BTreeMap<String, CategoryUpdate>,
    /// Category ids dropped from the result.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omit_categories: Vec<String>,
    /// When present, replaces the baseline wholesale; every other
    /// override field is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_categories: Option<Vec<ConsentCategory>>,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

fn replace_opt(value: &Option<String>, tokens: &TokenMap) -> Option<String> {
    value.as_deref().map(|text| replace_tokens(text, tokens))
}

fn apply_to_entry(entry: &ConsentEntry, tokens: &TokenMap) -> ConsentEntry {
    ConsentEntry {
        id: entry.id.clone(),
        label: replace_tokens(&entry.label, tokens),
        description: replace_opt(&entry.description, tokens),
        cookies: entry
            .cookies
            .as_ref()
            .map(|patterns| patterns.iter().map(|p| replace_tokens(p, tokens)).collect()),
        required: entry.required,
        default_state: entry.default_state,
    }
}

/// Apply token substitution to every user-facing string of a consent
/// configuration: category titles and descriptions, entry labels and
/// descriptions, and cookie patterns.
pub fn apply_consent_tokens(config: &[ConsentCategory], tokens: &TokenMap) -> ConsentConfig {
    if tokens.is_empty() {
        return config.to_vec();
    }

    config
        .iter()
        .map(|category| ConsentCategory {
            id: category.id.clone(),
            title: replace_tokens(&category.title, tokens),
            description: replace_opt(&category.description, tokens),
            required: category.required,
            entries: category
                .entries
                .iter()
                .map(|entry| apply_to_entry(entry, tokens))
                .collect(),
        })
        .collect()
}

/// Compose a consent configuration from a baseline and optional
/// overrides, applying token substitution last.
pub fn compose_consent_config(
    template: &[ConsentCategory],
    overrides: Option<&ConsentOverrides>,
    tokens: Option<&TokenMap>,
) -> ConsentConfig {
    let empty = TokenMap::new();
    let tokens = tokens.unwrap_or(&empty);

    let Some(overrides) = overrides else {
        return apply_consent_tokens(template, tokens);
    };

    if let Some(replacement) = &overrides.replace_categories {
        return apply_consent_tokens(replacement, tokens);
    }

    let merged: Vec<ConsentCategory> = template
        .iter()
        .filter(|category| !overrides.omit_categories.contains(&category.id))
        .map(|category| {
            let update = overrides.update_categories.get(&category.id);
            let extra = overrides
                .append_entries
                .get(&category.id)
                .cloned()
                .unwrap_or_default();

            let mut entries = match update.and_then(|u| u.entries.clone()) {
                Some(replaced) => replaced,
                None => category.entries.clone(),
            };
            entries.extend(extra);

            ConsentCategory {
                id: category.id.clone(),
                title: update
                    .and_then(|u| u.title.clone())
                    .unwrap_or_else(|| category.title.clone()),
                description: update
                    .and_then(|u| u.description.clone())
                    .or_else(|| category.description.clone()),
                required: update
                    .and_then(|u| u.required)
                    .unwrap_or(category.required),
                entries,
            }
        })
        .collect();

    apply_consent_tokens(&merged, tokens)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, label: &str) -> ConsentEntry {
        ConsentEntry {
            id: id.into(),
            label: label.into(),
            description: None,
            cookies: None,
            required: false,
            default_state: DefaultState::Off,
        }
    }

    fn baseline() -> ConsentConfig {
        vec![
            ConsentCategory {
                id: "necessary".into(),
                title: "Strictly necessary".into(),
                description: Some("Always on.".into()),
                required: true,
                entries: vec![ConsentEntry {
                    required: true,
                    default_state: DefaultState::On,
                    cookies: Some(vec!["__session".into()]),
                    ..entry("session", "Sessions")
                }],
            },
            ConsentCategory {
                id: "analytics".into(),
                title: "Analytics".into(),
                description: None,
                required: false,
                entries: vec![
                    entry("plausible", "Plausible"),
                    entry("umami", "Umami ({{SERVICE_NAME}})"),
                ],
            },
        ]
    }

    #[test]
    fn no_overrides_is_tokenized_clone() {
        let config = compose_consent_config(&baseline(), None, None);
        assert_eq!(config, baseline());
    }

    #[test]
    fn omit_drops_categories() {
        let overrides = ConsentOverrides {
            omit_categories: vec!["analytics".into()],
            ..Default::default()
        };
        let config = compose_consent_config(&baseline(), Some(&overrides), None);
        assert_eq!(config.len(), 1);
        assert!(config.iter().all(|category| category.id != "analytics"));
    }

    #[test]
    fn append_entries_concatenate_last() {
        let mut overrides = ConsentOverrides::default();
        overrides
            .append_entries
            .insert("analytics".into(), vec![entry("matomo", "Matomo")]);
        let config = compose_consent_config(&baseline(), Some(&overrides), None);
        let analytics = &config[1];
        assert_eq!(analytics.entries.len(), 3);
        assert_eq!(analytics.entries.last().unwrap().id, "matomo");
    }

    #[test]
    fn update_entries_replace_then_append() {
        let mut overrides = ConsentOverrides::default();
        overrides.update_categories.insert(
            "analytics".into(),
            CategoryUpdate {
                title: Some("Usage analytics".into()),
                entries: Some(vec![entry("posthog", "PostHog")]),
                ..Default::default()
            },
        );
        overrides
            .append_entries
            .insert("analytics".into(), vec![entry("matomo", "Matomo")]);
        let config = compose_consent_config(&baseline(), Some(&overrides), None);
        let analytics = &config[1];
        assert_eq!(analytics.title, "Usage analytics");
        let ids: Vec<&str> = analytics.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["posthog", "matomo"]);
    }

    #[test]
    fn update_without_entries_keeps_extended_list() {
        let mut overrides = ConsentOverrides::default();
        overrides.update_categories.insert(
            "analytics".into(),
            CategoryUpdate {
                description: Some("Usage statistics.".into()),
                ..Default::default()
            },
        );
        overrides
            .append_entries
            .insert("analytics".into(), vec![entry("matomo", "Matomo")]);
        let config = compose_consent_config(&baseline(), Some(&overrides), None);
        let analytics = &config[1];
        assert_eq!(analytics.description.as_deref(), Some("Usage statistics."));
        assert_eq!(analytics.entries.len(), 3);
    }

    #[test]
    fn replace_categories_ignores_other_overrides() {
        let overrides = ConsentOverrides {
            replace_categories: Some(vec![ConsentCategory {
                id: "custom".into(),
                title: "{{SERVICE_NAME}} only".into(),
                description: None,
                required: false,
                entries: vec![],
            }]),
            omit_categories: vec!["custom".into()],
            ..Default::default()
        };
        let mut tokens = TokenMap::new();
        tokens.insert("SERVICE_NAME".into(), "Acme".into());
        let config = compose_consent_config(&baseline(), Some(&overrides), Some(&tokens));
        assert_eq!(config.len(), 1);
        assert_eq!(config[0].id, "custom");
        assert_eq!(config[0].title, "Acme only");
    }

    #[test]
    fn tokens_reach_entry_labels_and_cookies() {
        let mut config = baseline();
        config[1].entries[0].cookies = Some(vec!["_{{SERVICE_NAME}}*".into()]);
        let mut tokens = TokenMap::new();
        tokens.insert("SERVICE_NAME".into(), "acme".into());
        let composed = compose_consent_config(&config, None, Some(&tokens));
        assert_eq!(composed[1].entries[1].label, "Umami (acme)");
        assert_eq!(
            composed[1].entries[0].cookies.as_ref().unwrap()[0],
            "_acme*"
        );
    }

    #[test]
    fn default_state_deserializes_lowercase_and_defaults_off() {
        let entry: ConsentEntry = serde_json::from_value(serde_json::json!({
            "id": "x",
            "label": "X",
            "default_state": "on",
        }))
        .unwrap();
        assert_eq!(entry.default_state, DefaultState::On);

        let entry: ConsentEntry = serde_json::from_value(serde_json::json!({
            "id": "y",
            "label": "Y",
        }))
        .unwrap();
        assert_eq!(entry.default_state, DefaultState::Off);
        assert!(!entry.required);
    }

    #[test]
    fn composition_never_mutates_inputs() {
        let template = baseline();
        let template_before = template.clone();
        let mut overrides = ConsentOverrides::default();
        overrides
            .append_entries
            .insert("analytics".into(), vec![entry("matomo", "Matomo")]);
        let overrides_before = overrides.clone();
        let _ = compose_consent_config(&template, Some(&overrides), None);
        assert_eq!(template, template_before);
        assert_eq!(overrides, overrides_before);
    }
}
