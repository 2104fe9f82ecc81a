//! # Consent Composition & Gating Scenarios
//!
//! The full path a deployment takes: compose a configuration from the
//! vanilla baseline, store user preferences, and gate scripts on
//! effective consent.

use legalkit_consent::{
    accept_all, compose_consent_config, default_preferences, entry_key, has_consent, reject_all,
    CategoryUpdate, ConsentEntry, ConsentOverrides, ConsentPreferences, ConsentSnapshot,
    DefaultState,
};
use legalkit_core::TokenMap;
use legalkit_vanilla::vanilla_consent_config;

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

#[test]
fn omitting_social_leaves_four_categories() {
    let overrides = ConsentOverrides {
        omit_categories: vec!["social".into()],
        ..Default::default()
    };
    let config = compose_consent_config(&vanilla_consent_config("en"), Some(&overrides), None);
    assert_eq!(config.len(), 4);
    assert!(config.iter().all(|category| category.id != "social"));
}

#[test]
fn appended_analytics_entry_lands_last() {
    let mut overrides = ConsentOverrides::default();
    overrides
        .append_entries
        .insert("analytics".into(), vec![entry("x", "X")]);
    let config = compose_consent_config(&vanilla_consent_config("en"), Some(&overrides), None);
    let analytics = config
        .iter()
        .find(|category| category.id == "analytics")
        .unwrap();
    assert_eq!(analytics.entries.len(), 3);
    assert_eq!(analytics.entries.last().unwrap().id, "x");
}

#[test]
fn payments_token_reaches_the_banner_copy() {
    let mut tokens = TokenMap::new();
    tokens.insert("PAYMENTS_PROVIDER".into(), "Stripe".into());
    let config = compose_consent_config(&vanilla_consent_config("en"), None, Some(&tokens));
    let necessary = &config[0];
    assert_eq!(necessary.entries[1].label, "Payments (Stripe)");
}

#[test]
fn required_entries_survive_stored_rejection() {
    let config = vanilla_consent_config("en");
    let mut preferences = ConsentPreferences::new();
    preferences.set(entry_key("necessary", "session"), false);
    preferences.set(entry_key("necessary", "payments"), false);

    assert!(has_consent(&config, &preferences, "necessary", Some("session")));
    assert!(has_consent(&config, &preferences, "necessary", None));
}

#[test]
fn category_gate_requires_every_entry() {
    let config = vanilla_consent_config("en");
    let mut preferences = ConsentPreferences::new();
    preferences.set(entry_key("analytics", "plausible"), true);

    // umami is still denied, so the analytics provider gate stays closed.
    assert!(has_consent(&config, &preferences, "analytics", Some("plausible")));
    assert!(!has_consent(&config, &preferences, "analytics", None));

    preferences.set(entry_key("analytics", "umami"), true);
    assert!(has_consent(&config, &preferences, "analytics", None));
}

#[test]
fn reject_all_still_gates_nothing_required() {
    let config = vanilla_consent_config("en");
    let rejected = reject_all(&config);
    assert!(has_consent(&config, &rejected, "necessary", None));
    for category in ["preferences", "analytics", "advertising", "social"] {
        assert!(
            !has_consent(&config, &rejected, category, None),
            "{category} should be denied after reject-all"
        );
    }

    let accepted = accept_all(&config);
    for category in ["necessary", "preferences", "analytics", "advertising", "social"] {
        assert!(has_consent(&config, &accepted, category, None));
    }
}

#[test]
fn snapshot_round_trip_preserves_gating() {
    let config = vanilla_consent_config("en");
    let mut preferences = default_preferences(&config);
    preferences.set(entry_key("analytics", "plausible"), true);
    preferences.set(entry_key("analytics", "umami"), true);

    let stored = ConsentSnapshot::new(preferences).to_json().unwrap();
    let restored = ConsentSnapshot::from_json(&stored).unwrap();
    let merged = restored.merged_with_defaults(&config);

    assert!(has_consent(&config, &merged, "analytics", None));
    assert!(!has_consent(&config, &merged, "advertising", None));
}

#[test]
fn update_replaces_entries_for_a_trimmed_banner() {
    let mut overrides = ConsentOverrides::default();
    overrides.update_categories.insert(
        "analytics".into(),
        CategoryUpdate {
            entries: Some(vec![entry("plausible", "Plausible Analytics")]),
            ..Default::default()
        },
    );
    let config = compose_consent_config(&vanilla_consent_config("en"), Some(&overrides), None);
    let analytics = config
        .iter()
        .find(|category| category.id == "analytics")
        .unwrap();
    assert_eq!(analytics.entries.len(), 1);

    // With a single entry, granting it opens the category gate.
    let mut preferences = ConsentPreferences::new();
    preferences.set(entry_key("analytics", "plausible"), true);
    assert!(has_consent(&config, &preferences, "analytics", None));
}
