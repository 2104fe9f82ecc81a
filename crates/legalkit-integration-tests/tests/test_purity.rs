//! # Purity Properties
//!
//! Composition is a pure function: inputs compare equal before and after
//! every call, repeated calls agree, and token passes are idempotent over
//! real vanilla content.

use proptest::prelude::*;

use legalkit_consent::{compose_consent_config, ConsentOverrides};
use legalkit_core::{apply_legal_tokens, Position, SnippetPlacement, TokenMap};
use legalkit_doc::{compose_legal_doc, ComposeOptions};
use legalkit_vanilla::{vanilla_legal_snippets, vanilla_legal_template};

fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn composition_inputs_are_untouched() {
    let template = vanilla_legal_template("en", "privacy").unwrap();
    let template_before = template.clone();
    let options = ComposeOptions {
        snippets: vanilla_legal_snippets("en"),
        include: vec![SnippetPlacement {
            section_id: "data-we-collect".into(),
            snippet_id: "privacy.data_we_collect.usage".into(),
            position: Position::End,
        }],
        omit: vec!["security".into()],
        doc_override: None,
        tokens: tokens(&[("SERVICE_NAME", "Acme")]),
    };
    let snippets_before = options.snippets.clone();

    let _ = compose_legal_doc(&template, &options);

    assert_eq!(template, template_before);
    assert_eq!(options.snippets, snippets_before);
}

#[test]
fn composition_is_deterministic() {
    let template = vanilla_legal_template("fi", "terms").unwrap();
    let options = ComposeOptions {
        snippets: vanilla_legal_snippets("fi"),
        tokens: tokens(&[("SERVICE_NAME", "Acme"), ("PAYMENTS_PROVIDER", "Stripe")]),
        ..Default::default()
    };
    assert_eq!(
        compose_legal_doc(&template, &options),
        compose_legal_doc(&template, &options)
    );
}

#[test]
fn consent_composition_inputs_are_untouched() {
    let baseline = legalkit_vanilla::vanilla_consent_config("fi");
    let baseline_before = baseline.clone();
    let overrides = ConsentOverrides {
        omit_categories: vec!["advertising".into()],
        ..Default::default()
    };
    let overrides_before = overrides.clone();

    let _ = compose_consent_config(&baseline, Some(&overrides), None);

    assert_eq!(baseline, baseline_before);
    assert_eq!(overrides, overrides_before);
}

#[test]
fn token_pass_is_idempotent_over_vanilla_terms() {
    let template = vanilla_legal_template("en", "terms").unwrap();
    let options = ComposeOptions {
        snippets: vanilla_legal_snippets("en"),
        ..Default::default()
    };
    let doc = compose_legal_doc(&template, &options);
    let map = tokens(&[
        ("SERVICE_NAME", "Acme"),
        ("PAYMENTS_PROVIDER", "Stripe"),
        ("GOVERNING_LAW", "Finland"),
        ("GOVERNING_VENUE", "Helsinki"),
        ("CONTACT_URL", "/contact"),
    ]);

    let once = apply_legal_tokens(&doc, &map);
    let twice = apply_legal_tokens(&once, &map);
    assert_eq!(once, twice);
}

proptest! {
    // Token values without {{...}} syntax keep the pass idempotent for
    // arbitrary replacements, not just the fixtures above.
    #[test]
    fn token_pass_is_idempotent_for_arbitrary_values(
        service in "[A-Za-z0-9 ]{1,24}",
        provider in "[A-Za-z0-9 ]{1,24}",
    ) {
        let template = vanilla_legal_template("en", "terms").unwrap();
        let options = ComposeOptions {
            snippets: vanilla_legal_snippets("en"),
            ..Default::default()
        };
        let doc = compose_legal_doc(&template, &options);
        let map = tokens(&[
            ("SERVICE_NAME", service.as_str()),
            ("PAYMENTS_PROVIDER", provider.as_str()),
        ]);
        let once = apply_legal_tokens(&doc, &map);
        let twice = apply_legal_tokens(&once, &map);
        prop_assert_eq!(once, twice);
    }
}
