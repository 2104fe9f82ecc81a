//! # Token Substitution
//!
//! Late-stage text substitution over composed documents. Placeholders use
//! the form `{{NAME}}` where `NAME` is uppercase ASCII letters, digits,
//! and underscores. Substitution runs after all structural composition so
//! snippet and override content is tokenized uniformly.
//!
//! ## Known limitation
//!
//! There is no escape for literal `{{NAME}}` text: any well-formed
//! placeholder in authored content is a substitution site. Replacement
//! values are spliced verbatim and never rescanned, so a pass is
//! idempotent whenever no replacement value itself contains `{{...}}`
//! syntax.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{LegalBlock, LegalDoc, LegalSection};

/// Token name → replacement text.
pub type TokenMap = BTreeMap<String, String>;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("token pattern is valid"));

/// Replace every known `{{NAME}}` placeholder in `value`.
///
/// Unknown placeholders are left verbatim; this never fails and never
/// blanks out text.
pub fn replace_tokens(value: &str, tokens: &TokenMap) -> String {
    TOKEN_PATTERN
        .replace_all(value, |caps: &regex::Captures<'_>| match tokens.get(&caps[1]) {
            Some(replacement) => replacement.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn replace_opt(value: &Option<String>, tokens: &TokenMap) -> Option<String> {
    value.as_deref().map(|text| replace_tokens(text, tokens))
}

fn apply_to_block(block: &LegalBlock, tokens: &TokenMap) -> LegalBlock {
    match block {
        LegalBlock::Paragraph { id, text } => LegalBlock::Paragraph {
            id: id.clone(),
            text: replace_tokens(text, tokens),
        },
        LegalBlock::Note { id, text } => LegalBlock::Note {
            id: id.clone(),
            text: replace_tokens(text, tokens),
        },
        LegalBlock::List { id, items } => LegalBlock::List {
            id: id.clone(),
            items: items.iter().map(|item| replace_tokens(item, tokens)).collect(),
        },
        LegalBlock::Table {
            id,
            headers,
            rows,
            caption,
        } => LegalBlock::Table {
            id: id.clone(),
            headers: headers.iter().map(|h| replace_tokens(h, tokens)).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| replace_tokens(cell, tokens)).collect())
                .collect(),
            caption: replace_opt(caption, tokens),
        },
    }
}

/// Apply token substitution to every string-bearing field of a document:
/// top-level labels, section titles, and all block content.
pub fn apply_legal_tokens(doc: &LegalDoc, tokens: &TokenMap) -> LegalDoc {
    if tokens.is_empty() {
        return doc.clone();
    }

    LegalDoc {
        slug: doc.slug.clone(),
        title: replace_tokens(&doc.title, tokens),
        summary: replace_opt(&doc.summary, tokens),
        eyebrow: replace_opt(&doc.eyebrow, tokens),
        toc_label: replace_opt(&doc.toc_label, tokens),
        updated_label: replace_opt(&doc.updated_label, tokens),
        updated_at: replace_opt(&doc.updated_at, tokens),
        sections: doc
            .sections
            .iter()
            .map(|section| LegalSection {
                id: section.id.clone(),
                title: replace_tokens(&section.title, tokens),
                blocks: section
                    .blocks
                    .iter()
                    .map(|block| apply_to_block(block, tokens))
                    .collect(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_tokens() {
        let map = tokens(&[("SERVICE_NAME", "Acme")]);
        assert_eq!(
            replace_tokens("Welcome to {{SERVICE_NAME}}.", &map),
            "Welcome to Acme."
        );
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let map = tokens(&[("SERVICE_NAME", "Acme")]);
        assert_eq!(
            replace_tokens("{{SERVICE_NAME}} vs {{UNSET}}", &map),
            "Acme vs {{UNSET}}"
        );
    }

    #[test]
    fn malformed_placeholders_are_ignored() {
        let map = tokens(&[("NAME", "x")]);
        // Lowercase and unclosed braces are not placeholders.
        assert_eq!(replace_tokens("{{name}} {{NAME", &map), "{{name}} {{NAME");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let map = tokens(&[("A", "{{B}}"), ("B", "boom")]);
        // {{B}} arrives verbatim from A's value and is not expanded.
        assert_eq!(replace_tokens("{{A}}", &map), "{{B}}");
    }

    #[test]
    fn applies_to_every_doc_field() {
        let doc = LegalDoc {
            slug: "terms".into(),
            title: "{{SERVICE_NAME}} Terms".into(),
            summary: Some("About {{SERVICE_NAME}}".into()),
            eyebrow: Some("{{SERVICE_NAME}}".into()),
            toc_label: None,
            updated_label: Some("Updated".into()),
            updated_at: Some("{{UPDATED_AT}}".into()),
            sections: vec![LegalSection {
                id: "intro".into(),
                title: "About {{SERVICE_NAME}}".into(),
                blocks: vec![
                    LegalBlock::paragraph("Hi from {{SERVICE_NAME}}."),
                    LegalBlock::list(["{{SERVICE_NAME}} item"]),
                    LegalBlock::table(["{{SERVICE_NAME}}"], [["cell {{SERVICE_NAME}}"]]),
                ],
            }],
        };
        let map = tokens(&[("SERVICE_NAME", "Acme"), ("UPDATED_AT", "2026-01-01")]);
        let out = apply_legal_tokens(&doc, &map);
        let rendered = serde_json::to_string(&out).unwrap();
        assert!(!rendered.contains("{{SERVICE_NAME}}"));
        assert!(rendered.contains("Hi from Acme."));
        assert_eq!(out.updated_at.as_deref(), Some("2026-01-01"));
        // Inputs are untouched.
        assert!(doc.title.contains("{{SERVICE_NAME}}"));
    }

    proptest! {
        #[test]
        fn token_pass_is_idempotent(
            text in r"[a-zA-Z {}]{0,40}(\{\{[A-Z_]{1,8}\}\})?[a-zA-Z {}]{0,40}",
            name in "[A-Z_]{1,8}",
            // Non-empty: an empty replacement could splice surrounding
            // braces into a brand-new placeholder.
            value in "[a-z0-9 .]{1,20}",
        ) {
            let map = tokens(&[(name.as_str(), value.as_str())]);
            let once = replace_tokens(&text, &map);
            let twice = replace_tokens(&once, &map);
            prop_assert_eq!(once, twice);
        }
    }
}
