//! # legalkit-vanilla — Stock Bilingual Content Baseline
//!
//! Ready-made terms/privacy/cookies templates, their snippet libraries,
//! and the stock consent configuration, in English and Finnish. A
//! deployment composes these as-is, layers overrides on top, or supplies
//! its own content and ignores this crate entirely.
//!
//! Content is built once at first use and held in process-wide statics;
//! accessors hand out owned clones, so callers may freely mutate what
//! they receive without affecting the baseline.
//!
//! ## Locale resolution
//!
//! Locale strings normalize to their primary language subtag
//! ([`legalkit_core::normalize_locale`]) and resolve against the
//! per-locale maps with English fallback. Template lookup falls back
//! per slug, so a locale with partial coverage serves English for the
//! slugs it lacks.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use legalkit_consent::{ConsentCategory, ConsentConfig};
use legalkit_core::{normalize_locale, LegalTemplate, SnippetLibrary};

mod consent;
mod snippets;
mod templates;

static TEMPLATES_EN: LazyLock<BTreeMap<String, LegalTemplate>> =
    LazyLock::new(templates::templates_en);
static TEMPLATES_FI: LazyLock<BTreeMap<String, LegalTemplate>> =
    LazyLock::new(templates::templates_fi);
static SNIPPETS_EN: LazyLock<SnippetLibrary> = LazyLock::new(snippets::snippets_en);
static SNIPPETS_FI: LazyLock<SnippetLibrary> = LazyLock::new(snippets::snippets_fi);
static CONSENT_EN: LazyLock<ConsentConfig> = LazyLock::new(consent::consent_en);
static CONSENT_FI: LazyLock<ConsentConfig> = LazyLock::new(consent::consent_fi);

/// Locales with vanilla content, default first.
pub fn vanilla_legal_locales() -> Vec<&'static str> {
    vec!["en", "fi"]
}

/// Template slugs shipped by the baseline, in display order.
pub fn vanilla_legal_slugs() -> Vec<&'static str> {
    vec!["terms", "privacy", "cookies"]
}

fn templates_for(locale: &str) -> &'static BTreeMap<String, LegalTemplate> {
    match normalize_locale(locale).as_str() {
        "fi" => &TEMPLATES_FI,
        _ => &TEMPLATES_EN,
    }
}

/// The vanilla template for a slug, resolved by locale with a per-slug
/// English fallback. Returns `None` for an unknown slug.
pub fn vanilla_legal_template(locale: &str, slug: &str) -> Option<LegalTemplate> {
    let template = templates_for(locale)
        .get(slug)
        .or_else(|| TEMPLATES_EN.get(slug))
        .cloned();
    if template.is_none() && cfg!(debug_assertions) {
        tracing::warn!(%locale, %slug, "unknown vanilla template slug");
    }
    template
}

/// The vanilla snippet library for a locale; English for unknown locales.
pub fn vanilla_legal_snippets(locale: &str) -> SnippetLibrary {
    match normalize_locale(locale).as_str() {
        "fi" => SNIPPETS_FI.clone(),
        _ => SNIPPETS_EN.clone(),
    }
}

/// The stock consent configuration for a locale; English for unknown
/// locales.
pub fn vanilla_consent_config(locale: &str) -> ConsentConfig {
    match normalize_locale(locale).as_str() {
        "fi" => CONSENT_FI.clone(),
        _ => CONSENT_EN.clone(),
    }
}

/// One stock consent category by id, if the baseline ships it.
pub fn vanilla_consent_category(locale: &str, id: &str) -> Option<ConsentCategory> {
    vanilla_consent_config(locale)
        .into_iter()
        .find(|category| category.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use legalkit_core::LegalSnippet;

    #[test]
    fn every_locale_ships_every_slug() {
        for locale in vanilla_legal_locales() {
            for slug in vanilla_legal_slugs() {
                let template = vanilla_legal_template(locale, slug)
                    .unwrap_or_else(|| panic!("missing {locale}/{slug}"));
                assert_eq!(template.slug, slug);
                assert!(!template.sections.is_empty());
            }
        }
    }

    #[test]
    fn every_template_snippet_reference_resolves() {
        for locale in vanilla_legal_locales() {
            let library = vanilla_legal_snippets(locale);
            for slug in vanilla_legal_slugs() {
                let template = vanilla_legal_template(locale, slug).unwrap();
                for section in &template.sections {
                    for snippet_id in &section.snippet_ids {
                        assert!(
                            library.contains_key(snippet_id),
                            "{locale}/{slug}: unresolved snippet {snippet_id}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn table_row_snippets_target_existing_tables() {
        for locale in vanilla_legal_locales() {
            let library = vanilla_legal_snippets(locale);
            let table_ids: Vec<String> = library
                .values()
                .filter_map(|snippet| match snippet {
                    LegalSnippet::Blocks { blocks, .. } => Some(blocks),
                    LegalSnippet::TableRows { .. } => None,
                })
                .flatten()
                .filter(|block| matches!(block, legalkit_core::LegalBlock::Table { .. }))
                .filter_map(|block| block.id().map(str::to_string))
                .collect();
            for snippet in library.values() {
                if let LegalSnippet::TableRows { table_rows, .. } = snippet {
                    assert!(
                        table_ids.contains(&table_rows.table_id),
                        "{locale}: dangling table target {}",
                        table_rows.table_id
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let template = vanilla_legal_template("sv-SE", "terms").unwrap();
        assert_eq!(template.title, "Terms of Service");
        let config = vanilla_consent_config("de");
        assert_eq!(config[0].title, "Strictly necessary");
    }

    #[test]
    fn region_subtags_resolve_to_language() {
        let template = vanilla_legal_template("fi-FI", "terms").unwrap();
        assert_eq!(template.title, "Käyttöehdot");
        assert_eq!(vanilla_consent_config("fi_FI")[0].title, "Välttämättömät");
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(vanilla_legal_template("en", "imprint").is_none());
    }

    #[test]
    fn consent_baseline_has_five_categories() {
        for locale in vanilla_legal_locales() {
            let config = vanilla_consent_config(locale);
            let ids: Vec<&str> = config.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(
                ids,
                ["necessary", "preferences", "analytics", "advertising", "social"]
            );
            assert!(config[0].required);
        }
    }

    #[test]
    fn consent_category_lookup_clones() {
        let mut category = vanilla_consent_category("en", "analytics").unwrap();
        assert_eq!(category.entries.len(), 2);
        category.entries.clear();
        // The baseline is unaffected by mutations of the returned clone.
        assert_eq!(
            vanilla_consent_category("en", "analytics").unwrap().entries.len(),
            2
        );
        assert!(vanilla_consent_category("en", "marketing").is_none());
    }
}
