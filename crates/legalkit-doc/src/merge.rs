//! # Section and Document Merge
//!
//! Reconciles a composed base document against a partial override.
//!
//! ## Invariants
//!
//! - Top-level fields shallow-merge: an override field that is present
//!   wins, an absent field keeps the base value.
//! - Section `blocks` are the one exception to shallow semantics: when an
//!   override supplies `blocks` they *replace* the base section's blocks
//!   wholesale; when absent, the base blocks are kept byte-for-byte.
//! - Overrides that match no base section append new sections at the end,
//!   in override-list order, after every merged base section.

use std::collections::BTreeMap;

use legalkit_core::{LegalDoc, LegalDocOverride, LegalSection, LegalSectionOverride};

/// Merge section overrides onto a base section list.
///
/// Matching is by section id. For a new (unmatched) section the title
/// defaults to the id and the blocks default to empty.
pub fn merge_sections(
    base: &[LegalSection],
    overrides: &[LegalSectionOverride],
) -> Vec<LegalSection> {
    if overrides.is_empty() {
        return base.to_vec();
    }

    // Last override wins when two share an id, matching map-insert order.
    let by_id: BTreeMap<&str, &LegalSectionOverride> = overrides
        .iter()
        .map(|section| (section.id.as_str(), section))
        .collect();

    let mut merged: Vec<LegalSection> = base
        .iter()
        .map(|section| match by_id.get(section.id.as_str()) {
            None => section.clone(),
            Some(patch) => LegalSection {
                id: section.id.clone(),
                title: patch.title.clone().unwrap_or_else(|| section.title.clone()),
                blocks: patch.blocks.clone().unwrap_or_else(|| section.blocks.clone()),
            },
        })
        .collect();

    for patch in overrides {
        if !base.iter().any(|section| section.id == patch.id) {
            merged.push(LegalSection {
                id: patch.id.clone(),
                title: patch.title.clone().unwrap_or_else(|| patch.id.clone()),
                blocks: patch.blocks.clone().unwrap_or_default(),
            });
        }
    }

    merged
}

/// Merge a document-level override onto a composed document.
pub fn merge_legal_doc(base: &LegalDoc, patch: Option<&LegalDocOverride>) -> LegalDoc {
    let Some(patch) = patch else {
        return base.clone();
    };

    LegalDoc {
        slug: patch.slug.clone().unwrap_or_else(|| base.slug.clone()),
        title: patch.title.clone().unwrap_or_else(|| base.title.clone()),
        summary: patch.summary.clone().or_else(|| base.summary.clone()),
        eyebrow: patch.eyebrow.clone().or_else(|| base.eyebrow.clone()),
        toc_label: patch.toc_label.clone().or_else(|| base.toc_label.clone()),
        updated_label: patch
            .updated_label
            .clone()
            .or_else(|| base.updated_label.clone()),
        updated_at: patch.updated_at.clone().or_else(|| base.updated_at.clone()),
        sections: merge_sections(&base.sections, &patch.sections),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use legalkit_core::LegalBlock;

    fn section(id: &str, title: &str, blocks: Vec<LegalBlock>) -> LegalSection {
        LegalSection {
            id: id.into(),
            title: title.into(),
            blocks,
        }
    }

    fn base_doc() -> LegalDoc {
        LegalDoc {
            slug: "terms".into(),
            title: "Terms of Service".into(),
            summary: Some("Base summary".into()),
            eyebrow: None,
            toc_label: None,
            updated_label: None,
            updated_at: None,
            sections: vec![
                section("intro", "Introduction", vec![LegalBlock::paragraph("Hello.")]),
                section("fees", "Fees", vec![LegalBlock::list(["Monthly billing."])]),
            ],
        }
    }

    #[test]
    fn title_override_keeps_blocks() {
        let overrides = [LegalSectionOverride {
            id: "intro".into(),
            title: Some("Welcome".into()),
            blocks: None,
        }];
        let merged = merge_sections(&base_doc().sections, &overrides);
        assert_eq!(merged[0].title, "Welcome");
        assert_eq!(merged[0].blocks, vec![LegalBlock::paragraph("Hello.")]);
    }

    #[test]
    fn blocks_override_replaces_wholesale() {
        let overrides = [LegalSectionOverride {
            id: "intro".into(),
            title: None,
            blocks: Some(vec![LegalBlock::note("Replaced.")]),
        }];
        let merged = merge_sections(&base_doc().sections, &overrides);
        assert_eq!(merged[0].title, "Introduction");
        assert_eq!(merged[0].blocks, vec![LegalBlock::note("Replaced.")]);
    }

    #[test]
    fn unmatched_override_appends_with_defaults() {
        let overrides = [LegalSectionOverride {
            id: "beta-notice".into(),
            title: None,
            blocks: None,
        }];
        let merged = merge_sections(&base_doc().sections, &overrides);
        assert_eq!(merged.len(), 3);
        let appended = merged.last().unwrap();
        assert_eq!(appended.id, "beta-notice");
        assert_eq!(appended.title, "beta-notice");
        assert!(appended.blocks.is_empty());
    }

    #[test]
    fn appended_sections_follow_all_base_sections() {
        let overrides = [
            LegalSectionOverride {
                id: "zzz-extra".into(),
                title: Some("Extra".into()),
                blocks: None,
            },
            LegalSectionOverride {
                id: "aaa-extra".into(),
                title: Some("Also extra".into()),
                blocks: None,
            },
        ];
        let merged = merge_sections(&base_doc().sections, &overrides);
        let ids: Vec<&str> = merged.iter().map(|s| s.id.as_str()).collect();
        // Appended in override-list order, not alphabetical.
        assert_eq!(ids, ["intro", "fees", "zzz-extra", "aaa-extra"]);
    }

    #[test]
    fn doc_merge_prefers_present_fields() {
        let base = base_doc();
        let patch = LegalDocOverride {
            title: Some("Custom Terms".into()),
            updated_at: Some("2026-03-01".into()),
            ..Default::default()
        };
        let merged = merge_legal_doc(&base, Some(&patch));
        assert_eq!(merged.title, "Custom Terms");
        assert_eq!(merged.summary.as_deref(), Some("Base summary"));
        assert_eq!(merged.updated_at.as_deref(), Some("2026-03-01"));
        assert_eq!(merged.slug, "terms");
    }

    #[test]
    fn doc_merge_without_override_is_identity() {
        let base = base_doc();
        assert_eq!(merge_legal_doc(&base, None), base);
    }

    #[test]
    fn merge_never_mutates_inputs() {
        let base = base_doc();
        let before = base.clone();
        let patch = LegalDocOverride {
            sections: vec![LegalSectionOverride {
                id: "intro".into(),
                title: Some("Changed".into()),
                blocks: Some(vec![]),
            }],
            ..Default::default()
        };
        let patch_before = patch.clone();
        let _ = merge_legal_doc(&base, Some(&patch));
        assert_eq!(base, before);
        assert_eq!(patch, patch_before);
    }
}
