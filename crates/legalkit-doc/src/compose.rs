//! # Document Composer
//!
//! Resolves a template's snippet references, applies ad-hoc placements,
//! merges overrides, injects accumulated table rows, and finally runs
//! token substitution.
//!
//! ## Ordering invariants
//!
//! - Template sections compose in template order; placements run after
//!   every template section exists, so a placement can target any of them.
//! - An id in `omit` suppresses both its template section and any snippet
//!   or placement carrying that id — omission wins over inclusion.
//! - Table-row injections accumulate across snippets and placements and
//!   are applied once, after override merge; two snippets targeting the
//!   same table id concatenate their rows in accumulation order.
//! - A table block with zero rows after injection is dropped; tables are
//!   never rendered empty.
//! - Tokens are applied last, over the fully merged document.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use legalkit_core::{
    apply_legal_tokens, LegalBlock, LegalDoc, LegalDocOverride, LegalSnippet, LegalTemplate,
    Position, SnippetLibrary, SnippetPlacement, TokenMap,
};

use crate::merge::merge_legal_doc;

/// Inputs to [`compose_legal_doc`] beyond the template itself. All fields
/// default to empty; `ComposeOptions::default()` composes the template
/// as-is.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Snippet library resolved against section `snippet_ids` and
    /// placement `snippet_id`s.
    pub snippets: SnippetLibrary,
    /// Ad-hoc placements processed after all template sections.
    pub include: Vec<SnippetPlacement>,
    /// Section and snippet ids to suppress entirely.
    pub omit: Vec<String>,
    /// Structural override, applied before table-row injection.
    pub doc_override: Option<LegalDocOverride>,
    /// Token substitutions, applied last.
    pub tokens: TokenMap,
}

/// A pending table-row injection recorded while resolving snippets.
#[derive(Debug, Clone)]
struct TableRowInjection {
    table_id: String,
    rows: Vec<Vec<String>>,
}

fn warn_missing_snippet(snippet_id: &str) {
    if cfg!(debug_assertions) {
        tracing::warn!(%snippet_id, "missing snippet; reference dropped");
    }
}

fn warn_missing_section(section_id: &str, snippet_id: &str) {
    if cfg!(debug_assertions) {
        tracing::warn!(%section_id, %snippet_id, "missing placement section; placement dropped");
    }
}

/// Resolve one snippet into a section's block list or the pending
/// injection queue.
fn add_snippet(
    snippet: &LegalSnippet,
    blocks: &mut Vec<LegalBlock>,
    pending: &mut Vec<TableRowInjection>,
    position: Position,
) {
    match snippet {
        LegalSnippet::Blocks {
            blocks: snippet_blocks,
            ..
        } => match position {
            Position::Start => {
                let mut merged = snippet_blocks.clone();
                merged.append(blocks);
                *blocks = merged;
            }
            Position::End => blocks.extend(snippet_blocks.iter().cloned()),
        },
        LegalSnippet::TableRows { table_rows, .. } => pending.push(TableRowInjection {
            table_id: table_rows.table_id.clone(),
            rows: table_rows.rows.clone(),
        }),
    }
}

/// Append accumulated rows to their target tables and drop tables that
/// end up empty.
fn append_table_rows(mut doc: LegalDoc, pending: Vec<TableRowInjection>) -> LegalDoc {
    let mut grouped: BTreeMap<String, Vec<Vec<String>>> = BTreeMap::new();
    for injection in pending {
        grouped
            .entry(injection.table_id)
            .or_default()
            .extend(injection.rows);
    }

    for section in &mut doc.sections {
        let blocks = std::mem::take(&mut section.blocks);
        section.blocks = blocks
            .into_iter()
            .map(|block| match block {
                LegalBlock::Table {
                    id: Some(table_id),
                    headers,
                    mut rows,
                    caption,
                } => {
                    if let Some(injected) = grouped.get(&table_id) {
                        rows.extend(injected.iter().cloned());
                    }
                    LegalBlock::Table {
                        id: Some(table_id),
                        headers,
                        rows,
                        caption,
                    }
                }
                other => other,
            })
            .filter(|block| !matches!(block, LegalBlock::Table { rows, .. } if rows.is_empty()))
            .collect();
    }

    doc
}

/// Compose a legal document from a template and composition options.
///
/// Missing snippets and placement targets are dropped (with a debug-build
/// warning); composition itself never fails.
pub fn compose_legal_doc(template: &LegalTemplate, options: &ComposeOptions) -> LegalDoc {
    let omitted: BTreeSet<&str> = options.omit.iter().map(String::as_str).collect();
    let mut pending: Vec<TableRowInjection> = Vec::new();

    let mut doc = LegalDoc {
        slug: template.slug.clone(),
        title: template.title.clone(),
        summary: template.summary.clone(),
        eyebrow: template.eyebrow.clone(),
        toc_label: template.toc_label.clone(),
        updated_label: template.updated_label.clone(),
        updated_at: template.updated_at.clone(),
        sections: Vec::new(),
    };

    for section in &template.sections {
        if omitted.contains(section.id.as_str()) {
            continue;
        }

        let mut blocks = section.blocks.clone();
        for snippet_id in &section.snippet_ids {
            if omitted.contains(snippet_id.as_str()) {
                continue;
            }
            match options.snippets.get(snippet_id) {
                None => warn_missing_snippet(snippet_id),
                Some(snippet) => add_snippet(snippet, &mut blocks, &mut pending, Position::End),
            }
        }

        doc.sections.push(legalkit_core::LegalSection {
            id: section.id.clone(),
            title: section.title.clone(),
            blocks,
        });
    }

    for placement in &options.include {
        if omitted.contains(placement.snippet_id.as_str()) {
            continue;
        }
        let Some(snippet) = options.snippets.get(&placement.snippet_id) else {
            warn_missing_snippet(&placement.snippet_id);
            continue;
        };
        let Some(target) = doc
            .sections
            .iter_mut()
            .find(|section| section.id == placement.section_id)
        else {
            warn_missing_section(&placement.section_id, &placement.snippet_id);
            continue;
        };
        add_snippet(snippet, &mut target.blocks, &mut pending, placement.position);
    }

    let merged = match options.doc_override.as_ref() {
        Some(patch) => merge_legal_doc(&doc, Some(patch)),
        None => doc,
    };
    let injected = append_table_rows(merged, pending);
    if options.tokens.is_empty() {
        injected
    } else {
        apply_legal_tokens(&injected, &options.tokens)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
