//! # Legal Document Data Model
//!
//! Blocks, sections, templates, snippets, placements, and overrides.
//!
//! A *template* is the authoring-time skeleton of a document: its sections
//! reference reusable *snippets* by id instead of embedding final content.
//! Composition resolves those references into a *document* whose sections
//! carry only literal blocks. *Overrides* are partial patches applied
//! after snippet resolution, keyed by section id.
//!
//! ## Invariants
//!
//! - Section ids are unique within a document; snippet ids are unique
//!   within a library. Both are the join keys for overrides, placements,
//!   and anchor navigation.
//! - Table blocks may share an `id`: row injection aggregates rows across
//!   every matching table, in document order.
//! - Block `id`s are optional everywhere else and serve only as anchors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// A renderable content unit inside a legal document section.
///
/// The serialized form is internally tagged (`"type": "paragraph"` etc.),
/// matching the authoring format used by content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegalBlock {
    /// A body paragraph.
    Paragraph {
        /// Optional anchor id.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Paragraph text. May contain `{{TOKEN}}` placeholders and
        /// `[label](path)` links; link resolution is a rendering concern.
        text: String,
    },
    /// A bulleted list.
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// List items, one string per bullet.
        items: Vec<String>,
    },
    /// A highlighted note or callout.
    Note {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        text: String,
    },
    /// A data table. The `id` is the anchor targeted by table-row
    /// injection snippets.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl LegalBlock {
    /// Build a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            id: None,
            text: text.into(),
        }
    }

    /// Build a note block.
    pub fn note(text: impl Into<String>) -> Self {
        Self::Note {
            id: None,
            text: text.into(),
        }
    }

    /// Build a list block.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            id: None,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a table block without a caption.
    pub fn table<H, S, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::Table {
            id: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            caption: None,
        }
    }

    /// Attach an anchor id to this block.
    pub fn with_id(mut self, anchor: impl Into<String>) -> Self {
        let slot = match &mut self {
            Self::Paragraph { id, .. }
            | Self::List { id, .. }
            | Self::Note { id, .. }
            | Self::Table { id, .. } => id,
        };
        *slot = Some(anchor.into());
        self
    }

    /// The block's anchor id, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Paragraph { id, .. }
            | Self::List { id, .. }
            | Self::Note { id, .. }
            | Self::Table { id, .. } => id.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections and documents
// ---------------------------------------------------------------------------

/// A fully resolved document section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSection {
    /// Unique within the document; join key for overrides and navigation.
    pub id: String,
    pub title: String,
    pub blocks: Vec<LegalBlock>,
}

/// The composed, ready-to-render legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDoc {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_label: Option<String>,
    /// Author-supplied display date. Opaque to composition; may carry
    /// tokens like any other string field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub sections: Vec<LegalSection>,
}

impl LegalDoc {
    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&LegalSection> {
        self.sections.iter().find(|section| section.id == id)
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// An authoring-time section: literal blocks, snippet references, or both.
/// Both lists may be empty, yielding an empty section after composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalTemplateSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<LegalBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snippet_ids: Vec<String>,
}

impl LegalTemplateSection {
    /// Build an empty section.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            blocks: Vec::new(),
            snippet_ids: Vec::new(),
        }
    }

    /// Add snippet references, resolved in order at composition time.
    pub fn with_snippets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.snippet_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add literal blocks, kept ahead of any resolved snippet blocks.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = LegalBlock>,
    {
        self.blocks.extend(blocks);
        self
    }
}

/// The authoring-time source of a legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalTemplate {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub sections: Vec<LegalTemplateSection>,
}

// ---------------------------------------------------------------------------
// Snippets
// ---------------------------------------------------------------------------

/// Rows destined for a specific table anchor, wherever it occurs in the
/// composed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowSet {
    /// Anchor id of the target table block(s).
    pub table_id: String,
    pub rows: Vec<Vec<String>>,
}

/// A reusable content fragment referenced by id from template sections or
/// placements.
///
/// Serialized untagged: a snippet either carries `blocks` (inserted
/// wholesale into a section) or `table_rows` (appended to matching table
/// blocks after all structural composition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegalSnippet {
    /// Blocks inserted into a section's block list.
    Blocks { id: String, blocks: Vec<LegalBlock> },
    /// Rows appended to table blocks matched by `table_id`.
    TableRows { id: String, table_rows: TableRowSet },
}

impl LegalSnippet {
    /// Build a block snippet.
    pub fn blocks<I>(id: impl Into<String>, blocks: I) -> Self
    where
        I: IntoIterator<Item = LegalBlock>,
    {
        Self::Blocks {
            id: id.into(),
            blocks: blocks.into_iter().collect(),
        }
    }

    /// Build a table-row snippet.
    pub fn table_rows<R, C>(id: impl Into<String>, table_id: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::TableRows {
            id: id.into(),
            table_rows: TableRowSet {
                table_id: table_id.into(),
                rows: rows
                    .into_iter()
                    .map(|row| row.into_iter().map(Into::into).collect())
                    .collect(),
            },
        }
    }

    /// The snippet's id.
    pub fn id(&self) -> &str {
        match self {
            Self::Blocks { id, .. } | Self::TableRows { id, .. } => id,
        }
    }
}

/// A snippet library keyed by snippet id. Ordered for deterministic
/// serialization and stable warning output.
pub type SnippetLibrary = BTreeMap<String, LegalSnippet>;

/// Collect snippets into a library keyed by their own ids.
pub fn snippet_library<I>(snippets: I) -> SnippetLibrary
where
    I: IntoIterator<Item = LegalSnippet>,
{
    snippets
        .into_iter()
        .map(|snippet| (snippet.id().to_string(), snippet))
        .collect()
}

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

/// Where a placed snippet's blocks land within the target section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Start,
    #[default]
    End,
}

/// An ad-hoc snippet placement, processed after all template sections are
/// built. Placements let a page pull extra fragments into a composed
/// document without editing the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetPlacement {
    pub section_id: String,
    pub snippet_id: String,
    #[serde(default)]
    pub position: Position,
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// A partial patch for one section, keyed by mandatory id.
///
/// A matching base section is shallow-merged: `title` overwrites when
/// present; `blocks` wholly *replaces* the base blocks when present and
/// leaves them untouched when absent. An override whose id matches no
/// base section is appended as a new section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegalSectionOverride {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<LegalBlock>>,
}

/// A document-level patch. Top-level fields follow shallow-merge
/// semantics (present wins); `sections` is reconciled per-section and is
/// never a wholesale overwrite.
///
/// A `None` field always means "not overridden" — an override cannot
/// clear a base field back to absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegalDocOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<LegalSectionOverride>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
