//! # legalkit-core — Foundational Types for Legal Content Composition
//!
//! This crate is the leaf of the legalkit workspace. It defines the data
//! model shared by the document composer, the consent composer, and the
//! vanilla content library: renderable blocks, sections, templates,
//! snippets, structural overrides, `{{TOKEN}}` substitution, and locale
//! normalization. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged sum types for content.** [`LegalBlock`] and [`LegalSnippet`]
//!    are enums, not stringly-typed records. Every `match` over a block
//!    kind is exhaustive; adding a block variant is a compile error until
//!    every consumer handles it.
//!
//! 2. **Composition never mutates its inputs.** All transforming functions
//!    take `&` references and allocate fresh output structures.
//!
//! 3. **Deterministic collections.** Snippet libraries and token maps are
//!    `BTreeMap`s so iteration order, serialization, and warnings are
//!    stable across runs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `legalkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, `PartialEq`, and implement
//!   `Serialize`/`Deserialize`.

pub mod locale;
pub mod tokens;
pub mod types;

// Re-export primary types for ergonomic imports.
pub use locale::{normalize_locale, DEFAULT_LOCALE};
pub use tokens::{apply_legal_tokens, replace_tokens, TokenMap};
pub use types::{
    snippet_library, LegalBlock, LegalDoc, LegalDocOverride, LegalSection, LegalSectionOverride,
    LegalSnippet, LegalTemplate, LegalTemplateSection, Position, SnippetLibrary, SnippetPlacement,
    TableRowSet,
};
