//! # legalkit-doc — Legal Document Composition
//!
//! Builds a displayable [`LegalDoc`](legalkit_core::LegalDoc) from a
//! template, a snippet library, ad-hoc placements, structural overrides,
//! and token substitution. Composition is a pure, synchronous function:
//! no I/O, no shared state, fresh output on every call.
//!
//! ## Pipeline
//!
//! ```text
//! template sections ──resolve snippets──▶ sections
//!                                            │ include placements
//!                                            ▼
//!                                     override merge
//!                                            │
//!                                  table-row injection
//!                                            │
//!                                    token substitution ──▶ LegalDoc
//! ```
//!
//! Missing snippet or section references never fail composition: they are
//! dropped, with a `tracing` warning in debug builds. A bad content
//! reference should degrade the page, not crash it.

pub mod compose;
pub mod merge;

pub use compose::{compose_legal_doc, ComposeOptions};
pub use merge::{merge_legal_doc, merge_sections};
