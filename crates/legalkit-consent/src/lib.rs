//! # legalkit-consent — Consent Configuration & Evaluation
//!
//! Models the consent categories and entries behind a cookie banner and
//! third-party script gating, composes caller variants from a baseline
//! configuration, and evaluates effective consent for
//! `(category, entry)` addresses against stored preferences.
//!
//! This crate computes configurations and decisions only. Persisting
//! preferences (browser storage, a database) and broadcasting "consent
//! changed" events belong to the caller; [`ConsentSnapshot`] defines the
//! payload shape such a store typically keeps.
//!
//! ## Consent semantics
//!
//! - A `required` category or entry is never user-revocable: its
//!   effective consent is `true` even against an explicitly stored
//!   `false`.
//! - Querying a category without naming an entry is a conjunction: every
//!   entry in the category must be individually allowed. Script gates
//!   rely on this to decide whether an entire provider may load.

pub mod config;
pub mod evaluate;
pub mod snapshot;

pub use config::{
    apply_consent_tokens, category_ids, compose_consent_config, entry_ids, CategoryUpdate,
    ConsentCategory, ConsentConfig, ConsentEntry, ConsentOverrides, DefaultState,
};
pub use evaluate::{
    accept_all, default_preferences, entry_key, has_consent, reject_all, ConsentPreferences,
};
pub use snapshot::{ConsentSnapshot, ConsentSnapshotError, SNAPSHOT_VERSION};
