//! # legalkit-cli — CLI Tool for Legal Content Composition
//!
//! Provides the `legalkit` command-line interface for composing legal
//! documents and consent configurations outside the application runtime:
//! previewing content changes, generating fixtures, and diffing the
//! effect of overrides in CI.
//!
//! ## Subcommands
//!
//! - `legalkit legal` — compose a legal document from the vanilla
//!   baseline or caller-supplied template/snippet files.
//! - `legalkit consent` — compose a consent configuration.
//! - `legalkit locales` — list vanilla locales, template slugs, and
//!   consent categories.
//!
//! ```bash
//! legalkit legal --slug terms --locale en --token SERVICE_NAME=Acme
//! legalkit consent --locale fi --overrides overrides.yaml --output yaml
//! legalkit locales
//! ```

pub mod consent;
pub mod legal;
pub mod locales;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;

use legalkit_core::TokenMap;

/// Serialization format for composed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render a composed value in the requested format.
pub fn emit<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("serializing output as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("serializing output as YAML"),
    }
}

/// Load a YAML (or JSON; YAML is a superset) document from disk.
pub fn load_document<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {what}: {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("parsing {what}: {}", path.display()))
}

/// Parse repeated `--token KEY=VALUE` arguments into a token map.
///
/// Later occurrences of the same key win, matching map-insert order.
pub fn parse_token_args(args: &[String]) -> Result<TokenMap> {
    let mut tokens = TokenMap::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("invalid --token {arg:?}: expected KEY=VALUE");
        };
        if key.is_empty() {
            bail!("invalid --token {arg:?}: empty key");
        }
        tokens.insert(key.to_string(), value.to_string());
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_token_args_splits_on_first_equals() {
        let tokens = parse_token_args(&[
            "SERVICE_NAME=Acme".to_string(),
            "CONTACT_URL=/contact?ref=a=b".to_string(),
        ])
        .unwrap();
        assert_eq!(tokens["SERVICE_NAME"], "Acme");
        assert_eq!(tokens["CONTACT_URL"], "/contact?ref=a=b");
    }

    #[test]
    fn parse_token_args_rejects_malformed() {
        assert!(parse_token_args(&["NO_SEPARATOR".to_string()]).is_err());
        assert!(parse_token_args(&["=value".to_string()]).is_err());
    }

    #[test]
    fn parse_token_args_last_value_wins() {
        let tokens =
            parse_token_args(&["A=first".to_string(), "A=second".to_string()]).unwrap();
        assert_eq!(tokens["A"], "second");
    }

    #[test]
    fn emit_supports_both_formats() {
        let value = serde_json::json!({"slug": "terms"});
        assert!(emit(&value, OutputFormat::Json).unwrap().contains("\"slug\""));
        assert!(emit(&value, OutputFormat::Yaml).unwrap().contains("slug: terms"));
    }
}
