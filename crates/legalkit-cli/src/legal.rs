//! # Legal Document Subcommand
//!
//! `legalkit legal` composes a legal document and prints it. Content
//! defaults to the vanilla baseline for `--slug`/`--locale`; any part can
//! be swapped for a file.

use anyhow::{bail, Result};
use clap::Args;

use legalkit_core::{LegalDocOverride, LegalTemplate, SnippetPlacement};
use legalkit_doc::{compose_legal_doc, ComposeOptions};
use legalkit_vanilla::{vanilla_legal_snippets, vanilla_legal_template};

use crate::{emit, load_document, parse_token_args, OutputFormat};

/// Arguments for the `legal` subcommand.
#[derive(Args, Debug)]
pub struct LegalArgs {
    /// Template slug to compose (e.g. terms, privacy, cookies).
    #[arg(long, default_value = "terms")]
    pub slug: String,

    /// Content locale; unknown locales fall back to English.
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// YAML/JSON template file replacing the vanilla template.
    #[arg(long)]
    pub template: Option<std::path::PathBuf>,

    /// YAML/JSON snippet-library file replacing the vanilla snippets.
    #[arg(long)]
    pub snippets: Option<std::path::PathBuf>,

    /// YAML/JSON document override file.
    #[arg(long = "override")]
    pub override_file: Option<std::path::PathBuf>,

    /// YAML/JSON placement file (a list of {section_id, snippet_id,
    /// position} entries) applied after template sections.
    #[arg(long)]
    pub include: Option<std::path::PathBuf>,

    /// Section or snippet id to omit. Repeatable.
    #[arg(long = "omit")]
    pub omit: Vec<String>,

    /// Token substitution as KEY=VALUE. Repeatable.
    #[arg(long = "token")]
    pub tokens: Vec<String>,

    /// Output serialization format.
    #[arg(long, value_enum, default_value = "json")]
    pub output: OutputFormat,
}

/// Execute the `legal` subcommand.
pub fn run_legal(args: &LegalArgs) -> Result<u8> {
    let template: LegalTemplate = match &args.template {
        Some(path) => load_document(path, "legal template")?,
        None => match vanilla_legal_template(&args.locale, &args.slug) {
            Some(template) => template,
            None => bail!("unknown template slug {:?}; see `legalkit locales`", args.slug),
        },
    };

    let snippets = match &args.snippets {
        Some(path) => load_document(path, "snippet library")?,
        None => vanilla_legal_snippets(&args.locale),
    };

    let include: Vec<SnippetPlacement> = match &args.include {
        Some(path) => load_document(path, "placement list")?,
        None => Vec::new(),
    };

    let doc_override: Option<LegalDocOverride> = match &args.override_file {
        Some(path) => Some(load_document(path, "document override")?),
        None => None,
    };

    let options = ComposeOptions {
        snippets,
        include,
        omit: args.omit.clone(),
        doc_override,
        tokens: parse_token_args(&args.tokens)?,
    };

    let doc = compose_legal_doc(&template, &options);
    tracing::debug!(slug = %doc.slug, sections = doc.sections.len(), "composed legal document");
    println!("{}", emit(&doc, args.output)?);
    Ok(0)
}
