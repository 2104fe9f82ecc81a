//! # Locales Subcommand
//!
//! `legalkit locales` lists what the vanilla baseline ships: locales,
//! template slugs, and consent category ids per locale.

use anyhow::Result;
use clap::Args;

use legalkit_vanilla::{vanilla_consent_config, vanilla_legal_locales, vanilla_legal_slugs};

/// Arguments for the `locales` subcommand.
#[derive(Args, Debug)]
pub struct LocalesArgs {}

/// Execute the `locales` subcommand.
pub fn run_locales(_args: &LocalesArgs) -> Result<u8> {
    println!("locales:   {}", vanilla_legal_locales().join(", "));
    println!("templates: {}", vanilla_legal_slugs().join(", "));
    for locale in vanilla_legal_locales() {
        let categories: Vec<String> = vanilla_consent_config(locale)
            .into_iter()
            .map(|category| category.id)
            .collect();
        println!("consent [{locale}]: {}", categories.join(", "));
    }
    Ok(0)
}
