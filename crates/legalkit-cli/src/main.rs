//! # legalkit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use legalkit_cli::consent::{run_consent, ConsentArgs};
use legalkit_cli::legal::{run_legal, LegalArgs};
use legalkit_cli::locales::{run_locales, LocalesArgs};

/// Legal content toolchain.
///
/// Composes legal documents (terms, privacy, cookies) and cookie-consent
/// configurations from the vanilla bilingual baseline or caller-supplied
/// YAML/JSON content files.
#[derive(Parser, Debug)]
#[command(name = "legalkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a legal document.
    Legal(LegalArgs),

    /// Compose a consent configuration.
    Consent(ConsentArgs),

    /// List vanilla locales, template slugs, and consent categories.
    Locales(LocalesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Legal(args) => run_legal(&args),
        Commands::Consent(args) => run_consent(&args),
        Commands::Locales(args) => run_locales(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
