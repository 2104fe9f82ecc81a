//! # Consent Subcommand
//!
//! `legalkit consent` composes a consent configuration from the vanilla
//! baseline (or a replacement file) plus optional overrides.

use anyhow::Result;
use clap::Args;

use legalkit_consent::{compose_consent_config, ConsentConfig, ConsentOverrides};
use legalkit_vanilla::vanilla_consent_config;

use crate::{emit, load_document, parse_token_args, OutputFormat};

/// Arguments for the `consent` subcommand.
#[derive(Args, Debug)]
pub struct ConsentArgs {
    /// Content locale; unknown locales fall back to English.
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// YAML/JSON baseline file replacing the vanilla configuration.
    #[arg(long)]
    pub baseline: Option<std::path::PathBuf>,

    /// YAML/JSON consent-overrides file.
    #[arg(long)]
    pub overrides: Option<std::path::PathBuf>,

    /// Token substitution as KEY=VALUE. Repeatable.
    #[arg(long = "token")]
    pub tokens: Vec<String>,

    /// Output serialization format.
    #[arg(long, value_enum, default_value = "json")]
    pub output: OutputFormat,
}

/// Execute the `consent` subcommand.
pub fn run_consent(args: &ConsentArgs) -> Result<u8> {
    let baseline: ConsentConfig = match &args.baseline {
        Some(path) => load_document(path, "consent baseline")?,
        None => vanilla_consent_config(&args.locale),
    };

    let overrides: Option<ConsentOverrides> = match &args.overrides {
        Some(path) => Some(load_document(path, "consent overrides")?),
        None => None,
    };

    let tokens = parse_token_args(&args.tokens)?;
    let config = compose_consent_config(&baseline, overrides.as_ref(), Some(&tokens));
    tracing::debug!(categories = config.len(), "composed consent configuration");
    println!("{}", emit(&config, args.output)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_consent_compose_succeeds() {
        let args = ConsentArgs {
            locale: "fi".into(),
            baseline: None,
            overrides: None,
            tokens: vec!["PAYMENTS_PROVIDER=Stripe".into()],
            output: OutputFormat::Yaml,
        };
        assert_eq!(run_consent(&args).unwrap(), 0);
    }

    #[test]
    fn overrides_file_parses_as_yaml() {
        let yaml = r#"
omit_categories: [social]
append_entries:
  analytics:
    - id: matomo
      label: Matomo
      default_state: "off"
"#;
        let overrides: ConsentOverrides = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(overrides.omit_categories, ["social"]);
        assert_eq!(overrides.append_entries["analytics"].len(), 1);
    }
}
