//! Console configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command line flags are layered on top.
//!
//! | Variable             | Flag              | Default         |
//! |----------------------|-------------------|-----------------|
//! | `VEND_CREDIT_POLICY` | `--credit-policy` | `hundred-notes` |
//! | `VEND_JSON_CHANGE`   | `--json`          | `false`         |

use std::collections::HashMap;
use std::env;

use clap::Parser;
use serde::{Deserialize, Serialize};
use vend_core::CreditPolicy;

/// Command line flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "vend", version, about = "Interactive vending machine simulator")]
pub struct Cli {
    /// Which inserted money counts as credit: hundred-notes or total-inserted
    #[arg(long, value_name = "POLICY")]
    pub credit_policy: Option<CreditPolicy>,

    /// Print the change receipt as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendConfig {
    pub credit_policy: CreditPolicy,
    pub json_change: bool,
    pub verbose: bool,
}

impl VendConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let credit_policy = match vars.get("VEND_CREDIT_POLICY") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VEND_CREDIT_POLICY".to_string()))?,
            None => CreditPolicy::default(),
        };

        let json_change = match vars.get("VEND_JSON_CHANGE") {
            Some(raw) => parse_flag(raw)
                .ok_or_else(|| ConfigError::InvalidValue("VEND_JSON_CHANGE".to_string()))?,
            None => false,
        };

        Ok(VendConfig {
            credit_policy,
            json_change,
            verbose: false,
        })
    }

    /// Flags given on the command line win over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(policy) = cli.credit_policy {
            self.credit_policy = policy;
        }
        self.json_change |= cli.json;
        self.verbose |= cli.verbose;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = VendConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, VendConfig::default());
        assert_eq!(config.credit_policy, CreditPolicy::HundredNotes);
    }

    #[test]
    fn test_env_values() {
        let config = VendConfig::from_vars(&vars(&[
            ("VEND_CREDIT_POLICY", "total-inserted"),
            ("VEND_JSON_CHANGE", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.credit_policy, CreditPolicy::TotalInserted);
        assert!(config.json_change);
    }

    #[test]
    fn test_invalid_env_values() {
        let err = VendConfig::from_vars(&vars(&[("VEND_CREDIT_POLICY", "free")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for VEND_CREDIT_POLICY");

        assert!(VendConfig::from_vars(&vars(&[("VEND_JSON_CHANGE", "maybe")])).is_err());
    }

    #[test]
    fn test_cli_overrides_env() {
        let env_config =
            VendConfig::from_vars(&vars(&[("VEND_CREDIT_POLICY", "total-inserted")])).unwrap();
        let cli = Cli::parse_from(["vend", "--credit-policy", "hundred-notes", "--json", "-v"]);

        let config = env_config.with_cli(&cli);
        assert_eq!(config.credit_policy, CreditPolicy::HundredNotes);
        assert!(config.json_change);
        assert!(config.verbose);
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["vend", "--credit-policy", "free"]).is_err());
    }
}
