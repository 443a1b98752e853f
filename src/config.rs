//! Process configuration, read once at start-up.
//!
//! Values come from the environment (after `.env` has been loaded by
//! `main`). Nothing below the handlers reads the environment directly; the
//! resulting [`Config`] is passed into the relay and intake service.

use std::{str::FromStr, time::Duration};

const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
const DEFAULT_WAITLIST_TABLE: &str = "Waitlist";
const DEFAULT_BETA_TABLE: &str = "tbl5Au2idW5uP6DH5";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when RELAY_MODE=airtable")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// How the beta form treats the `company` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanyPolicy {
    /// Never read nor forwarded.
    #[default]
    Ignored,
    /// Forwarded when present.
    Optional,
    /// Missing company rejects the application.
    Required,
}

impl FromStr for CompanyPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignored" | "ignore" | "off" => Ok(Self::Ignored),
            "optional" => Ok(Self::Optional),
            "required" => Ok(Self::Required),
            _ => Err(()),
        }
    }
}

/// Where validated submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayConfig {
    /// Log the submission and report success. For local development.
    Log,
    Airtable(AirtableConfig),
}

impl RelayConfig {
    pub fn name(&self) -> &'static str {
        match self {
            RelayConfig::Log => "log",
            RelayConfig::Airtable(_) => "airtable",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub api_url: String,
    pub waitlist_table: String,
    pub beta_table: String,
    pub timeout: Duration,
}

// Keeps the key out of logs.
impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_key", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("api_url", &self.api_url)
            .field("waitlist_table", &self.waitlist_table)
            .field("beta_table", &self.beta_table)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub relay: RelayConfig,
    pub company_policy: CompanyPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as
    /// unset.
    ///
    /// `RELAY_MODE` is `auto` (default), `airtable` or `log`. In `auto` mode
    /// the Airtable relay is used whenever `AIRTABLE_API_KEY` is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let company_policy = match get("BETA_COMPANY_FIELD") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "BETA_COMPANY_FIELD",
                value,
            })?,
            None => CompanyPolicy::default(),
        };

        let mode = get("RELAY_MODE").unwrap_or_else(|| "auto".into());
        let use_airtable = match mode.trim().to_lowercase().as_str() {
            "auto" => get("AIRTABLE_API_KEY").is_some(),
            "airtable" => true,
            "log" => false,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "RELAY_MODE",
                    value: mode,
                })
            }
        };

        let relay = if use_airtable {
            let timeout = match get("RELAY_TIMEOUT_SECS") {
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::Invalid {
                        key: "RELAY_TIMEOUT_SECS",
                        value,
                    })?,
                None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            };

            RelayConfig::Airtable(AirtableConfig {
                api_key: get("AIRTABLE_API_KEY").ok_or(ConfigError::Missing("AIRTABLE_API_KEY"))?,
                base_id: get("AIRTABLE_BASE_ID").ok_or(ConfigError::Missing("AIRTABLE_BASE_ID"))?,
                api_url: get("AIRTABLE_API_URL")
                    .unwrap_or_else(|| DEFAULT_API_URL.into())
                    .trim_end_matches('/')
                    .to_string(),
                waitlist_table: get("AIRTABLE_WAITLIST_TABLE")
                    .unwrap_or_else(|| DEFAULT_WAITLIST_TABLE.into()),
                beta_table: get("AIRTABLE_BETA_TABLE").unwrap_or_else(|| DEFAULT_BETA_TABLE.into()),
                timeout,
            })
        } else {
            RelayConfig::Log
        };

        Ok(Self {
            relay,
            company_policy,
        })
    }
}
