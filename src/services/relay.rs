use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::config::{AirtableConfig, RelayConfig};
use crate::models::{BetaApplication, Submission, WaitlistSubmission};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("record store responded {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("request to record store failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Forwards a validated submission to wherever leads are kept.
///
/// One call is one attempt; implementations do not retry.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn relay(&self, submission: &Submission) -> Result<(), RelayError>;

    fn name(&self) -> &'static str;
}

/// Builds the relay selected by configuration.
pub fn from_config(config: &RelayConfig) -> Result<Arc<dyn Relay>, RelayError> {
    Ok(match config {
        RelayConfig::Log => Arc::new(LogRelay),
        RelayConfig::Airtable(airtable) => Arc::new(AirtableRelay::new(airtable.clone())?),
    })
}

/// The `{"fields": {...}}` envelope Airtable expects, stamped with `now`.
pub fn record_envelope(submission: &Submission, now: DateTime<Utc>) -> Value {
    match submission {
        Submission::Waitlist(WaitlistSubmission {
            full_name,
            email,
            phone,
        }) => json!({
            "fields": {
                "Name": full_name,
                "Email": email,
                "Phone": phone,
                "Submitted At": now.to_rfc3339_opts(SecondsFormat::Millis, true),
            }
        }),
        Submission::Beta(BetaApplication {
            name,
            email,
            company,
            reason,
        }) => {
            let mut envelope = json!({
                "fields": {
                    "Name": name,
                    "Email": email,
                    "Why Interested": reason,
                    "Submitted At": now.format("%Y-%m-%d").to_string(),
                }
            });
            if let Some(company) = company {
                envelope["fields"]["Company"] = json!(company);
            }
            envelope
        }
    }
}

/// Posts records to the Airtable REST API.
pub struct AirtableRelay {
    client: Client,
    config: AirtableConfig,
}

impl AirtableRelay {
    pub fn new(config: AirtableConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Client(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn table_url(&self, submission: &Submission) -> String {
        let table = match submission {
            Submission::Waitlist(_) => &self.config.waitlist_table,
            Submission::Beta(_) => &self.config.beta_table,
        };
        format!("{}/{}/{}", self.config.api_url, self.config.base_id, table)
    }
}

#[async_trait]
impl Relay for AirtableRelay {
    async fn relay(&self, submission: &Submission) -> Result<(), RelayError> {
        let url = self.table_url(submission);
        let body = record_envelope(submission, Utc::now());

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            info!(form = ?submission.form(), %status, "Record stored");
            Ok(())
        } else {
            let body = res.text().await.unwrap_or_default();
            error!(form = ?submission.form(), %status, %body, "Record store rejected submission");
            Err(RelayError::Status { status, body })
        }
    }

    fn name(&self) -> &'static str {
        "airtable"
    }
}

/// Accepts everything and logs it. Used when no credential is configured.
pub struct LogRelay;

#[async_trait]
impl Relay for LogRelay {
    async fn relay(&self, submission: &Submission) -> Result<(), RelayError> {
        let envelope = record_envelope(submission, Utc::now());
        info!(form = ?submission.form(), record = %envelope, "Submission would be relayed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
