use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::config::CompanyPolicy;
use crate::models::{Form, IntakeError, IntakeReceipt, Submission};
use crate::services::relay::Relay;
use crate::services::validate::{self, Fields};

/// Validate → relay pipeline shared by the JSON API and the page forms.
#[derive(Clone)]
pub struct IntakeService {
    relay: Arc<dyn Relay>,
    company_policy: CompanyPolicy,
}

impl IntakeService {
    pub fn new(relay: Arc<dyn Relay>, company_policy: CompanyPolicy) -> Self {
        Self {
            relay,
            company_policy,
        }
    }

    pub fn relay_name(&self) -> &'static str {
        self.relay.name()
    }

    /// Decodes a raw request body. `null` is malformed; any other JSON
    /// that is not an object is treated as an object with no fields.
    pub fn decode(body: &[u8]) -> Result<Fields, IntakeError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Ok(fields),
            Ok(Value::Null) => {
                warn!("Null submission body");
                Err(IntakeError::MalformedRequest)
            }
            Ok(_) => Ok(Map::new()),
            Err(e) => {
                warn!(error = %e, "Unparseable submission body");
                Err(IntakeError::MalformedRequest)
            }
        }
    }

    pub async fn submit_waitlist(&self, fields: &Fields) -> Result<IntakeReceipt, IntakeError> {
        let submission = validate::waitlist(fields).inspect_err(|e| rejected(Form::Waitlist, e))?;
        self.forward(Submission::Waitlist(submission)).await
    }

    pub async fn submit_beta(&self, fields: &Fields) -> Result<IntakeReceipt, IntakeError> {
        let submission = validate::beta(fields, self.company_policy)
            .inspect_err(|e| rejected(Form::Beta, e))?;
        self.forward(Submission::Beta(submission)).await
    }

    async fn forward(&self, submission: Submission) -> Result<IntakeReceipt, IntakeError> {
        let form = submission.form();
        match self.relay.relay(&submission).await {
            Ok(()) => {
                info!(?form, relay = self.relay.name(), "Submission accepted");
                Ok(IntakeReceipt::accepted(form))
            }
            Err(e) => {
                error!(?form, relay = self.relay.name(), error = %e, "Relay failed");
                Err(IntakeError::RelayFailed)
            }
        }
    }
}

fn rejected(form: Form, e: &IntakeError) {
    warn!(?form, reason = %e, "Submission rejected");
}
