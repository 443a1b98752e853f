use serde::{Deserialize, Serialize};

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const TEXT_TOO_SHORT_MESSAGE: &str =
    "Please provide more details about your interest (minimum 20 characters)";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Minimum length of the beta `reason` field, in characters.
pub const MIN_REASON_CHARS: usize = 20;

/// Which intake form a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Waitlist,
    Beta,
}

impl Form {
    pub fn missing_fields_message(&self) -> &'static str {
        match self {
            Form::Waitlist => "Full name and email are required",
            Form::Beta => "All fields are required",
        }
    }

    pub fn confirmation_message(&self) -> &'static str {
        match self {
            Form::Waitlist => "Successfully added to waitlist",
            Form::Beta => "Beta application received",
        }
    }
}

/// An email address that has passed the `local@domain.tld` check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts `local@domain.tld` with no whitespace and a single `@`.
    #[cfg(feature = "ssr")]
    pub fn parse(raw: &str) -> Option<Self> {
        use regex::Regex;
        use std::sync::LazyLock;

        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
        });

        PATTERN.is_match(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Waitlist signup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitlistSubmission {
    pub full_name: String,
    pub email: EmailAddress,
    /// Empty when the visitor left it out.
    pub phone: String,
}

/// Beta-tester application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetaApplication {
    pub name: String,
    pub email: EmailAddress,
    /// Only populated when the company policy reads the field.
    pub company: Option<String>,
    pub reason: String,
}

/// A validated submission, ready to relay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Submission {
    Waitlist(WaitlistSubmission),
    Beta(BetaApplication),
}

impl Submission {
    pub fn form(&self) -> Form {
        match self {
            Submission::Waitlist(_) => Form::Waitlist,
            Submission::Beta(_) => Form::Beta,
        }
    }

    pub fn email(&self) -> &EmailAddress {
        match self {
            Submission::Waitlist(s) => &s.email,
            Submission::Beta(s) => &s.email,
        }
    }
}

/// Body returned when a submission is acknowledged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    pub success: bool,
    pub message: String,
}

impl IntakeReceipt {
    pub fn accepted(form: Form) -> Self {
        Self {
            success: true,
            message: form.confirmation_message().to_string(),
        }
    }
}

/// Ways a submission can be turned away.
///
/// `Display` is the message shown to the visitor, so server-side variants
/// all render the same generic text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{}", .0.missing_fields_message())]
    MissingFields(Form),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Please provide more details about your interest (minimum 20 characters)")]
    TextTooShort,
    #[error("Internal server error")]
    RelayFailed,
    #[error("Internal server error")]
    MalformedRequest,
}

impl IntakeError {
    /// True for errors the visitor can fix by resubmitting.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IntakeError::MissingFields(_) | IntakeError::InvalidEmail | IntakeError::TextTooShort
        )
    }
}
