use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::{
    models::{IntakeError, IntakeReceipt},
    services::validate::Fields,
};

/// Waitlist form submission. Returns the confirmation message.
#[server]
pub async fn join_waitlist(
    full_name: String,
    email: String,
    phone: Option<String>,
) -> Result<String, ServerFnError> {
    use axum::Extension;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let fields = waitlist_fields(full_name, email, phone);
    outcome(state.intake.submit_waitlist(&fields).await)
}

/// Beta application form submission. Returns the confirmation message.
#[server]
pub async fn apply_for_beta(
    name: String,
    email: String,
    company: Option<String>,
    reason: String,
) -> Result<String, ServerFnError> {
    use axum::Extension;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let fields = beta_fields(name, email, company, reason);
    outcome(state.intake.submit_beta(&fields).await)
}

// Form inputs use the same keys as the JSON API, so both paths share one
// validator.
#[cfg(feature = "ssr")]
fn waitlist_fields(full_name: String, email: String, phone: Option<String>) -> Fields {
    let mut fields = Fields::new();
    fields.insert("fullName".into(), full_name.into());
    fields.insert("email".into(), email.into());
    fields.insert("phone".into(), phone.unwrap_or_default().into());
    fields
}

#[cfg(feature = "ssr")]
fn beta_fields(name: String, email: String, company: Option<String>, reason: String) -> Fields {
    let mut fields = Fields::new();
    fields.insert("name".into(), name.into());
    fields.insert("email".into(), email.into());
    fields.insert("company".into(), company.unwrap_or_default().into());
    fields.insert("reason".into(), reason.into());
    fields
}

/// Rejections surface their public message; the form shows it verbatim.
#[cfg(feature = "ssr")]
fn outcome(result: Result<IntakeReceipt, IntakeError>) -> Result<String, ServerFnError> {
    result
        .map(|receipt| receipt.message)
        .map_err(|e| ServerFnError::new(e.to_string()))
}
