use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::config::CompanyPolicy;
use crate::models::{
    BetaApplication, EmailAddress, Form, IntakeError, WaitlistSubmission, MIN_REASON_CHARS,
};

pub type Fields = Map<String, Value>;

/// Returns the field when it is a truthy scalar: a non-empty string, a
/// non-zero number or `true`. Numbers and `true` come back as their JSON
/// text, so `"phone": 5550100` is kept as `"5550100"`.
///
/// `null`, `false`, `0` and `""` count as absent. So do arrays and objects,
/// which can never be a usable name, email or reason.
fn text<'a>(fields: &'a Fields, key: &str) -> Option<Cow<'a, str>> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(n.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        _ => None,
    }
}

fn email(raw: &str) -> Result<EmailAddress, IntakeError> {
    EmailAddress::parse(raw).ok_or(IntakeError::InvalidEmail)
}

/// Validates a waitlist body: `fullName`, `email`, optional `phone`.
pub fn waitlist(fields: &Fields) -> Result<WaitlistSubmission, IntakeError> {
    let (Some(full_name), Some(raw_email)) = (text(fields, "fullName"), text(fields, "email"))
    else {
        return Err(IntakeError::MissingFields(Form::Waitlist));
    };

    Ok(WaitlistSubmission {
        full_name: full_name.into_owned(),
        email: email(&raw_email)?,
        phone: text(fields, "phone").map(Cow::into_owned).unwrap_or_default(),
    })
}

/// Validates a beta body: `name`, `email`, `reason` and, depending on the
/// policy, `company`.
pub fn beta(fields: &Fields, policy: CompanyPolicy) -> Result<BetaApplication, IntakeError> {
    let (Some(name), Some(raw_email), Some(reason)) = (
        text(fields, "name"),
        text(fields, "email"),
        text(fields, "reason"),
    ) else {
        return Err(IntakeError::MissingFields(Form::Beta));
    };

    let company = match policy {
        CompanyPolicy::Ignored => None,
        CompanyPolicy::Optional => text(fields, "company").map(Cow::into_owned),
        CompanyPolicy::Required => Some(
            text(fields, "company")
                .ok_or(IntakeError::MissingFields(Form::Beta))?
                .into_owned(),
        ),
    };

    let email = email(&raw_email)?;

    // Unicode scalar values, so one emoji is one character
    if reason.chars().count() < MIN_REASON_CHARS {
        return Err(IntakeError::TextTooShort);
    }

    Ok(BetaApplication {
        name: name.into_owned(),
        email,
        company,
        reason: reason.into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    const REASON: &str = "We verify user-submitted video every day";

    #[test]
    fn waitlist_defaults_phone_to_empty() {
        let sub = waitlist(&fields(json!({
            "fullName": "John Doe",
            "email": "john@example.com"
        })))
        .unwrap();

        assert_eq!(sub.full_name, "John Doe");
        assert_eq!(sub.email.as_str(), "john@example.com");
        assert_eq!(sub.phone, "");
    }

    #[test]
    fn waitlist_keeps_phone() {
        let sub = waitlist(&fields(json!({
            "fullName": "John Doe",
            "email": "john@example.com",
            "phone": "+1 555 0100"
        })))
        .unwrap();
        assert_eq!(sub.phone, "+1 555 0100");
    }

    #[test]
    fn waitlist_falsy_values_are_missing() {
        for body in [
            json!({}),
            json!({"email": "john@example.com"}),
            json!({"fullName": "John Doe"}),
            json!({"fullName": "", "email": "john@example.com"}),
            json!({"fullName": null, "email": "john@example.com"}),
            json!({"fullName": false, "email": "john@example.com"}),
            json!({"fullName": 0, "email": "john@example.com"}),
            json!({"fullName": "John Doe", "email": ""}),
        ] {
            assert_eq!(
                waitlist(&fields(body.clone())),
                Err(IntakeError::MissingFields(Form::Waitlist)),
                "{body}"
            );
        }
    }

    #[test]
    fn truthy_scalars_are_present_as_text() {
        let sub = waitlist(&fields(json!({
            "fullName": 123,
            "email": "john@example.com",
            "phone": 5550100
        })))
        .unwrap();
        assert_eq!(sub.full_name, "123");
        assert_eq!(sub.phone, "5550100");

        let sub = waitlist(&fields(json!({"fullName": true, "email": "john@example.com"}))).unwrap();
        assert_eq!(sub.full_name, "true");
    }

    #[test]
    fn containers_count_as_missing() {
        for name in [json!([]), json!(["John"]), json!({}), json!({"first": "John"})] {
            assert_eq!(
                waitlist(&fields(json!({"fullName": name, "email": "john@example.com"}))),
                Err(IntakeError::MissingFields(Form::Waitlist)),
                "{name}"
            );
        }
    }

    #[test]
    fn numeric_email_is_invalid_not_missing() {
        assert_eq!(
            waitlist(&fields(json!({"fullName": "John", "email": 42}))),
            Err(IntakeError::InvalidEmail)
        );
    }

    #[test]
    fn missing_fields_checked_before_email() {
        assert_eq!(
            waitlist(&fields(json!({"email": "not-an-email"}))),
            Err(IntakeError::MissingFields(Form::Waitlist))
        );
    }

    #[test]
    fn waitlist_rejects_bad_email() {
        for bad in ["john", "john@example", "john doe@example.com", "john@@example.com"] {
            assert_eq!(
                waitlist(&fields(json!({"fullName": "John", "email": bad}))),
                Err(IntakeError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn beta_short_reason() {
        assert_eq!(
            beta(
                &fields(json!({"name": "A", "email": "a@b.com", "reason": "too short"})),
                CompanyPolicy::Ignored
            ),
            Err(IntakeError::TextTooShort)
        );
    }

    #[test]
    fn beta_reason_boundary() {
        let exactly_twenty = "x".repeat(MIN_REASON_CHARS);
        let nineteen = "x".repeat(MIN_REASON_CHARS - 1);

        assert!(beta(
            &fields(json!({"name": "A", "email": "a@b.com", "reason": exactly_twenty})),
            CompanyPolicy::Ignored
        )
        .is_ok());
        assert_eq!(
            beta(
                &fields(json!({"name": "A", "email": "a@b.com", "reason": nineteen})),
                CompanyPolicy::Ignored
            ),
            Err(IntakeError::TextTooShort)
        );
    }

    #[test]
    fn beta_reason_counts_characters_not_bytes() {
        // 19 characters, well over 20 bytes
        let reason = "é".repeat(MIN_REASON_CHARS - 1);
        assert_eq!(
            beta(
                &fields(json!({"name": "A", "email": "a@b.com", "reason": reason})),
                CompanyPolicy::Ignored
            ),
            Err(IntakeError::TextTooShort)
        );
    }

    #[test]
    fn beta_reason_counts_emoji_once() {
        // 40 UTF-16 code units, 20 characters
        let twenty = "🙂".repeat(MIN_REASON_CHARS);
        assert!(beta(
            &fields(json!({"name": "A", "email": "a@b.com", "reason": twenty})),
            CompanyPolicy::Ignored
        )
        .is_ok());

        // 20 UTF-16 code units, 10 characters
        let ten = "🙂".repeat(MIN_REASON_CHARS / 2);
        assert_eq!(
            beta(
                &fields(json!({"name": "A", "email": "a@b.com", "reason": ten})),
                CompanyPolicy::Ignored
            ),
            Err(IntakeError::TextTooShort)
        );
    }

    #[test]
    fn beta_email_checked_before_length() {
        assert_eq!(
            beta(
                &fields(json!({"name": "A", "email": "nope", "reason": "short"})),
                CompanyPolicy::Ignored
            ),
            Err(IntakeError::InvalidEmail)
        );
    }

    #[test]
    fn beta_missing_fields() {
        assert_eq!(
            beta(
                &fields(json!({"name": "A", "email": "a@b.com"})),
                CompanyPolicy::Ignored
            ),
            Err(IntakeError::MissingFields(Form::Beta))
        );
    }

    #[test]
    fn company_policy() {
        let without = fields(json!({"name": "A", "email": "a@b.com", "reason": REASON}));
        let with = fields(json!({
            "name": "A",
            "email": "a@b.com",
            "reason": REASON,
            "company": "Acme Corp"
        }));

        assert_eq!(beta(&with, CompanyPolicy::Ignored).unwrap().company, None);
        assert_eq!(beta(&without, CompanyPolicy::Optional).unwrap().company, None);
        assert_eq!(
            beta(&with, CompanyPolicy::Optional).unwrap().company.as_deref(),
            Some("Acme Corp")
        );
        assert_eq!(
            beta(&without, CompanyPolicy::Required),
            Err(IntakeError::MissingFields(Form::Beta))
        );
        assert_eq!(
            beta(&with, CompanyPolicy::Required).unwrap().company.as_deref(),
            Some("Acme Corp")
        );
    }
}
