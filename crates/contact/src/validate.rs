use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::{FormVariant, Submission};

/// Accepts `local@domain.tld`: no whitespace, no second `@`, at least one dot
/// after the `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Field-level error map for one submission. Empty map means valid. Pure and
/// synchronous so the same check runs both before dispatch and again inside
/// the submission client.
///
/// Every failing field is reported at once, keyed by the input name the
/// presentation layer uses, so each control can be annotated individually.
pub fn validate(
    submission: &Submission,
    variant: FormVariant,
) -> BTreeMap<&'static str, &'static str> {
    let mut errors = BTreeMap::new();

    match variant {
        FormVariant::Detailed => {
            if submission.first_name.trim().is_empty() {
                errors.insert("first_name", "First name is required");
            }
            if submission.last_name.trim().is_empty() {
                errors.insert("last_name", "Last name is required");
            }
            if submission.message.trim().is_empty() {
                errors.insert("message", "Project details are required");
            }
            if submission
                .service_interest
                .as_deref()
                .is_none_or(|s| s.trim().is_empty())
            {
                errors.insert("service_interest", "Please select a service");
            }
        }
        FormVariant::Quick => {
            // The quick form has a single full-name input; both halves of the
            // split carry the same token when the name is present at all.
            if submission.first_name.trim().is_empty() {
                errors.insert("name", "Name is required");
            }
            if submission.message.trim().is_empty() {
                errors.insert("message", "Message is required");
            }
        }
    }

    if submission.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !email_is_valid(&submission.email) {
        errors.insert("email", "Please enter a valid email address");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detailed_submission() -> Submission {
        Submission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            message: "Need a 5kW rooftop system".into(),
            service_interest: Some("solar-energy".into()),
            ..Submission::default()
        }
    }

    #[test]
    fn complete_detailed_submission_is_valid() {
        assert!(validate(&detailed_submission(), FormVariant::Detailed).is_empty());
    }

    #[test]
    fn every_missing_field_is_reported_at_once() {
        let errors = validate(&Submission::default(), FormVariant::Detailed);
        assert_eq!(errors.get("first_name"), Some(&"First name is required"));
        assert_eq!(errors.get("last_name"), Some(&"Last name is required"));
        assert_eq!(errors.get("email"), Some(&"Email is required"));
        assert_eq!(errors.get("message"), Some(&"Project details are required"));
        assert_eq!(
            errors.get("service_interest"),
            Some(&"Please select a service")
        );
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let submission = Submission {
            first_name: "   ".into(),
            ..detailed_submission()
        };
        let errors = validate(&submission, FormVariant::Detailed);
        assert_eq!(errors.get("first_name"), Some(&"First name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["foo", "foo@bar", "@bar.com", "a b@c.co", "a@b c.co"] {
            let submission = Submission {
                email: bad.into(),
                ..detailed_submission()
            };
            let errors = validate(&submission, FormVariant::Detailed);
            assert_eq!(
                errors.get("email"),
                Some(&"Please enter a valid email address"),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn minimal_valid_email_is_accepted() {
        for good in ["a@b.co", "jane.doe+leads@example.org"] {
            assert!(email_is_valid(good), "expected {good:?} to be accepted");
        }
    }

    #[test]
    fn quick_variant_ignores_service_interest() {
        let submission = Submission {
            first_name: "Arjun".into(),
            last_name: "Arjun".into(),
            email: "arjun@example.com".into(),
            message: "Quick question".into(),
            ..Submission::default()
        };
        assert!(validate(&submission, FormVariant::Quick).is_empty());
    }

    #[test]
    fn quick_variant_reports_the_single_name_field() {
        let errors = validate(&Submission::default(), FormVariant::Quick);
        assert_eq!(errors.get("name"), Some(&"Name is required"));
        assert_eq!(errors.get("message"), Some(&"Message is required"));
        assert!(!errors.contains_key("service_interest"));
    }

    #[test]
    fn validation_is_idempotent() {
        let submission = Submission {
            email: "foo@bar".into(),
            ..Submission::default()
        };
        let first = validate(&submission, FormVariant::Detailed);
        let second = validate(&submission, FormVariant::Detailed);
        assert_eq!(first, second);
    }
}
