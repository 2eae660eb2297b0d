use std::collections::BTreeMap;

/// Which form produced the submission. The two variants share one shape but
/// enforce different required-field subsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Full contact/quote form: name pair, phone, service and budget selects.
    Detailed,
    /// Home-page quick form: single full-name field, email, message.
    Quick,
}

/// One lead captured from a form. Built once per submit intent, sent once,
/// then discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub message: String,
    pub newsletter_opt_in: bool,
}

impl Submission {
    /// Build a submission from the raw field map the presentation layer
    /// collected. Empty optional fields become `None` so the store receives
    /// NULL rather than an empty string.
    pub fn from_fields(fields: &BTreeMap<String, String>, variant: FormVariant) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        let opt = |name: &str| fields.get(name).filter(|v| !v.is_empty()).cloned();

        match variant {
            FormVariant::Detailed => Self {
                first_name: get("first_name"),
                last_name: get("last_name"),
                email: get("email"),
                phone: opt("phone"),
                service_interest: opt("service_interest"),
                budget_range: opt("budget_range"),
                message: get("message"),
                newsletter_opt_in: fields.get("newsletter_signup").is_some_and(|v| v == "on"),
            },
            FormVariant::Quick => {
                let (first_name, last_name) = split_full_name(&get("name"));
                Self {
                    first_name,
                    last_name,
                    email: get("email"),
                    message: get("message"),
                    ..Self::default()
                }
            }
        }
    }
}

/// Split a single full-name field into a first/last pair: the first
/// whitespace-delimited token is the first name, the remainder the last name.
/// A single-token name is used for both halves.
pub fn split_full_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() { first.clone() } else { rest };
    (first, last)
}

/// Outcome of one submission attempt, handed to the presentation layer as-is.
/// Exactly one of `message` / `error` is set; neither ever carries a raw
/// internal error.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// User-facing text for display, success or not.
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_name_fills_both_halves() {
        assert_eq!(split_full_name("Arjun"), ("Arjun".into(), "Arjun".into()));
    }

    #[test]
    fn multi_token_name_keeps_remainder_as_last_name() {
        assert_eq!(
            split_full_name("Jane van der Doe"),
            ("Jane".into(), "van der Doe".into())
        );
        assert_eq!(
            split_full_name("  Jane   Doe "),
            ("Jane".into(), "Doe".into())
        );
    }

    #[test]
    fn quick_fields_map_to_split_name() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Arjun".to_string());
        fields.insert("email".to_string(), "arjun@example.com".to_string());
        fields.insert("message".to_string(), "Need a site survey".to_string());

        let submission = Submission::from_fields(&fields, FormVariant::Quick);
        assert_eq!(submission.first_name, "Arjun");
        assert_eq!(submission.last_name, "Arjun");
        assert_eq!(submission.service_interest, None);
        assert!(!submission.newsletter_opt_in);
    }

    #[test]
    fn detailed_fields_drop_empty_optionals() {
        let mut fields = BTreeMap::new();
        fields.insert("first_name".to_string(), "Jane".to_string());
        fields.insert("last_name".to_string(), "Doe".to_string());
        fields.insert("email".to_string(), "jane@example.com".to_string());
        fields.insert("phone".to_string(), String::new());
        fields.insert("service_interest".to_string(), "solar-energy".to_string());
        fields.insert("budget_range".to_string(), String::new());
        fields.insert("message".to_string(), "5kW rooftop".to_string());
        fields.insert("newsletter_signup".to_string(), "on".to_string());

        let submission = Submission::from_fields(&fields, FormVariant::Detailed);
        assert_eq!(submission.phone, None);
        assert_eq!(submission.budget_range, None);
        assert_eq!(submission.service_interest.as_deref(), Some("solar-energy"));
        assert!(submission.newsletter_opt_in);
    }
}
