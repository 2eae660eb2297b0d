use tracing::{error, warn};

use crate::{
    InquiryRecord, LeadStore, StoreError, Submission, SubmissionRecord, SubmissionResult,
    email_is_valid, split_full_name,
};

pub const MSG_CONFIRMATION_DETAILED: &str =
    "Thank you for your inquiry! We will get back to you within 24 hours.";
pub const MSG_CONFIRMATION_QUICK: &str = "Message sent successfully! We will contact you soon.";
pub const MSG_REQUIRED_DETAILED: &str = "Please fill in all required fields.";
pub const MSG_REQUIRED_QUICK: &str = "Please fill in all fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_SUBMIT_FAILED: &str = "Failed to submit form. Please try again later.";
/// Copy for failures outside the submission pipeline (rendering, the outer
/// web layer). The pipeline itself maps every store failure to
/// [`MSG_SUBMIT_FAILED`].
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";

/// Submission client: normalizes every outcome into a [`SubmissionResult`].
/// No error ever crosses this boundary as `Err`. Store failures are logged
/// and mapped to fixed user-facing copy.
#[derive(Clone)]
pub struct Command<S> {
    store: S,
}

impl<S: LeadStore> Command<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Detailed path: full field set, and a best-effort `service_inquiries`
    /// row when a service was chosen.
    pub async fn submit_contact_form(&self, submission: Submission) -> SubmissionResult {
        if submission.first_name.trim().is_empty()
            || submission.last_name.trim().is_empty()
            || submission.email.trim().is_empty()
            || submission.message.trim().is_empty()
        {
            return SubmissionResult::rejected(MSG_REQUIRED_DETAILED);
        }
        if !email_is_valid(&submission.email) {
            return SubmissionResult::rejected(MSG_INVALID_EMAIL);
        }

        match self.persist(&submission).await {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, email = %submission.email, "lead store rejected contact submission");
                SubmissionResult::rejected(MSG_SUBMIT_FAILED)
            }
        }
    }

    /// Quick path from raw form fields: one full-name field split into
    /// first/last, no inquiry row.
    pub async fn submit_quick_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> SubmissionResult {
        if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
            return SubmissionResult::rejected(MSG_REQUIRED_QUICK);
        }

        let (first_name, last_name) = split_full_name(name);
        self.submit_quick(Submission {
            first_name,
            last_name,
            email: email.to_string(),
            message: message.to_string(),
            ..Submission::default()
        })
        .await
    }

    /// Quick path for an already-normalized submission (the form controller
    /// splits the name when it collects the fields).
    pub async fn submit_quick(&self, submission: Submission) -> SubmissionResult {
        if submission.first_name.trim().is_empty()
            || submission.email.trim().is_empty()
            || submission.message.trim().is_empty()
        {
            return SubmissionResult::rejected(MSG_REQUIRED_QUICK);
        }
        if !email_is_valid(&submission.email) {
            return SubmissionResult::rejected(MSG_INVALID_EMAIL);
        }

        match self.persist_quick(&submission).await {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, email = %submission.email, "lead store rejected quick submission");
                SubmissionResult::rejected(MSG_SUBMIT_FAILED)
            }
        }
    }

    async fn persist(&self, submission: &Submission) -> Result<SubmissionResult, StoreError> {
        let record = SubmissionRecord::from(submission);
        self.store.insert_submission(&record).await?;

        // The primary row is the source of truth. The inquiry row is fire and
        // forget: its failure is logged and never reaches the caller.
        if let Some(service) = submission
            .service_interest
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            let inquiry = InquiryRecord::derive(submission, service);
            if let Err(err) = self.store.insert_inquiry(&inquiry).await {
                warn!(error = %err, service = %service, "service inquiry insert failed after successful submission");
            }
        }

        Ok(SubmissionResult::accepted(MSG_CONFIRMATION_DETAILED))
    }

    async fn persist_quick(&self, submission: &Submission) -> Result<SubmissionResult, StoreError> {
        let record = SubmissionRecord::from(submission);
        self.store.insert_submission(&record).await?;
        Ok(SubmissionResult::accepted(MSG_CONFIRMATION_QUICK))
    }
}
