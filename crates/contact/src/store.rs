use sqlx::SqlitePool;
use thiserror::Error;

use crate::{
    INQUIRY_SOURCE_WEBSITE, STATUS_NEW, Submission, URGENCY_NORMAL,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row written to `contact_submissions` — the primary lead record and the
/// source of truth for a captured lead.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub message: String,
    pub newsletter_signup: bool,
    pub status: &'static str,
}

impl From<&Submission> for SubmissionRecord {
    fn from(submission: &Submission) -> Self {
        Self {
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            service_interest: submission.service_interest.clone(),
            budget_range: submission.budget_range.clone(),
            message: submission.message.clone(),
            newsletter_signup: submission.newsletter_opt_in,
            status: STATUS_NEW,
        }
    }
}

/// Row written to `service_inquiries` when a successful submission named a
/// service. Best effort only; once written the pipeline holds no reference
/// to it.
#[derive(Clone, Debug, PartialEq)]
pub struct InquiryRecord {
    pub service_type: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub inquiry_source: &'static str,
    pub message: String,
    pub urgency_level: &'static str,
    pub status: &'static str,
}

impl InquiryRecord {
    pub fn derive(submission: &Submission, service: &str) -> Self {
        Self {
            service_type: service.to_string(),
            client_email: submission.email.clone(),
            client_phone: submission.phone.clone(),
            inquiry_source: INQUIRY_SOURCE_WEBSITE,
            message: submission.message.clone(),
            urgency_level: URGENCY_NORMAL,
            status: STATUS_NEW,
        }
    }
}

/// Seam to the hosted lead store. Each insert is an independent,
/// uncoordinated write; no transaction ever spans the two collections.
pub trait LeadStore {
    fn insert_submission(
        &self,
        record: &SubmissionRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn insert_inquiry(
        &self,
        record: &InquiryRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Lead store backed by the site's SQLite database.
#[derive(Clone)]
pub struct SqliteLeadStore {
    pool: SqlitePool,
}

impl SqliteLeadStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LeadStore for SqliteLeadStore {
    async fn insert_submission(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO contact_submissions
             (first_name, last_name, email, phone, service_interest, budget_range, message, newsletter_signup, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.service_interest)
        .bind(&record.budget_range)
        .bind(&record.message)
        .bind(record.newsletter_signup)
        .bind(record.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_inquiry(&self, record: &InquiryRecord) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO service_inquiries
             (service_type, client_email, client_phone, inquiry_source, message, urgency_level, status)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.service_type)
        .bind(&record.client_email)
        .bind(&record.client_phone)
        .bind(record.inquiry_source)
        .bind(&record.message)
        .bind(record.urgency_level)
        .bind(record.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
