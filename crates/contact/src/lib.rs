//! Lead-capture pipeline for the Voltedge marketing site.
//!
//! Three layers, leaf to root: [`validate`] (pure field checks), the
//! submission client [`Command`] (one insert into `contact_submissions`,
//! plus a best-effort `service_inquiries` row), and [`FormController`]
//! (the per-form lifecycle state machine the web layer drives).

mod controller;
mod store;
mod submission;
mod submit;
mod types;
mod validate;

pub use controller::{AttemptTicket, FormController, FormState, Settled, SubmitIntent};
pub use store::{InquiryRecord, LeadStore, SqliteLeadStore, StoreError, SubmissionRecord};
pub use submission::{FormVariant, Submission, SubmissionResult, split_full_name};
pub use submit::{
    Command, MSG_CONFIRMATION_DETAILED, MSG_CONFIRMATION_QUICK, MSG_INVALID_EMAIL,
    MSG_REQUIRED_DETAILED, MSG_REQUIRED_QUICK, MSG_SUBMIT_FAILED, MSG_UNEXPECTED,
};
pub use types::{
    BudgetRange, INQUIRY_SOURCE_WEBSITE, STATUS_NEW, ServiceCategory, URGENCY_NORMAL,
};
pub use validate::{email_is_valid, validate};
