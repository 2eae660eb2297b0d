use std::collections::BTreeMap;

use crate::{FormVariant, Submission, SubmissionResult, validate};

/// Lifecycle of one form instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Pending,
    Settled(Settled),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Success,
    Failure,
}

/// Ticket identifying one dispatched attempt. A settle call with a stale
/// ticket (the form was reset or resubmitted in the meantime) is dropped
/// instead of clobbering newer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptTicket(u64);

/// What the presentation layer should do with a submit intent.
#[derive(Debug, PartialEq)]
pub enum SubmitIntent {
    /// A submission is already in flight; this attempt is a no-op.
    InFlight,
    /// Validation failed; the controller settled with per-field errors and
    /// the submission client must not be invoked.
    Invalid,
    /// Valid: invoke the submission client with this payload, then call
    /// [`FormController::settle`] with the ticket.
    Dispatch {
        submission: Submission,
        ticket: AttemptTicket,
    },
}

/// State container for one interactive form: raw field values, lifecycle
/// state, per-field validation errors and the settled result. Owns nothing
/// shared; two forms on the same page are two independent controllers.
#[derive(Clone, Debug)]
pub struct FormController {
    variant: FormVariant,
    fields: BTreeMap<String, String>,
    state: FormState,
    field_errors: BTreeMap<&'static str, &'static str>,
    result: Option<SubmissionResult>,
    attempt: u64,
}

impl FormController {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: BTreeMap::new(),
            state: FormState::Idle,
            field_errors: BTreeMap::new(),
            result: None,
            attempt: 0,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn field_errors(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.field_errors
    }

    /// The settled result, if any. Stays visible through subsequent edits
    /// until the next submit intent or an explicit reset.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Record a user edit. Editing returns the form to Idle; the previous
    /// result keeps displaying until the next submit.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if self.state == FormState::Pending {
            // The submit control is disabled while pending; a racing edit
            // must not reopen the form under an in-flight attempt.
            return;
        }
        self.fields.insert(name.into(), value.into());
        self.state = FormState::Idle;
    }

    /// Handle a user submit. At most one attempt is in flight per controller;
    /// re-entrant submits while Pending are ignored.
    pub fn submit_intent(&mut self) -> SubmitIntent {
        if self.state == FormState::Pending {
            return SubmitIntent::InFlight;
        }

        self.state = FormState::Validating;
        self.result = None;
        self.field_errors.clear();

        let submission = Submission::from_fields(&self.fields, self.variant);
        let errors = validate(&submission, self.variant);
        if !errors.is_empty() {
            self.field_errors = errors;
            self.state = FormState::Settled(Settled::Failure);
            return SubmitIntent::Invalid;
        }

        self.attempt += 1;
        self.state = FormState::Pending;
        SubmitIntent::Dispatch {
            submission,
            ticket: AttemptTicket(self.attempt),
        }
    }

    /// Apply the submission client's result. Only the attempt that is still
    /// pending may settle; stale tickets are dropped. Success clears the
    /// entered values, failure preserves them for correction and resubmit.
    pub fn settle(&mut self, ticket: AttemptTicket, result: SubmissionResult) {
        if self.state != FormState::Pending || ticket.0 != self.attempt {
            return;
        }

        if result.success {
            self.fields.clear();
            self.state = FormState::Settled(Settled::Success);
        } else {
            self.state = FormState::Settled(Settled::Failure);
        }
        self.result = Some(result);
    }

    /// Explicit reset back to a blank Idle form.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.field_errors.clear();
        self.result = None;
        self.state = FormState::Idle;
        self.attempt += 1;
    }
}
