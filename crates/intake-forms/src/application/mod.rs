//! Application layer
//!
//! [`FormService`] owns the form state and orchestrates the two use cases:
//! applying a field change (with full revalidation) and submitting.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::events::FieldChange;
use crate::domain::form_state::FormState;
use crate::domain::submission::SubmissionRecord;
use crate::domain::validation::FormValidator;
use crate::ports::SubmissionSink;

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was clean; the record was emitted and the form reset.
    Submitted(SubmissionRecord),
    /// The form had outstanding errors; nothing was emitted, state unchanged.
    Rejected { errors: Vec<String> },
}

/// Form application service.
///
/// Holds the single [`FormState`] instance together with its derived error
/// list. The list is recomputed in full after every mutation, so at any point
/// it reflects exactly the rules the current state violates.
pub struct FormService {
    state: FormState,
    validator: FormValidator,
    errors: Vec<String>,
    sink: Arc<dyn SubmissionSink>,
}

impl FormService {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        let state = FormState::new();
        let validator = FormValidator::new();
        let errors = validator.validate(&state);
        Self {
            state,
            validator,
            errors,
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Errors for the current state, in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Apply one field change and revalidate the whole form.
    pub fn apply(&mut self, change: FieldChange) -> &[String] {
        debug!(?change, "applying field change");
        match change {
            FieldChange::Name(v) => self.state.set_name(v),
            FieldChange::Email(v) => self.state.set_email(v),
            FieldChange::Number(v) => self.state.set_number(v),
            FieldChange::PhoneType(v) => self.state.set_phone_type(v),
            FieldChange::StaffRole(v) => self.state.set_staff_role(v),
            FieldChange::Bio(v) => self.state.set_bio(v),
            FieldChange::Notifications(v) => self.state.set_notifications(v),
        }
        self.errors = self.validator.validate(&self.state);
        &self.errors
    }

    /// Attempt to submit the form.
    ///
    /// A dirty form absorbs the event: no record, no emission, no state
    /// change. A clean form snapshots itself into a [`SubmissionRecord`],
    /// hands it to the sink, then resets every field to its initial value.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.errors.is_empty() {
            warn!(error_count = self.errors.len(), "submission rejected");
            return SubmitOutcome::Rejected {
                errors: self.errors.clone(),
            };
        }

        let record = SubmissionRecord::create(&self.state);
        info!(submission_id = %record.id, "submission accepted");
        self.sink.emit(record.clone()).await;

        self.state.reset();
        self.errors = self.validator.validate(&self.state);

        SubmitOutcome::Submitted(record)
    }
}
