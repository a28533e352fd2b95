//! Intake Forms Platform
//!
//! Contact intake form core: field-by-field validation and gated submission.
//!
//! ## Architecture
//!
//! - **Domain Layer**: FormState aggregate, validation rules, submission snapshots
//! - **Application Layer**: FormService orchestrating change events and submits
//! - **Ports Layer**: SubmissionSink outbound interface
//! - **Infrastructure Layer**: Tracing and in-memory sink implementations
//!
//! ## Behavior
//!
//! Every applied field change triggers a full recomputation of the derived
//! error list. Submission is gated on that list: a clean form produces an
//! immutable [`SubmissionRecord`] handed to the configured sink, after which
//! the form resets to its initial values; a dirty form absorbs the submit.

use thiserror::Error;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{FormService, SubmitOutcome};
pub use domain::events::FieldChange;
pub use domain::form_state::{FormState, PhoneType, StaffRole};
pub use domain::submission::SubmissionRecord;
pub use domain::validation::FormValidator;
pub use infrastructure::{MemorySink, TracingSink};
pub use ports::SubmissionSink;

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while translating UI change events into typed field changes.
///
/// Validation rule violations are not errors: they are the user-facing
/// message list produced by [`FormValidator`] and never escalate past the
/// component boundary.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, IntakeError>;
