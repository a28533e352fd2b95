//! Domain layer
//!
//! The FormState aggregate, the validation rule set, and the submission
//! snapshot it produces.

pub mod events;
pub mod form_state;
pub mod submission;
pub mod validation;

pub use events::FieldChange;
pub use form_state::{FormState, PhoneType, StaffRole};
pub use submission::SubmissionRecord;
pub use validation::FormValidator;
