//! Submission snapshot
//!
//! Immutable record produced by a valid submit: every form field as it was at
//! submission time, plus an id and a UTC timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::form_state::{FormState, PhoneType, StaffRole};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub number: String,
    pub phone_type: Option<PhoneType>,
    pub staff_role: Option<StaffRole>,
    pub bio: String,
    pub notifications: bool,
    pub submitted_on: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Snapshot the given state with a fresh id and timestamp.
    pub fn create(state: &FormState) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: state.name().to_string(),
            email: state.email().to_string(),
            number: state.number().to_string(),
            phone_type: state.phone_type(),
            staff_role: state.staff_role(),
            bio: state.bio().to_string(),
            notifications: state.notifications(),
            submitted_on: Utc::now(),
        }
    }
}
