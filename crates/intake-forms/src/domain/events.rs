//! Field change events
//!
//! The inbound event surface: one variant per mutable field, plus a parser
//! for UI layers that deliver `(field, value)` string pairs.

use crate::domain::form_state::{PhoneType as PhoneTypeValue, StaffRole as StaffRoleValue};
use crate::{IntakeError, Result};

/// A single field mutation requested by the input surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Email(String),
    Number(String),
    PhoneType(Option<PhoneTypeValue>),
    StaffRole(StaffRoleValue),
    Bio(String),
    Notifications(bool),
}

impl FieldChange {
    /// Translate a stringly-typed change event into a typed one.
    ///
    /// Field names follow the wire spelling of the input surface
    /// (`phoneType`, `staffRole`). An empty `phoneType` value clears the
    /// selection.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field {
            "name" => Ok(Self::Name(value.to_string())),
            "email" => Ok(Self::Email(value.to_string())),
            "number" => Ok(Self::Number(value.to_string())),
            "phoneType" => {
                if value.is_empty() {
                    Ok(Self::PhoneType(None))
                } else {
                    Ok(Self::PhoneType(Some(value.parse()?)))
                }
            }
            "staffRole" => Ok(Self::StaffRole(value.parse()?)),
            "bio" => Ok(Self::Bio(value.to_string())),
            "notifications" => Ok(Self::Notifications(value == "true")),
            other => Err(IntakeError::UnknownField(other.to_string())),
        }
    }
}
