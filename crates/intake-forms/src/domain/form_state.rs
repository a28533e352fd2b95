//! FormState aggregate
//!
//! The single mutable record behind the intake form: seven fields, setter
//! mutators, and a reset back to the initial values. Setters store values
//! verbatim; all rule enforcement lives in [`crate::FormValidator`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IntakeError;

/// Phone type selected alongside a phone number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Work,
    Mobile,
}

impl PhoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Mobile => "mobile",
        }
    }
}

impl FromStr for PhoneType {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            "mobile" => Ok(Self::Mobile),
            other => Err(IntakeError::InvalidValue {
                field: "phoneType",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Staff role radio selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Instructor,
    Student,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instructor => "Instructor",
            Self::Student => "Student",
        }
    }
}

impl FromStr for StaffRole {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Instructor" => Ok(Self::Instructor),
            "Student" => Ok(Self::Student),
            other => Err(IntakeError::InvalidValue {
                field: "staffRole",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current values of the intake form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    name: String,
    email: String,
    number: String,
    phone_type: Option<PhoneType>,
    staff_role: Option<StaffRole>,
    bio: String,
    notifications: bool,
}

impl FormState {
    /// All fields at their initial values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn phone_type(&self) -> Option<PhoneType> {
        self.phone_type
    }

    pub fn staff_role(&self) -> Option<StaffRole> {
        self.staff_role
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn notifications(&self) -> bool {
        self.notifications
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }

    pub fn set_phone_type(&mut self, phone_type: Option<PhoneType>) {
        self.phone_type = phone_type;
    }

    pub fn set_staff_role(&mut self, staff_role: StaffRole) {
        self.staff_role = Some(staff_role);
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = bio.into();
    }

    pub fn set_notifications(&mut self, notifications: bool) {
        self.notifications = notifications;
    }

    /// Return every field to its initial value, notifications included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
