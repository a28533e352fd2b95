//! Validation rule set
//!
//! Maps a [`FormState`] to its ordered list of user-facing error messages.
//! The full rule set runs on every call; nothing short-circuits, so every
//! currently violated rule is reported, in a fixed order.

use regex::Regex;

use crate::domain::form_state::FormState;

const MAX_BIO_CHARS: usize = 280;

/// Pre-compiled rule patterns plus the rule evaluation itself.
pub struct FormValidator {
    email_pattern: Regex,
    phone_pattern: Regex,
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            // Non-whitespace/non-@ local part, @, domain with at least one dot
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
                .expect("email pattern is valid"),
            phone_pattern: Regex::new(r"^[0-9]{8}$").expect("phone pattern is valid"),
        }
    }

    /// Evaluate every rule against the current state.
    ///
    /// Pure over `state`: identical input always yields the identical ordered
    /// output, and the result never contains a message whose rule is not
    /// currently violated.
    pub fn validate(&self, state: &FormState) -> Vec<String> {
        let mut errors = Vec::new();

        if state.name().is_empty() {
            errors.push("Please enter your Name".to_string());
        }

        // Unconditional: an empty email fails the pattern too.
        if !self.email_pattern.is_match(state.email()) {
            errors.push("Please provide a valid Email".to_string());
        }

        // Message text predates the pattern; kept as-is.
        if !state.number().is_empty() && !self.phone_pattern.is_match(state.number()) {
            errors.push("Phone number must be 10 digits".to_string());
        }

        if !state.number().is_empty() && state.phone_type().is_none() {
            errors.push("Please select a phone type if phone number is provided".to_string());
        }

        // Defensive: the input surface is expected to cap bio length already.
        if state.bio().chars().count() > MAX_BIO_CHARS {
            errors.push("Bio cannot exceed 280 characters".to_string());
        }

        if state.staff_role().is_none() {
            errors.push("Staff role must be selected".to_string());
        }

        errors
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form_state::{PhoneType, StaffRole};

    fn valid_state() -> FormState {
        let mut state = FormState::new();
        state.set_name("Ada");
        state.set_email("ada@x.com");
        state.set_staff_role(StaffRole::Student);
        state
    }

    #[test]
    fn test_valid_state_has_no_errors() {
        let validator = FormValidator::new();
        assert!(validator.validate(&valid_state()).is_empty());
    }

    #[test]
    fn test_empty_name() {
        let validator = FormValidator::new();
        let mut state = valid_state();
        state.set_name("");
        let errors = validator.validate(&state);
        assert!(errors.contains(&"Please enter your Name".to_string()));
    }

    #[test]
    fn test_email_rule() {
        let validator = FormValidator::new();
        let mut state = valid_state();

        for bad in ["", "bad", "a@b", "a b@c.d", "a@b c.d", "@b.co", "a@.co"] {
            state.set_email(bad);
            let errors = validator.validate(&state);
            assert!(
                errors.contains(&"Please provide a valid Email".to_string()),
                "expected email error for {bad:?}"
            );
        }

        for good in ["a@b.co", "ada@x.com", "first.last@sub.domain.org"] {
            state.set_email(good);
            let errors = validator.validate(&state);
            assert!(errors.is_empty(), "unexpected errors for {good:?}: {errors:?}");
        }
    }

    #[test]
    fn test_phone_format_rule() {
        let validator = FormValidator::new();
        let mut state = valid_state();
        state.set_phone_type(Some(PhoneType::Home));

        state.set_number("12345678");
        assert!(validator.validate(&state).is_empty());

        for bad in ["123", "123456789", "1234567a", "1234 5678"] {
            state.set_number(bad);
            let errors = validator.validate(&state);
            assert!(
                errors.contains(&"Phone number must be 10 digits".to_string()),
                "expected phone error for {bad:?}"
            );
        }

        // Empty number is allowed; the rule only applies when one is given.
        state.set_number("");
        state.set_phone_type(None);
        assert!(validator.validate(&state).is_empty());
    }

    #[test]
    fn test_phone_type_required_with_number() {
        let validator = FormValidator::new();
        let mut state = valid_state();
        state.set_number("12345678");

        let errors = validator.validate(&state);
        assert!(errors
            .contains(&"Please select a phone type if phone number is provided".to_string()));

        state.set_phone_type(Some(PhoneType::Work));
        assert!(validator.validate(&state).is_empty());
    }

    #[test]
    fn test_phone_type_error_independent_of_other_fields() {
        let validator = FormValidator::new();
        let mut state = FormState::new();
        state.set_number("not-a-number");

        let errors = validator.validate(&state);
        assert!(errors
            .contains(&"Please select a phone type if phone number is provided".to_string()));
    }

    #[test]
    fn test_bio_length_boundary() {
        let validator = FormValidator::new();
        let mut state = valid_state();

        state.set_bio("x".repeat(280));
        assert!(validator.validate(&state).is_empty());

        state.set_bio("x".repeat(281));
        let errors = validator.validate(&state);
        assert_eq!(errors, vec!["Bio cannot exceed 280 characters".to_string()]);
    }

    #[test]
    fn test_staff_role_required() {
        let validator = FormValidator::new();
        let mut state = FormState::new();
        state.set_name("Ada");
        state.set_email("ada@x.com");

        let errors = validator.validate(&state);
        assert_eq!(errors, vec!["Staff role must be selected".to_string()]);
    }

    #[test]
    fn test_all_errors_reported_in_order() {
        let validator = FormValidator::new();
        let mut state = FormState::new();
        state.set_email("bad");

        let errors = validator.validate(&state);
        assert_eq!(
            errors,
            vec![
                "Please enter your Name".to_string(),
                "Please provide a valid Email".to_string(),
                "Staff role must be selected".to_string(),
            ]
        );
    }

    #[test]
    fn test_full_failure_ordering() {
        let validator = FormValidator::new();
        let mut state = FormState::new();
        state.set_email("bad");
        state.set_number("123");
        state.set_bio("x".repeat(300));

        let errors = validator.validate(&state);
        assert_eq!(
            errors,
            vec![
                "Please enter your Name".to_string(),
                "Please provide a valid Email".to_string(),
                "Phone number must be 10 digits".to_string(),
                "Please select a phone type if phone number is provided".to_string(),
                "Bio cannot exceed 280 characters".to_string(),
                "Staff role must be selected".to_string(),
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let validator = FormValidator::new();
        let mut state = FormState::new();
        state.set_email("bad");
        state.set_number("123");

        let first = validator.validate(&state);
        let second = validator.validate(&state);
        assert_eq!(first, second);
    }
}
