//! Form aggregate and its lifecycle flag

use super::field::{FieldErrors, Fields};
use super::section::Section;

/// Form-level message shown whenever an in-scope field has an error
pub const FIX_ERRORS_MESSAGE: &str = "Please fix all the errors below";

/// Where the user is in the fill/fix/submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Typing normally; edits are recorded without validation
    #[default]
    Filling,
    /// Errors were flagged; every edit re-validates
    Fixing,
    /// Reserved for an asynchronous submission phase. No transition enters it.
    #[allow(dead_code)]
    Submitting,
    Submitted,
}

impl FormState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Filling => "Filling",
            Self::Fixing => "Fixing",
            Self::Submitting => "Submitting",
            Self::Submitted => "Submitted",
        }
    }
}

/// Snapshot of the whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub state: FormState,
    pub fields: Fields,
    pub field_errors: FieldErrors,
    pub form_errors: Vec<String>,
    pub current_section: Section,
}

impl Form {
    /// Empty form on the first section
    pub fn initial() -> Self {
        Self {
            state: FormState::Filling,
            fields: Fields::default(),
            field_errors: FieldErrors::default(),
            form_errors: Vec::new(),
            current_section: Section::first(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_form() {
        let form = Form::initial();
        assert_eq!(form.state, FormState::Filling);
        assert_eq!(form.current_section, Section::Social);
        assert_eq!(form.fields, Fields::default());
        assert!(!form.field_errors.has_errors());
        assert!(form.form_errors.is_empty());
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_default_matches_initial() {
        assert_eq!(Form::default(), Form::initial());
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(FormState::Filling.label(), "Filling");
        assert_eq!(FormState::Fixing.label(), "Fixing");
        assert_eq!(FormState::Submitting.label(), "Submitting");
        assert_eq!(FormState::Submitted.label(), "Submitted");
    }
}
