//! Trait abstraction for the validator to enable mocking in tests

use super::person::Person;
use crate::state::{FieldErrors, Fields};

/// Turns raw field text into a validated record, or reports per-field errors.
///
/// Implementations must check the whole record in one pass; the form
/// controller decides which of the reported errors the user gets to see.
#[cfg_attr(test, mockall::automock)]
pub trait Validator {
    fn validate(&self, fields: &Fields) -> Result<Person, FieldErrors>;
}
