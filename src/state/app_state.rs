//! Application state definitions

use super::forms::Form;
use crate::validation::Person;

/// Everything the UI renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub form: Form,
    /// Validated record, present once the final submit succeeds
    pub record: Option<Person>,
}

impl AppState {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn current_section(&self) -> super::Section {
        self.form.current_section
    }
}
