//! Form domain layer
//!
//! Field records, the section sequence, and the pure transitions the UI
//! dispatches into on every edit and submit.

mod event;
mod field;
mod form_state;
mod section;
pub mod transitions;

pub use event::{ChangeEvent, SubmitEvent};
pub use field::{FieldErrors, FieldName, Fields};
pub use form_state::{Form, FormState};
pub use section::Section;

#[cfg(test)]
pub use form_state::FIX_ERRORS_MESSAGE;
