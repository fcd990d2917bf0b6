//! Form controller: pure transitions from one snapshot to the next
//!
//! Each handler takes the current [`AppState`] by reference and returns a
//! fresh one. Submit handlers also return an [`Effect::PreventDefault`] so
//! the UI never runs its own submit behaviour.

use super::event::{ChangeEvent, Dispatch, Effect, SubmitEvent};
use super::field::{FieldErrors, FieldName};
use super::form_state::{Form, FormState, FIX_ERRORS_MESSAGE};
use super::section::errors_until_current_section;
use crate::state::AppState;
use crate::validation::Validator;

/// Record a field edit, re-validating only while the user is fixing errors
pub fn fill_field(state: &AppState, event: &ChangeEvent, validator: &dyn Validator) -> AppState {
    let ChangeEvent::TextInput { name, value } = event else {
        return state.clone();
    };
    let Ok(field) = name.parse::<FieldName>() else {
        tracing::debug!("Ignoring change for unrecognized input {name:?}");
        return state.clone();
    };

    let fields = state.form.fields.with(field, value.clone());

    if state.form.state != FormState::Fixing {
        return AppState {
            form: Form {
                fields,
                ..state.form.clone()
            },
            ..state.clone()
        };
    }

    let form = match validator.validate(&fields) {
        Ok(_) => Form {
            state: FormState::Filling,
            fields,
            field_errors: FieldErrors::default(),
            form_errors: Vec::new(),
            ..state.form.clone()
        },
        Err(errors) => {
            let errors = errors_until_current_section(state.form.current_section, &errors);
            let (form_state, form_errors) = gate(&errors);
            Form {
                state: form_state,
                fields,
                field_errors: errors,
                form_errors,
                ..state.form.clone()
            }
        }
    };

    AppState {
        form,
        ..state.clone()
    }
}

/// Validate and advance past the current section when its fields pass
pub fn submit_section(
    state: &AppState,
    _event: &SubmitEvent,
    validator: &dyn Validator,
) -> Dispatch {
    let current = state.form.current_section;

    let form = match validator.validate(&state.form.fields) {
        Ok(_) => Form {
            state: FormState::Filling,
            current_section: current.next(),
            field_errors: FieldErrors::default(),
            form_errors: Vec::new(),
            ..state.form.clone()
        },
        Err(errors) => {
            let errors = errors_until_current_section(current, &errors);
            let (form_state, form_errors) = gate(&errors);
            let current_section = if errors.has_errors() {
                current
            } else {
                current.next()
            };
            Form {
                state: form_state,
                current_section,
                field_errors: errors,
                form_errors,
                ..state.form.clone()
            }
        }
    };

    Dispatch::new(
        AppState {
            form,
            ..state.clone()
        },
        vec![Effect::PreventDefault],
    )
}

/// Final submission from the review section; the whole record must be valid
pub fn submit(state: &AppState, _event: &SubmitEvent, validator: &dyn Validator) -> Dispatch {
    let next = match validator.validate(&state.form.fields) {
        Ok(person) => AppState {
            form: Form {
                state: FormState::Submitted,
                field_errors: FieldErrors::default(),
                form_errors: Vec::new(),
                ..state.form.clone()
            },
            record: Some(person),
        },
        Err(errors) => AppState {
            form: Form {
                state: FormState::Fixing,
                field_errors: errors_until_current_section(state.form.current_section, &errors),
                form_errors: vec![FIX_ERRORS_MESSAGE.to_string()],
                ..state.form.clone()
            },
            ..state.clone()
        },
    };

    Dispatch::new(next, vec![Effect::PreventDefault])
}

/// Step back one section, keeping only the errors still in scope
pub fn go_back(state: &AppState) -> AppState {
    if state.form.is_submitted() {
        return state.clone();
    }

    let current_section = state.form.current_section.previous();
    let errors = errors_until_current_section(current_section, &state.form.field_errors);
    let (form_state, form_errors) = gate(&errors);

    AppState {
        form: Form {
            state: form_state,
            current_section,
            field_errors: errors,
            form_errors,
            ..state.form.clone()
        },
        ..state.clone()
    }
}

/// Throw away everything and start a new entry
pub fn reset() -> AppState {
    AppState::initial()
}

/// Fixing with the summary message while scoped errors remain, Filling otherwise
fn gate(scoped: &FieldErrors) -> (FormState, Vec<String>) {
    if scoped.has_errors() {
        (FormState::Fixing, vec![FIX_ERRORS_MESSAGE.to_string()])
    } else {
        (FormState::Filling, Vec::new())
    }
}
