//! Input events handed to the form controller and the effects it returns

use crate::state::AppState;

/// A value change coming from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A text input named `name` now holds `value`
    TextInput { name: String, value: String },
    /// Change raised by something that isn't a text input
    Other,
}

impl ChangeEvent {
    pub fn text_input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::TextInput {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A submit request for the current section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the UI's native submit behaviour
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Deferred instruction for the UI to run after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PreventDefault,
}

/// New state plus the effects to run against the originating event
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Dispatch {
    pub fn new(state: AppState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    /// Run every effect against `event` and hand back the new state
    pub fn run(self, event: &mut SubmitEvent) -> AppState {
        for effect in &self.effects {
            match effect {
                Effect::PreventDefault => event.prevent_default(),
            }
        }
        self.state
    }
}
