//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{transitions, AppState, ChangeEvent, FieldName, FormState, SubmitEvent};
use crate::validation::{Person, PersonValidator, Validator};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;

/// Shape of the record copied to the clipboard after submission
#[derive(Serialize)]
struct SubmittedRecord<'a> {
    #[serde(flatten)]
    person: &'a Person,
    submitted_at: Option<DateTime<Local>>,
}

/// Main application struct
pub struct App {
    /// Current form snapshot; replaced wholesale on every transition
    pub state: AppState,
    validator: Box<dyn Validator>,
    /// Index into the current section's fields
    pub focus: usize,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// When the final submit succeeded
    pub submitted_at: Option<DateTime<Local>>,
    pub show_key_hints: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the person validator
    pub fn new(config: &FormConfig) -> Self {
        Self::with_validator(Box::new(PersonValidator), config)
    }

    pub fn with_validator(validator: Box<dyn Validator>, config: &FormConfig) -> Self {
        Self {
            state: AppState::initial(),
            validator,
            focus: 0,
            status_message: None,
            submitted_at: None,
            show_key_hints: config.show_key_hints(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Field that receives typed input, if the section has any
    pub fn focused_field(&self) -> Option<FieldName> {
        self.state.current_section().fields().get(self.focus).copied()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;

        if self.state.form.is_submitted() {
            return self.handle_submitted_key(key);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => self.submit_current_section(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::CLIPBOARD_MODIFIER) => {
                self.paste_into_focused_field();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused_field(String::clear);
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_focused_field(|value| value.push(c));
            }
            KeyCode::Backspace => {
                self.edit_focused_field(|value| {
                    value.pop();
                });
            }
            _ => {}
        }
        Ok(())
    }

    /// Keys on the post-submission screen
    fn handle_submitted_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') => self.copy_record(),
            KeyCode::Char('n') => {
                tracing::info!("Starting a new entry");
                self.state = transitions::reset();
                self.focus = 0;
                self.submitted_at = None;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn next_field(&mut self) {
        let count = self.state.current_section().fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    fn prev_field(&mut self) {
        let count = self.state.current_section().fields().len();
        if count == 0 {
            return;
        }
        if self.focus == 0 {
            self.focus = count - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Apply `edit` to a copy of the focused value and dispatch the change
    fn edit_focused_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focused_field() else {
            // Nothing to type into on this screen
            self.dispatch_change(ChangeEvent::Other);
            return;
        };
        let mut value = self.state.form.fields.get(field).to_string();
        edit(&mut value);
        self.dispatch_change(ChangeEvent::text_input(field.as_str(), value));
    }

    fn dispatch_change(&mut self, event: ChangeEvent) {
        let before = self.state.form.state;
        self.state = transitions::fill_field(&self.state, &event, self.validator.as_ref());

        if let ChangeEvent::TextInput { name, .. } = &event {
            tracing::debug!("Field {name} changed");
        }
        if before != self.state.form.state {
            tracing::info!(
                "Form state {} -> {}",
                before.label(),
                self.state.form.state.label()
            );
        }
    }

    fn submit_current_section(&mut self) {
        let section = self.state.current_section();
        let mut event = SubmitEvent::new();

        let dispatch = if section.is_review() {
            transitions::submit(&self.state, &event, self.validator.as_ref())
        } else {
            transitions::submit_section(&self.state, &event, self.validator.as_ref())
        };
        self.state = dispatch.run(&mut event);

        if !event.default_prevented() {
            tracing::warn!("Submit on {} left its default action enabled", section.label());
        }

        let next = self.state.current_section();
        if next != section {
            tracing::info!("Advanced from {} to {}", section.label(), next.label());
            self.focus = 0;
        }

        match self.state.form.state {
            FormState::Submitted => {
                tracing::info!("Form submitted");
                self.submitted_at = Some(Local::now());
            }
            FormState::Fixing => {
                tracing::info!("{} has errors", next.label());
                self.focus_first_error();
            }
            FormState::Filling | FormState::Submitting => {}
        }
    }

    /// Move focus to the first field in this section with an error
    fn focus_first_error(&mut self) {
        let errors = &self.state.form.field_errors;
        if let Some(idx) = self
            .state
            .current_section()
            .fields()
            .iter()
            .position(|f| !errors.get(*f).is_empty())
        {
            self.focus = idx;
        }
    }

    fn go_back(&mut self) {
        let section = self.state.current_section();
        self.state = transitions::go_back(&self.state);
        if self.state.current_section() != section {
            tracing::info!(
                "Went back from {} to {}",
                section.label(),
                self.state.current_section().label()
            );
            self.focus = 0;
        }
    }

    fn paste_into_focused_field(&mut self) {
        if self.focused_field().is_none() {
            return;
        }
        match read_clipboard() {
            Ok(text) => {
                let line = text.lines().next().unwrap_or_default().to_string();
                self.edit_focused_field(|value| value.push_str(&line));
            }
            Err(err) => {
                tracing::warn!("Clipboard read failed: {err:?}");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_record(&mut self) {
        let Some(person) = &self.state.record else {
            return;
        };
        let record = SubmittedRecord {
            person,
            submitted_at: self.submitted_at,
        };
        let result = serde_json::to_string_pretty(&record)
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));

        self.status_message = Some(match result {
            Ok(()) => "Copied record as JSON".to_string(),
            Err(err) => {
                tracing::warn!("Clipboard write failed: {err:?}");
                "Clipboard unavailable".to_string()
            }
        });
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Section, FIX_ERRORS_MESSAGE};
    use crate::validation::MockValidator;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).unwrap();
    }

    fn app() -> App {
        App::new(&FormConfig::default())
    }

    /// Fill every field of the current section, one tab stop at a time
    fn fill_section(app: &mut App, values: &[&str]) {
        for value in values {
            type_text(app, value);
            press(app, KeyCode::Tab);
        }
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn test_new_app_starts_on_first_field() {
            let app = app();
            assert!(!app.should_quit());
            assert_eq!(app.focus, 0);
            assert_eq!(app.focused_field(), Some(FieldName::Name));
            assert!(app.show_key_hints);
        }

        #[test]
        fn test_tab_wraps_within_section() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.focused_field(), Some(FieldName::Email));
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.focused_field(), Some(FieldName::Name));
        }

        #[test]
        fn test_backtab_wraps_backwards() {
            let mut app = app();
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.focused_field(), Some(FieldName::Email));
            press(&mut app, KeyCode::Up);
            assert_eq!(app.focused_field(), Some(FieldName::Name));
        }

        #[test]
        fn test_esc_on_first_section_is_noop() {
            let mut app = app();
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_section(), Section::Social);
        }
    }

    mod editing_tests {
        use super::*;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app();
            type_text(&mut app, "Ada");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "ada@example.com");

            assert_eq!(app.state.form.fields.name, "Ada");
            assert_eq!(app.state.form.fields.email, "ada@example.com");
            assert_eq!(app.state.form.state, FormState::Filling);
        }

        #[test]
        fn test_backspace_and_clear() {
            let mut app = app();
            type_text(&mut app, "Adaa");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.fields.name, "Ada");

            app.handle_key(ctrl('u')).unwrap();
            assert!(app.state.form.fields.name.is_empty());
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = app();
            app.handle_key(ctrl('x')).unwrap();
            assert!(app.state.form.fields.name.is_empty());
        }

        #[test]
        fn test_shifted_chars_are_typed() {
            let mut app = app();
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT))
                .unwrap();
            assert_eq!(app.state.form.fields.name, "A");
        }

        #[test]
        fn test_edits_go_through_the_validator_while_fixing() {
            let mut validator = MockValidator::new();
            validator.expect_validate().times(2).returning(|fields| {
                let mut errors = crate::state::FieldErrors::default();
                if fields.email.is_empty() {
                    errors.set(FieldName::Email, "Email is required");
                }
                errors.set(FieldName::Company, "Company is required");
                Err(errors)
            });
            let mut app = App::with_validator(Box::new(validator), &FormConfig::default());

            // First validation: submit enters Fixing
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.state, FormState::Fixing);
            assert_eq!(app.focused_field(), Some(FieldName::Email));

            // Second validation: the edit clears the in-scope error
            type_text(&mut app, "a");
            assert_eq!(app.state.form.state, FormState::Filling);
            assert!(!app.state.form.field_errors.has_errors());
        }
    }

    mod submit_tests {
        use super::*;

        #[test]
        fn test_empty_submit_flags_errors() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.form.state, FormState::Fixing);
            assert_eq!(app.state.current_section(), Section::Social);
            assert_eq!(
                app.state.form.form_errors,
                vec![FIX_ERRORS_MESSAGE.to_string()]
            );
            assert_eq!(app.focused_field(), Some(FieldName::Name));
        }

        #[test]
        fn test_focus_jumps_to_first_error() {
            let mut app = app();
            type_text(&mut app, "Ada");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.focused_field(), Some(FieldName::Email));
        }

        #[test]
        fn test_valid_section_advances_and_resets_focus() {
            let mut app = app();
            fill_section(&mut app, &["Ada", "ada@example.com"]);
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.focus, 1);

            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_section(), Section::Physiological);
            assert_eq!(app.focused_field(), Some(FieldName::Age));
        }

        #[test]
        fn test_full_walkthrough_submits() {
            let mut app = app();
            fill_section(&mut app, &["Ada", "ada@example.com"]);
            press(&mut app, KeyCode::Enter);
            fill_section(&mut app, &["36", "165"]);
            press(&mut app, KeyCode::Enter);
            fill_section(&mut app, &["560001", "Bengaluru"]);
            press(&mut app, KeyCode::Enter);
            fill_section(&mut app, &["Analytical Engines"]);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_section(), Section::Review);
            assert_eq!(app.focused_field(), None);
            type_text(&mut app, "ignored");
            assert_eq!(app.state.form.fields.company, "Analytical Engines");

            press(&mut app, KeyCode::Enter);
            assert!(app.state.form.is_submitted());
            assert!(app.submitted_at.is_some());
            assert_eq!(
                app.state.record.as_ref().map(|p| p.height_cm),
                Some(165)
            );

            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state, AppState::initial());
            assert!(app.submitted_at.is_none());
        }

        #[test]
        fn test_esc_returns_to_previous_section() {
            let mut app = app();
            fill_section(&mut app, &["Ada", "ada@example.com"]);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Tab);

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_section(), Section::Social);
            assert_eq!(app.focus, 0);
            assert_eq!(app.state.form.fields.name, "Ada");
        }

        #[test]
        fn test_quit_after_submission() {
            let mut validator = MockValidator::new();
            validator.expect_validate().returning(|_| {
                Ok(Person {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    age: 36,
                    height_cm: 165,
                    pincode: "560001".to_string(),
                    city: "Bengaluru".to_string(),
                    company: "Analytical Engines".to_string(),
                })
            });
            let mut app = App::with_validator(Box::new(validator), &FormConfig::default());
            for _ in Section::ALL {
                press(&mut app, KeyCode::Enter);
            }
            assert!(app.state.form.is_submitted());

            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }
    }

    #[test]
    fn test_submitted_record_serializes_flat() {
        let person = Person {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
            height_cm: 165,
            pincode: "560001".to_string(),
            city: "Bengaluru".to_string(),
            company: "Analytical Engines".to_string(),
        };
        let record = SubmittedRecord {
            person: &person,
            submitted_at: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["age"], 36);
        assert!(value["submitted_at"].is_null());
    }
}
