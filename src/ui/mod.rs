//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (steps_area, main_area) = layout::create_layout(frame.area());

    layout::draw_steps(frame, steps_area, app);

    if app.state.current_section().is_review() {
        forms::draw_review(frame, main_area, app);
    } else {
        forms::draw_section(frame, main_area, app);
    }

    if app.state.form.is_submitted() {
        components::render_submitted_dialog(frame, app);
    }

    layout::draw_status_bar(frame, app);
}
