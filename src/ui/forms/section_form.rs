//! Input sections (everything before review)

use super::field_renderer::{draw_error_panel, draw_field};
use crate::app::App;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 14;

/// Draw the current section's inputs with a Continue button
pub fn draw_section(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let section = form.current_section;
    let fields = section.fields();

    let block = Block::default()
        .title(format!(
            " {} ({}/5) ",
            section.label(),
            section.position()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(form.form_errors.len() as u16)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_error_panel(frame, chunks[0], &form.form_errors);

    for (idx, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            field.label(),
            form.fields.get(*field),
            form.field_errors.get(*field),
            app.focus == idx,
        );
    }

    let button_row = chunks[fields.len() + 1];
    let button_area = Rect {
        width: button_row.width.min(BUTTON_WIDTH),
        ..button_row
    };
    render_submit_button(frame, button_area, "Continue", form.state);
}
