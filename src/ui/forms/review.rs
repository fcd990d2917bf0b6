//! Review section: every value at a glance, then the final submit

use super::field_renderer::draw_error_panel;
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 12;

pub fn draw_review(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Review (5/5) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form.form_errors.len() as u16),
            Constraint::Length(FieldName::ALL.len() as u16 + 1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_error_panel(frame, chunks[0], &form.form_errors);

    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = FieldName::ALL
        .iter()
        .map(|field| {
            let mut spans = vec![
                Span::styled(format!("{:<14}", field.label()), label_style),
                Span::raw(form.fields.get(*field).to_string()),
            ];
            let error = form.field_errors.get(*field);
            if !error.is_empty() {
                spans.push(Span::styled(
                    format!("  {error}"),
                    Style::default().fg(Color::Red),
                ));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let button_area = Rect {
        width: chunks[2].width.min(BUTTON_WIDTH),
        ..chunks[2]
    };
    render_submit_button(frame, button_area, "Submit", form.state);
}
