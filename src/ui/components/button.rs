//! Submit button for the form sections

use crate::state::FormState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Border and text styles for the button while the form is in `state`
fn button_styles(state: FormState) -> (Style, Style) {
    let color = match state {
        FormState::Filling => Color::Cyan,
        FormState::Fixing => Color::Red,
        // Nothing left to submit
        FormState::Submitting | FormState::Submitted => {
            let dim = Style::default().fg(Color::DarkGray);
            return (dim, dim);
        }
    };
    (
        Style::default().fg(color),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Render the button Enter triggers, styled after the form's state
pub fn render_submit_button(frame: &mut Frame, area: Rect, label: &str, state: FormState) {
    let (border_style, text_style) = button_styles(state);

    let paragraph = Paragraph::new(format!(" {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
