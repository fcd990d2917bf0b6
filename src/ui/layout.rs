//! Layout components (step indicator, status bar)

use crate::app::App;
use crate::state::{FormState, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the step indicator and the form area
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Step indicator
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the section sequence with the current step highlighted
pub fn draw_steps(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.current_section();
    let submitted = app.state.form.is_submitted();

    let mut spans = vec![Span::raw(" ")];
    for (idx, section) in Section::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }

        let done = *section < current || submitted;
        let marker = if done { "✓" } else { "" };
        let style = if *section == current && !submitted {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if done {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(
            format!("{}{}. {}", marker, section.position(), section.label()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn state_badge(state: FormState) -> Span<'static> {
    let color = match state {
        FormState::Filling => Color::Green,
        FormState::Fixing => Color::Red,
        FormState::Submitting => Color::Yellow,
        FormState::Submitted => Color::Blue,
    };
    Span::styled(
        format!(" {} ", state.label()),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    let mut spans = vec![state_badge(app.state.form.state), Span::raw(" ")];

    if app.show_key_hints {
        spans.push(Span::styled(
            get_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: status_area.y,
        width: quit_width,
        height: status_area.height,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for what's on screen
fn get_hints(app: &App) -> String {
    if app.state.form.is_submitted() {
        return "y:copy JSON  n:new entry  q:quit".to_string();
    }
    if app.state.current_section().is_review() {
        return "Enter:submit  Esc:back".to_string();
    }
    format!(
        "Tab:next  Enter:continue  Esc:back  {}:paste  ^U:clear",
        crate::platform::PASTE_SHORTCUT
    )
}
