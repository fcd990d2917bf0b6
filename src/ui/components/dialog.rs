//! Confirmation shown once the record is submitted

use crate::app::App;
use crate::validation::Person;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 9;

/// Rect of `width` x `height` centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap; a word longer than `width` gets a line of its own
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];
    for word in text.split_whitespace() {
        let Some(current) = lines.last_mut() else {
            break;
        };
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }
    lines
}

fn summary_lines(person: &Person) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::Cyan);
    [
        ("Email", person.email.clone()),
        ("Age", format!("{} years", person.age)),
        ("Height", format!("{} cm", person.height_cm)),
        ("City", format!("{} {}", person.city, person.pincode)),
        ("Company", person.company.clone()),
    ]
    .into_iter()
    .map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
            Span::raw(value),
        ])
    })
    .collect()
}

pub fn render_submitted_dialog(frame: &mut Frame, app: &App) {
    let Some(person) = &app.state.record else {
        return;
    };

    let when = app
        .submitted_at
        .map(|at| format!(" at {}", at.format("%H:%M on %d %b %Y")))
        .unwrap_or_default();
    let thanks = format!("Thanks, {}! Your details were submitted{when}.", person.name);

    let area = frame.area();
    let width = MAX_WIDTH.min(area.width);
    // Borders plus one column of padding each side
    let text_width = width.saturating_sub(4).max(1) as usize;

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = wrap_words(&thanks, text_width)
        .into_iter()
        .map(Line::from)
        .collect();
    lines.push(Line::default());
    lines.extend(summary_lines(person));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("y", key_style),
        Span::raw(" copy JSON  "),
        Span::styled("n", key_style),
        Span::raw(" new entry  "),
        Span::styled("q", key_style),
        Span::raw(" quit"),
    ]));

    let dialog_area = centered(area, width, lines.len() as u16 + 2);
    let block = Block::default()
        .title(Span::styled(
            " Submitted ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        dialog_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_in_a_roomy_area() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered(area, 64, 10), Rect::new(18, 10, 64, 10));
    }

    #[test]
    fn test_centered_shrinks_to_a_small_area() {
        let area = Rect::new(2, 1, 20, 5);
        assert_eq!(centered(area, 64, 10), area);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_words("Thanks, Ada!", 40), vec!["Thanks, Ada!"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_keeps_overlong_words_whole() {
        assert_eq!(
            wrap_words("hi supercalifragilistic", 5),
            vec!["hi", "supercalifragilistic"]
        );
    }

    #[test]
    fn test_summary_lists_the_record() {
        let person = Person {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
            height_cm: 165,
            pincode: "560001".to_string(),
            city: "Bengaluru".to_string(),
            company: "Analytical Engines".to_string(),
        };
        let text: Vec<String> = summary_lines(&person)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(
            text,
            vec![
                "Email    ada@example.com",
                "Age      36 years",
                "Height   165 cm",
                "City     Bengaluru 560001",
                "Company  Analytical Engines",
            ]
        );
    }
}
