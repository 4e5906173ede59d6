//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool, is_enabled: bool) -> Style {
    if is_active && is_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a text field; shows the placeholder while empty
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let value_style = if is_enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if is_active && is_enabled { CURSOR } else { "" };
    let value = field.display_value();

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else if field.is_multiline {
        // split('\n') keeps a trailing empty line so the cursor follows a newline
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value, value_style))]
    };

    if !cursor.is_empty() {
        let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));
        if field.as_text().is_empty() {
            lines[0].spans.insert(0, cursor_span);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, is_enabled));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw the star rating with an optional "You rated" caption
pub fn draw_rating_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    caption: Option<String>,
    is_active: bool,
    is_enabled: bool,
) {
    let star_style = if is_enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![Line::from(Span::styled(
        spaced(&field.display_value()),
        star_style,
    ))];
    match caption {
        Some(text) => lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Gray),
        ))),
        None if is_active => lines.push(Line::from(Span::styled(
            "1-5 or ←/→ to rate",
            Style::default().fg(Color::DarkGray),
        ))),
        None => {}
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, is_enabled));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// "★★☆" -> "★ ★ ☆"
fn spaced(stars: &str) -> String {
    stars
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
