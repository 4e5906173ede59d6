//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{SubmissionStatus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Horizontally center a column no wider than `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", view.title()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(get_view_hints(view), Style::default().fg(Color::Gray)),
    ];

    if view == View::Feedback {
        let (label, color) = match app.state.feedback.status() {
            SubmissionStatus::Idle => ("ready", Color::Gray),
            SubmissionStatus::Submitting => ("sending feedback...", Color::Yellow),
            SubmissionStatus::Failed => ("not sent", Color::Red),
            SubmissionStatus::Succeeded => ("sent", Color::Green),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(label, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Home => "f: feedback  ←/→: select  Enter: open  q: quit",
        View::Feedback => "Tab/S-Tab: move  Enter: submit  Esc: back  ^C: quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_narrower_than_area() {
        let area = Rect::new(0, 0, 100, 40);
        let column = centered_column(area, 60);
        assert_eq!(column, Rect::new(20, 0, 60, 40));
    }

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(5, 2, 40, 10);
        assert_eq!(centered_column(area, 60), area);
    }

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }
}
