//! Negative feedback form rendering

use super::field_renderer::{draw_field, draw_rating_field};
use crate::app::App;
use crate::state::{FeedbackFormController, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_column;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the form grows on large terminals
const FORM_MAX_WIDTH: u16 = 72;

/// Draw the feedback form
pub fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let controller = &app.state.feedback;
    let form = controller.form();
    let enabled = controller.inputs_enabled();
    let active = form.active_field();

    let area = centered_column(area, FORM_MAX_WIDTH);
    let block = Block::default()
        .title(" Feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = banner_text(controller);
    let banner_height = if banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Heading
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Contact
            Constraint::Length(4),             // Rating
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Privacy note
            Constraint::Length(1),             // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_heading(frame, chunks[0]);

    if let Some((text, color)) = banner {
        draw_banner(frame, chunks[1], &text, color);
    }

    draw_field(frame, chunks[2], &form.name, active == 0, enabled);
    draw_field(frame, chunks[3], &form.email, active == 1, enabled);
    draw_field(frame, chunks[4], &form.contact, active == 2, enabled);
    draw_rating_field(
        frame,
        chunks[5],
        &form.rating,
        controller.rating_label(),
        active == 3,
        enabled,
    );
    draw_field(frame, chunks[6], &form.message, active == 4, enabled);

    let label = if controller.is_submitting() {
        "⏳ Submitting..."
    } else {
        "Submit Feedback"
    };
    render_button(
        frame,
        chunks[7],
        label,
        form.is_submit_button_active(),
        enabled,
    );

    let privacy = Paragraph::new(Span::styled(
        "🔒 Your feedback is private and will only be seen by our management team.",
        Style::default().fg(Color::Green),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(privacy, chunks[8]);

    draw_help_text(frame, chunks[9]);
}

/// Error text wins over the please-wait notice
fn banner_text(controller: &FeedbackFormController) -> Option<(String, Color)> {
    controller
        .error_message()
        .map(|e| (format!("⚠ {e}"), Color::Red))
        .or_else(|| controller.notice().map(|n| (n.to_string(), Color::Yellow)))
}

fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "😔 We're sorry to hear that!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your feedback helps us improve. Please tell us what went wrong.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let banner = Paragraph::new(Span::styled(text, Style::default().fg(color)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(banner, area);
}

fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key),
        Span::raw(": submit  "),
        Span::styled("Esc", key),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
