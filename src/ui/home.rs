//! Home screen rendering

use crate::app::App;
use crate::state::HomeButton;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_column;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let area = centered_column(area, 60);
    let block = Block::default()
        .title(" Xpress Inn ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(3),             // Heading
            Constraint::Length(BUTTON_HEIGHT), // Leave feedback
            Constraint::Length(BUTTON_HEIGHT), // Quit
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .horizontal_margin(4)
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "How was your stay?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Tell us what went wrong and we will work on it.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    for (idx, button) in [HomeButton::LeaveFeedback, HomeButton::Quit]
        .into_iter()
        .enumerate()
    {
        render_button(
            frame,
            chunks[2 + idx],
            button.label(),
            app.state.home_selected_button == button,
            true,
        );
    }
}
