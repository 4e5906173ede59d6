//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Feedback => forms::draw_feedback(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays last so they sit on top
    if let Some(message) = &app.state.acknowledgement {
        components::render_acknowledgement_dialog(frame, message);
    }
}
