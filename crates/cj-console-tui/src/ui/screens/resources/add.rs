//! Add-resource screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{centered_rect, render_input, ScreenLayout};
use crate::ui::screens::resources::ResourceView;
use crate::ui::Theme;

/// Render the add-server / add-environment form
pub fn render(frame: &mut Frame, app: &App, view: ResourceView, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    let user = app.auth.current_user.as_ref().map(|u| u.email.as_str());
    header::render(frame, layout.header, view.add_title(), user, theme);

    let form_area = centered_rect(60, 50, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(form_area);

    let instructions = Paragraph::new("New entries start in the Running state.")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(instructions, chunks[0]);

    let add = view.add_screen(app);
    render_input(frame, chunks[1], "Name", &add.name, true, false, theme);

    status_bar::render_message(frame, chunks[2], add.error.as_deref(), None, None, theme);

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[("Enter", "Add"), ("Esc", "Back to list")],
        theme,
    );
}
