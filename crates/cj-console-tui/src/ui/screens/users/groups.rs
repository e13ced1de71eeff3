//! User groups screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{centered_rect, section_block, ScreenLayout};
use crate::ui::Theme;

/// Render the user groups screen. Group management has no backing data
/// yet, so this is informational only.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    let user = app.auth.current_user.as_ref().map(|u| u.email.as_str());
    header::render(frame, layout.header, "User Groups", user, theme);

    let content_area = centered_rect(50, 40, layout.content);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from("  No user groups have been configured."),
    ])
    .style(theme.text_secondary())
    .block(section_block("User Groups", theme));

    frame.render_widget(content, content_area);

    status_bar::render_help_footer(frame, layout.footer, &[("Esc", "Back")], theme);
}
