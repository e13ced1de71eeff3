//! User management landing screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{centered_rect, section_block, ScreenLayout};
use crate::ui::Theme;

/// Render the user management menu
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    let user = app.auth.current_user.as_ref().map(|u| u.email.as_str());
    header::render(frame, layout.header, "User Management", user, theme);

    let menu_area = centered_rect(50, 50, layout.content);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  [u] ", theme.text_highlight()),
            Span::raw("Users        - Registered accounts"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [g] ", theme.text_highlight()),
            Span::raw("User Groups  - Group assignments"),
        ]),
    ])
    .style(theme.text())
    .block(section_block("User Management", theme));

    frame.render_widget(content, menu_area);

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[("u", "Users"), ("g", "Groups"), ("Esc", "Dashboard")],
        theme,
    );
}
