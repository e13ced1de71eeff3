//! Resource list screen

use ratatui::prelude::*;

use crate::app::forms::ListMode;
use crate::app::App;
use crate::ui::components::{header, status_bar, table};
use crate::ui::screens::resources::ResourceView;
use crate::ui::layout::ScreenLayout;
use crate::ui::Theme;

/// Render an MCP server or environment list
pub fn render(frame: &mut Frame, app: &App, view: ResourceView, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    let user = app.auth.current_user.as_ref().map(|u| u.email.as_str());
    header::render(frame, layout.header, view.list_title(), user, theme);

    let screen = view.screen(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Table
            Constraint::Length(1), // Status message
        ])
        .split(layout.content);

    let renaming = match &screen.mode {
        ListMode::Renaming { buffer } => Some(buffer.as_str()),
        ListMode::Browse => None,
    };

    let title = format!("{} ({})", view.list_title(), screen.registry.len());
    table::render_resource_table(
        frame,
        chunks[0],
        &title,
        screen.registry.list(),
        screen.selected,
        renaming,
        theme,
    );

    status_bar::render_message(frame, chunks[1], None, None, screen.status.as_deref(), theme);

    let hints: &[(&str, &str)] = if renaming.is_some() {
        &[("Enter", "Save name"), ("Esc", "Cancel")]
    } else {
        &[
            ("\u{2191}\u{2193}", "Select"),
            ("c", "Clone"),
            ("e", "Edit name"),
            ("d", "Delete"),
            ("n", "New"),
            ("Esc", "Dashboard"),
        ]
    };
    status_bar::render_help_footer(frame, layout.footer, hints, theme);
}
