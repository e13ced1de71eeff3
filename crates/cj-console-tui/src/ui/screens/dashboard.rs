//! Dashboard screen - summary cards and main menu

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use cj_console_core::ServerRegistry;

use crate::app::{App, DASHBOARD_MENU};
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{section_block, ScreenLayout};
use crate::ui::Theme;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    let user = app.auth.current_user.as_ref().map(|u| u.email.as_str());
    header::render(frame, layout.header, "Dashboard", user, theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(9),    // Menu
        ])
        .split(layout.content);

    render_cards(frame, app, chunks[0], theme);
    render_menu(frame, app, chunks[1], theme);

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[
            ("\u{2191}\u{2193}", "Select"),
            ("Enter", "Open"),
            ("q", "Quit"),
        ],
        theme,
    );
}

/// Summary counts come from the seed data, matching what the list screens
/// show when freshly opened.
fn render_cards(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let (mcp_up, mcp_down) = ServerRegistry::seed_mcp_servers().status_counts();
    let (env_up, env_down) = ServerRegistry::seed_environments().status_counts();

    render_status_card(frame, cards[0], "MCP Servers", mcp_up, mcp_down, theme);
    render_status_card(frame, cards[1], "Environments", env_up, env_down, theme);

    let users_card = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Registered: "),
            Span::styled(app.store.len().to_string(), theme.text_highlight()),
        ]),
    ])
    .block(section_block("Users", theme));
    frame.render_widget(users_card, cards[2]);
}

fn render_status_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    up: usize,
    down: usize,
    theme: &Theme,
) {
    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("\u{25CF} {} Running", up), theme.success()),
            Span::raw("   "),
            Span::styled(format!("\u{25CF} {} Down", down), theme.danger()),
        ]),
    ])
    .block(section_block(title, theme));
    frame.render_widget(card, area);
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let items: Vec<ListItem> = DASHBOARD_MENU
        .iter()
        .enumerate()
        .map(|(i, item)| {
            ListItem::new(format!("  {}  ", item)).style(theme.menu_item(i == app.ui.menu_index))
        })
        .collect();

    let menu = List::new(items).block(section_block("Main Menu", theme));
    frame.render_widget(menu, area);
}
