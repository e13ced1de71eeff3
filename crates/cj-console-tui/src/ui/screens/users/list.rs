//! User list screen

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table};

use crate::app::App;
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{section_block, ScreenLayout};
use crate::ui::Theme;

/// Render the registered user list. Passwords and answers never show here.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    let user = app.auth.current_user.as_ref().map(|u| u.email.as_str());
    header::render(frame, layout.header, "Users", user, theme);

    let header_row = Row::new(vec![
        Cell::from("Email").style(theme.text_highlight()),
        Cell::from("Security Question").style(theme.text_highlight()),
    ])
    .height(1);

    let rows: Vec<Row> = app
        .store
        .users()
        .iter()
        .enumerate()
        .map(|(i, account)| {
            Row::new(vec![
                Cell::from(account.email.clone()),
                Cell::from(account.security_question.clone()),
            ])
            .style(theme.menu_item(i == app.ui.user_index))
        })
        .collect();

    let widths = [Constraint::Min(30), Constraint::Min(40)];
    let table = Table::new(rows, widths)
        .header(header_row)
        .block(section_block("Registered Users", theme))
        .column_spacing(2);

    frame.render_widget(table, layout.content);

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[("\u{2191}\u{2193}", "Select"), ("Esc", "Back")],
        theme,
    );
}
