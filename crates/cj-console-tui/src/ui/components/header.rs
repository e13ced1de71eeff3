//! Header component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Render the header bar with product badge, screen title, and clock.
/// The signed-in user's email shows on the right when present.
pub fn render(frame: &mut Frame, area: Rect, title: &str, user: Option<&str>, theme: &Theme) {
    let now = chrono::Local::now();
    let time_str = now.format("%H:%M:%S").to_string();

    let right = match user {
        Some(email) => format!(" {}  {} ", email, time_str),
        None => format!(" {} ", time_str),
    };

    let used = 16 + title.len() as u16 + right.len() as u16;
    let pad = " ".repeat(area.width.saturating_sub(used) as usize);

    let header_text = Line::from(vec![
        Span::styled(
            " CLOUDJUNCTION ",
            Style::default()
                .fg(Color::White)
                .bg(theme.cj_navy)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(pad),
        Span::styled(right, Style::default().fg(theme.cj_blue)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}
