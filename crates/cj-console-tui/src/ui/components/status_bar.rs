//! Footer and message components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::Theme;

/// Render help hints in the footer
pub fn render_help_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_highlight()),
                Span::styled(format!(" {} ", action), theme.text_muted()),
                Span::raw(" "),
            ]
        })
        .collect();

    let line = Line::from(hint_spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Render a one-line inline message. Errors win over success, success over
/// plain status.
pub fn render_message(
    frame: &mut Frame,
    area: Rect,
    error: Option<&str>,
    success: Option<&str>,
    status: Option<&str>,
    theme: &Theme,
) {
    let (text, style) = if let Some(e) = error {
        (e, theme.danger())
    } else if let Some(s) = success {
        (s, theme.success())
    } else if let Some(s) = status {
        (s, theme.text_secondary())
    } else {
        ("", theme.text_muted())
    };

    let message = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(message, area);
}
