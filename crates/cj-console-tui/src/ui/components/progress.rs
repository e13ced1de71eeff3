//! Two-step flow indicator

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Render a numbered step indicator, e.g. `(1) Verify ──── (2) Reset`.
/// Completed and current steps light up in the brand color.
pub fn render_steps(frame: &mut Frame, area: Rect, labels: &[&str], current: usize, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();

    for (i, label) in labels.iter().enumerate() {
        let active = i <= current;
        let style = if active {
            theme.text_highlight()
        } else {
            theme.text_muted()
        };

        if i > 0 {
            let connector_style = if active {
                Style::default().fg(theme.cj_blue)
            } else {
                theme.text_muted()
            };
            spans.push(Span::styled(" \u{2500}\u{2500}\u{2500}\u{2500} ", connector_style));
        }

        spans.push(Span::styled(format!("({}) {}", i + 1, label), style));
    }

    let indicator = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(indicator, area);
}
