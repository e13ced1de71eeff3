//! Resource table component

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row, Table};

use cj_console_core::{ServerRecord, ServerStatus};

use crate::ui::layout::section_block;
use crate::ui::Theme;

/// Render a table of resource records with one selected row.
///
/// When `renaming` is set, the selected row's name cell shows the edit
/// buffer with a cursor instead of the stored name.
pub fn render_resource_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    records: &[ServerRecord],
    selected: usize,
    renaming: Option<&str>,
    theme: &Theme,
) {
    let header = Row::new(vec![
        Cell::from("ID").style(theme.text_highlight()),
        Cell::from("Name").style(theme.text_highlight()),
        Cell::from("Status").style(theme.text_highlight()),
    ])
    .height(1);

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = i == selected;

            let name = match renaming {
                Some(buffer) if is_selected => format!("{}_", buffer),
                _ => record.name.clone(),
            };

            let status_style = theme.resource_status(record.status == ServerStatus::Up);
            let row_style = if is_selected {
                theme.menu_item(true)
            } else {
                theme.text()
            };

            Row::new(vec![
                Cell::from(record.id.to_string()),
                Cell::from(name),
                Cell::from(record.status.label()).style(status_style),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(24),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(section_block(title, theme))
        .column_spacing(2);

    frame.render_widget(table, area);
}
