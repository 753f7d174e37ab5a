use std::io;

use serde_json::Value;

use super::feed_view::{EMPTY_FEED_PLACEHOLDER, FeedView};
use super::format::{self, Align, Column};

const COLUMNS: [Column<'static>; 5] = [
    Column {
        name: "ID",
        align: Align::Left,
    },
    Column {
        name: "Size",
        align: Align::Right,
    },
    Column {
        name: "Fee",
        align: Align::Right,
    },
    Column {
        name: "Severity",
        align: Align::Left,
    },
    Column {
        name: "Time",
        align: Align::Left,
    },
];

pub fn render_feed(data: &Value) -> io::Result<String> {
    render_feed_with_width(data, format::terminal_width())
}

fn render_feed_with_width(data: &Value, width: usize) -> io::Result<String> {
    let view = FeedView::from_data(data)?;

    let mut lines = vec!["Recent transactions:".to_string(), String::new()];
    if view.is_empty() {
        lines.push(EMPTY_FEED_PLACEHOLDER.to_string());
        return Ok(lines.join("\n"));
    }

    let source = match &view.source.path {
        Some(path) => format!("{} ({path})", view.source.kind),
        None => view.source.kind.clone(),
    };
    lines.extend(format::key_value_rows(
        &[
            ("Source:", source),
            ("Transactions:", view.rows.len().to_string()),
            ("Time shown:", format!("{}, {}", view.locale, view.timezone)),
        ],
        2,
    ));
    lines.push(String::new());

    let rows = view
        .rows
        .iter()
        .map(|row| {
            vec![
                row.display_id.clone(),
                row.display_size.clone(),
                row.display_fee.clone(),
                row.fee_severity.clone(),
                row.display_time.clone(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &COLUMNS,
        &rows,
        width,
        "Transaction",
    ));

    Ok(lines.join("\n"))
}
