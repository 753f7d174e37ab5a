use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);
    cmp::max(from_env, 40)
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Lays rows out as an aligned table, or as one labelled block per row when
/// the table would not fit in `max_width`. Cells are never truncated.
pub fn render_table_or_blocks(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    max_width: usize,
    block_label: &str,
) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = column_widths(columns, rows);
    let table_width =
        INDENT + widths.iter().sum::<usize>() + COLUMN_GAP * columns.len().saturating_sub(1);
    if table_width > max_width {
        return render_blocks(columns, rows, block_label);
    }

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    let mut output = vec![format_row(columns, &header, &widths)];
    output.extend(rows.iter().map(|row| format_row(columns, row, &widths)));
    output
}

fn column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .fold(column.name.chars().count(), cmp::max)
        })
        .collect()
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let pieces = columns
        .iter()
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(index, (column, width))| {
            let value = cells.get(index).map(String::as_str).unwrap_or("");
            match column.align {
                Align::Left => format!("{value:<width$}"),
                Align::Right => format!("{value:>width$}"),
            }
        })
        .collect::<Vec<String>>();

    format!("{}{}", " ".repeat(INDENT), pieces.join(&" ".repeat(COLUMN_GAP)))
        .trim_end()
        .to_string()
}

fn render_blocks(columns: &[Column<'_>], rows: &[Vec<String>], block_label: &str) -> Vec<String> {
    let mut output = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            output.push(String::new());
        }
        output.push(format!("  {block_label} {}:", row_index + 1));

        let entries = columns
            .iter()
            .enumerate()
            .map(|(column_index, column)| {
                (
                    column.name,
                    row.get(column_index).cloned().unwrap_or_default(),
                )
            })
            .collect::<Vec<(&str, String)>>();
        output.extend(key_value_rows(&entries, 4));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, key_value_rows, render_table_or_blocks};

    const COLUMNS: [Column<'static>; 2] = [
        Column {
            name: "Size",
            align: Align::Right,
        },
        Column {
            name: "Fee",
            align: Align::Left,
        },
    ];

    #[test]
    fn key_value_rows_align_labels() {
        let rows = key_value_rows(
            &[("Source:", "file".to_string()), ("Timezone:", "UTC".to_string())],
            2,
        );

        assert_eq!(rows[0], "  Source:    file");
        assert_eq!(rows[1], "  Timezone:  UTC");
    }

    #[test]
    fn table_aligns_columns_when_width_is_sufficient() {
        let rows = vec![
            vec!["123 bytes".to_string(), "10.12 sat/byte".to_string()],
            vec!["7 bytes".to_string(), "1.00 sat/byte".to_string()],
        ];

        let rendered = render_table_or_blocks(&COLUMNS, &rows, 80, "Transaction");
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0], "       Size  Fee");
        assert_eq!(rendered[1], "  123 bytes  10.12 sat/byte");
        assert_eq!(rendered[2], "    7 bytes  1.00 sat/byte");
    }

    #[test]
    fn narrow_width_falls_back_to_blocks() {
        let rows = vec![vec!["123 bytes".to_string(), "10.12 sat/byte".to_string()]];

        let rendered = render_table_or_blocks(&COLUMNS, &rows, 20, "Transaction");
        assert_eq!(rendered[0], "  Transaction 1:");
        assert_eq!(rendered[1], "    Size  123 bytes");
        assert_eq!(rendered[2], "    Fee   10.12 sat/byte");
    }
}
