//! Paged display of raw trip rows.
//!
//! Rows are printed in windows of [`PAGE_SIZE`], restricted to the schema's
//! display columns, as a right-aligned text table with a leading row-position
//! column.

use std::io::{BufRead, Write};
use std::ops::Range;

use bikeshare_core::error::Result;
use bikeshare_core::formatting::answer_is;
use bikeshare_core::models::TripTable;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::Console;

pub const PAGE_SIZE: usize = 5;

pub const FIRST_PAGE_PROMPT: &str = "\nDo you want to check the first 5 rows of the dataset related to the chosen city? Enter no/n to exit.\n";
pub const NEXT_PAGE_PROMPT: &str =
    "\nDo you want to check another 5 rows of the dataset? Enter no/n to exit.\n";

const STOP_ANSWERS: [&str; 2] = ["no", "n"];

/// Offer the table five rows at a time until the user answers `no`/`n` or
/// every row has been shown. Nothing is printed before the first answer.
pub fn show_dataset_part<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    let columns = table.schema.display_columns();
    let mut offset = 0;

    while offset < table.len() {
        let prompt = if offset == 0 {
            FIRST_PAGE_PROMPT
        } else {
            NEXT_PAGE_PROMPT
        };
        let answer = console.ask(prompt)?;
        if answer_is(&answer, &STOP_ANSWERS) {
            debug!("Pager stopped by user at row {}", offset);
            break;
        }

        let end = (offset + PAGE_SIZE).min(table.len());
        write_window(console.out(), table, &columns, offset..end)?;
        offset = end;
    }

    Ok(())
}

/// Print `rows` of `table` restricted to `columns`.
pub fn write_window<W: Write>(
    out: &mut W,
    table: &TripTable,
    columns: &[String],
    rows: Range<usize>,
) -> Result<()> {
    let labels: Vec<String> = rows.clone().map(|i| i.to_string()).collect();
    let cells: Vec<Vec<String>> = table.rows[rows]
        .iter()
        .map(|record| columns.iter().map(|c| record.cell(c)).collect())
        .collect();

    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(name.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut line = " ".repeat(label_width);
    for (name, width) in columns.iter().zip(&widths) {
        line.push_str("  ");
        line.push_str(&pad_left(name, *width));
    }
    writeln!(out, "{}", line)?;

    for (label, row) in labels.iter().zip(&cells) {
        let mut line = pad_left(label, label_width);
        for (cell, width) in row.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&pad_left(cell, *width));
        }
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Right-align `s` to `width` display columns.
fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
