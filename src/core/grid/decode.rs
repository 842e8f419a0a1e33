//! Grid table text -> CALS table

use crate::core::cals::{table_helper, Table};
use crate::data::constants::{GRID_COLUMN_SEP, GRID_CORNER, GRID_HEADER_END, GRID_MARGIN};
use crate::utils::error::{ConversionError, ConversionResult};

/// Border lines start with a corner
pub(crate) fn is_border(line: &str) -> bool {
    line.starts_with(GRID_CORNER)
}

/// The `+===+` rule that closes the header rows
pub(crate) fn is_header_end(line: &str) -> bool {
    line.starts_with(GRID_HEADER_END)
}

/// Column content widths described by a border line.
///
/// Each `+`-delimited run of rule characters is one column; its content
/// width excludes the blank margin on either side.
pub fn border_widths(line: &str) -> ConversionResult<Vec<usize>> {
    if !is_border(line) {
        return Err(ConversionError::parse_line(
            "grid table must start with a border line",
            1,
        ));
    }

    let fragments: Vec<&str> = line.split(GRID_CORNER).collect();
    if fragments.len() < 3 {
        return Err(ConversionError::parse_line("border line has no columns", 1));
    }

    let mut column_start = 1;
    fragments[1..fragments.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            let len = fragment.chars().count();
            let column = column_start;
            column_start += len + 1;
            len.checked_sub(2 * GRID_MARGIN).ok_or_else(|| {
                ConversionError::parse_at(
                    format!("column {} is narrower than its margins", i + 1),
                    1,
                    column,
                )
            })
        })
        .collect()
}

/// The per-column fragments of a content line, outer empties discarded
pub(crate) fn split_content_line(line: &str) -> Vec<&str> {
    let fragments: Vec<&str> = line.split(GRID_COLUMN_SEP).collect();
    if fragments.len() < 2 {
        return Vec::new();
    }
    fragments[1..fragments.len() - 1].to_vec()
}

/// Drop exactly one margin character from each end, then trailing blanks
fn strip_margin(fragment: &str) -> &str {
    let mut chars = fragment.chars();
    chars.next();
    chars.next_back();
    chars.as_str().trim_end()
}

/// Read a complete grid table, top and bottom borders included.
///
/// Column widths come from the first line alone. Every border opens a new
/// row; the rows opened before a `+=` border form the head block.
/// Trailing whitespace after the bottom border is ignored.
///
/// # Errors
/// A missing top border, or a content line whose column count differs
/// from the first line's, is reported as a parse error.
pub fn from_grid(input: &str) -> ConversionResult<Table> {
    let lines: Vec<&str> = input.trim_end().lines().collect();
    let first = lines
        .first()
        .ok_or_else(|| ConversionError::parse("empty grid table"))?;

    let widths = border_widths(first)?;
    let (rows, header_rows) = scan_rows(&lines, widths.len())?;

    table_helper(&widths, rows, header_rows)
}

/// Accumulate cell text row by row. Returns the rows and the header count.
fn scan_rows(lines: &[&str], cols: usize) -> ConversionResult<(Vec<Vec<String>>, usize)> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut header_rows = 0;
    let mut first_line_of_row = true;

    // The final line is the closing border and opens nothing
    let scanned = &lines[..lines.len().saturating_sub(1)];

    for (idx, line) in scanned.iter().enumerate() {
        if is_border(line) {
            if is_header_end(line) {
                header_rows = rows.len();
            }
            rows.push(vec![String::new(); cols]);
            first_line_of_row = true;
            continue;
        }

        let fragments = split_content_line(line);
        if fragments.len() != cols {
            return Err(ConversionError::parse_line(
                format!(
                    "expected {} columns, found {}",
                    cols,
                    fragments.len()
                ),
                idx + 1,
            ));
        }

        let row = rows.last_mut().ok_or_else(|| {
            ConversionError::parse_line("content line before the first border", idx + 1)
        })?;

        for (cell, fragment) in row.iter_mut().zip(fragments) {
            if !first_line_of_row {
                cell.push('\n');
            }
            cell.push_str(strip_margin(fragment));
        }
        first_line_of_row = false;
    }

    // A header rule as the closing border: every row is a header row
    if lines.len() > 1 && lines.last().is_some_and(|l| is_header_end(l)) {
        header_rows = rows.len();
    }

    for cell in rows.iter_mut().flatten() {
        let trimmed = cell.trim_end().len();
        cell.truncate(trimmed);
    }

    Ok((rows, header_rows))
}
