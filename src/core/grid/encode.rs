//! CALS table -> grid table text

use crate::core::cals::{Row, TGroup, Table};
use crate::core::options::ConvertOptions;
use crate::data::constants::{GRID_CORNER, GRID_HEADER_RULE, GRID_MARGIN, GRID_RULE};
use crate::utils::error::{ConversionOutput, ConversionResult, ConversionWarning};

/// Render a table as a grid table.
///
/// Only the first tgroup is rendered. Column widths are taken from the
/// colspecs as they are.
pub fn to_grid(table: &Table) -> ConversionResult<String> {
    to_grid_with_diagnostics(table, &ConvertOptions::default()).map(|out| out.content)
}

/// Render a table as a grid table, collecting warnings.
///
/// With `fit_widths` set, each column is widened to its longest cell line;
/// otherwise every overflowing cell is reported as a warning.
pub fn to_grid_with_diagnostics(
    table: &Table,
    options: &ConvertOptions,
) -> ConversionResult<ConversionOutput> {
    let tgroup = table.first_tgroup()?;
    let mut warnings = Vec::new();

    if table.tgroups.len() > 1 {
        warnings.push(ConversionWarning::new(format!(
            "table has {} tgroups; only the first is rendered",
            table.tgroups.len()
        )));
    }

    let widths = if options.fit_widths {
        fitted_widths(tgroup)
    } else {
        tgroup.widths()
    };

    // Prefab the rules, which are re-used for every row
    let plate = border_line(&widths, GRID_RULE);
    let header_separator = border_line(&widths, GRID_HEADER_RULE);

    let mut lines = Vec::new();
    // First output line of each row, head rows first
    let mut row_starts = Vec::new();

    match &tgroup.thead {
        Some(head) => {
            for row in &head.rows {
                lines.push(plate.clone());
                row_starts.push(lines.len() + 1);
                write_row_multiline(&widths, row, &mut lines);
            }
            // Double rule marks the end of the header
            lines.push(header_separator);
        }
        None => lines.push(plate.clone()),
    }

    // Every body row gets its own closing rule
    for row in tgroup.body_rows() {
        row_starts.push(lines.len() + 1);
        write_row_multiline(&widths, row, &mut lines);
        lines.push(plate.clone());
    }

    if !options.fit_widths {
        warnings.extend(overflow_warnings(tgroup, &row_starts));
    }

    Ok(ConversionOutput::with_warnings(lines.join("\n"), warnings))
}

/// `+` then `width + 2` rule characters per column, joined and closed by `+`
pub fn border_line(widths: &[usize], rule: char) -> String {
    let columns: Vec<String> = widths
        .iter()
        .map(|w| rule.to_string().repeat(w + 2 * GRID_MARGIN))
        .collect();
    format!(
        "{corner}{}{corner}",
        columns.join(&GRID_CORNER.to_string()),
        corner = GRID_CORNER
    )
}

/// Render one logical row as as many text lines as its tallest cell.
///
/// Shorter cells are padded with blank lines; every cell line is padded
/// to its column width.
pub fn write_row_multiline(widths: &[usize], row: &Row, out: &mut Vec<String>) {
    let cell_lines: Vec<Vec<&str>> = row.entries.iter().map(|e| e.lines().collect()).collect();
    let extent = cell_lines.iter().map(Vec::len).max().unwrap_or(0);

    for line_index in 0..extent {
        let inner: Vec<String> = cell_lines
            .iter()
            .zip(widths)
            .map(|(lines, &width)| {
                let text = lines.get(line_index).copied().unwrap_or("");
                format!("{:<width$}", text, width = width)
            })
            .collect();
        out.push(format!("| {} |", inner.join(" | ")));
    }
}

/// Longest line per column, never narrower than the colspec
fn fitted_widths(tgroup: &TGroup) -> Vec<usize> {
    let mut widths = tgroup.widths();
    for row in tgroup.all_rows() {
        for (width, entry) in widths.iter_mut().zip(&row.entries) {
            let longest = entry.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            *width = (*width).max(longest);
        }
    }
    widths
}

fn overflow_warnings(tgroup: &TGroup, row_starts: &[usize]) -> Vec<ConversionWarning> {
    let mut warnings = Vec::new();
    for (row_index, row) in tgroup.all_rows().enumerate() {
        for (col_index, (spec, entry)) in tgroup.colspecs.iter().zip(&row.entries).enumerate() {
            let longest = entry.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            if longest > spec.colwidth {
                warnings.push(
                    ConversionWarning::new(format!(
                        "row {}, column {}: content is {} characters wide but the column holds {}",
                        row_index + 1,
                        col_index + 1,
                        longest,
                        spec.colwidth
                    ))
                    .with_suggestion("widen the column or enable fit_widths")
                    .at_line(row_starts[row_index]),
                );
            }
        }
    }
    warnings
}
