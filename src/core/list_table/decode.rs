//! List table text -> CALS table

use super::tokenizer::get_list_items;
use crate::core::cals::{table_helper, Table};
use crate::data::constants::{
    HEADER_ROWS_OPTION, LIST_BODY_START, LIST_TABLE_DIRECTIVE, WIDTHS_OPTION,
};
use crate::utils::error::{ConversionError, ConversionResult};

/// The value of a directive option line: everything after the second `:`
pub fn get_rest_parameter(line: &str) -> Option<&str> {
    line.splitn(3, ':').nth(2).map(str::trim)
}

/// Fetch and check the option on a fixed line of the directive
fn option_value<'a>(lines: &[&'a str], index: usize, name: &str) -> ConversionResult<&'a str> {
    let line = lines.get(index).copied().ok_or_else(|| {
        ConversionError::parse_line(format!("missing {} option", name), index + 1)
    })?;

    if !line.trim_start().starts_with(name) {
        return Err(ConversionError::parse_line(
            format!("expected {} option, found {:?}", name, line),
            index + 1,
        ));
    }

    get_rest_parameter(line)
        .ok_or_else(|| ConversionError::parse_line(format!("malformed {} option", name), index + 1))
}

/// Column widths are integers separated by spaces or commas
fn parse_widths(value: &str, line: usize) -> ConversionResult<Vec<usize>> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            w.parse::<usize>().map_err(|_| {
                ConversionError::parse_line(format!("invalid column width {:?}", w), line)
            })
        })
        .collect()
}

/// Read a `list-table` directive laid out as [`to_list_table`] writes it.
///
/// The directive must be on the first line, `:widths:` on the second,
/// `:header-rows:` on the third and a blank line on the fourth. Rows are
/// a `*` list below that, each row a `-` list of cells.
///
/// [`to_list_table`]: super::to_list_table
pub fn from_list_table(input: &str) -> ConversionResult<Table> {
    let mut lines: Vec<&str> = input.lines().collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let directive = lines
        .first()
        .ok_or_else(|| ConversionError::parse("empty list table"))?;
    if directive.trim() != LIST_TABLE_DIRECTIVE {
        return Err(ConversionError::parse_line(
            format!("expected {:?}, found {:?}", LIST_TABLE_DIRECTIVE, directive),
            1,
        ));
    }

    let widths = parse_widths(option_value(&lines, 1, WIDTHS_OPTION)?, 2)?;

    let header_value = option_value(&lines, 2, HEADER_ROWS_OPTION)?;
    let header_rows = header_value.parse::<usize>().map_err(|_| {
        ConversionError::parse_line(format!("invalid header row count {:?}", header_value), 3)
    })?;

    if let Some(separator) = lines.get(LIST_BODY_START - 1) {
        if !separator.trim().is_empty() {
            return Err(ConversionError::parse_line(
                "expected a blank line after the directive options",
                LIST_BODY_START,
            ));
        }
    }

    let body = lines.get(LIST_BODY_START..).unwrap_or(&[]);

    // One item per row, then one item per cell within each row
    let rows = get_list_items(body)?
        .iter()
        .map(|row| {
            get_list_items(row.as_slice()).map(|cells| {
                cells
                    .into_iter()
                    .map(|cell_lines| cell_lines.join("\n"))
                    .collect::<Vec<String>>()
            })
        })
        .collect::<ConversionResult<Vec<_>>>()?;

    table_helper(&widths, rows, header_rows)
}
