//! CALS table -> list table text

use crate::core::cals::{Row, Table};
use crate::data::constants::{
    BULLET_INDENT, CELL_BULLET, HEADER_ROWS_OPTION, LIST_TABLE_DIRECTIVE, OPTION_INDENT,
    ROW_BULLET, ROW_LIST_INDENT, WIDTHS_OPTION,
};
use crate::utils::error::{ConversionOutput, ConversionResult, ConversionWarning};

/// Indent lines by `spaces`, optionally putting a list marker on the first.
///
/// The marker replaces the leading part of the first line's indentation;
/// every other line gets plain spaces.
pub fn to_list_element<S: AsRef<str>>(
    spaces: usize,
    lines: &[S],
    marker: Option<char>,
) -> Vec<String> {
    let indent = " ".repeat(spaces);
    let first_lead = match marker {
        Some(m) => format!("{:<width$}", m, width = spaces),
        None => indent.clone(),
    };

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { &first_lead } else { &indent };
            format!("{}{}", lead, line.as_ref())
        })
        .collect()
}

/// One row as a `*` item holding a `-` item per cell
fn row_to_list_item(row: &Row) -> Vec<String> {
    let cell_lines: Vec<String> = row
        .entries
        .iter()
        .flat_map(|entry| {
            let lines: Vec<&str> = entry.lines().collect();
            to_list_element(BULLET_INDENT, &lines, Some(CELL_BULLET))
        })
        .collect();
    to_list_element(BULLET_INDENT, &cell_lines, Some(ROW_BULLET))
}

/// Render a table as a `list-table` directive.
///
/// Header rows come first, then body rows; `:header-rows:` records how
/// many of them belong to the head block.
pub fn to_list_table(table: &Table) -> ConversionResult<String> {
    to_list_table_with_diagnostics(table).map(|out| out.content)
}

/// Render a table as a `list-table` directive, collecting warnings.
///
/// A row whose first cell starts with whitespace is reported: the cell
/// bullet's lead then absorbs that whitespace when the list is read back,
/// so the row's other cells no longer line up with it.
pub fn to_list_table_with_diagnostics(table: &Table) -> ConversionResult<ConversionOutput> {
    let tgroup = table.first_tgroup()?;
    let mut warnings = Vec::new();

    if table.tgroups.len() > 1 {
        warnings.push(ConversionWarning::new(format!(
            "table has {} tgroups; only the first is rendered",
            table.tgroups.len()
        )));
    }

    let option_indent = " ".repeat(OPTION_INDENT);
    let widths: Vec<String> = tgroup
        .colspecs
        .iter()
        .map(|spec| spec.colwidth.to_string())
        .collect();

    let mut lines = vec![
        LIST_TABLE_DIRECTIVE.to_string(),
        format!("{}{} {}", option_indent, WIDTHS_OPTION, widths.join(" ")),
        format!(
            "{}{} {}",
            option_indent,
            HEADER_ROWS_OPTION,
            tgroup.head_rows().len()
        ),
        // Blank line separates the options from the list
        String::new(),
    ];

    let mut row_lines: Vec<String> = Vec::new();
    for (row_index, row) in tgroup.all_rows().enumerate() {
        if let Some(warning) = leading_whitespace_warning(row, row_index) {
            warnings.push(warning.at_line(lines.len() + row_lines.len() + 1));
        }
        row_lines.extend(row_to_list_item(row));
    }
    lines.extend(to_list_element(ROW_LIST_INDENT, &row_lines, None));

    Ok(ConversionOutput::with_warnings(lines.join("\n"), warnings))
}

fn leading_whitespace_warning(row: &Row, row_index: usize) -> Option<ConversionWarning> {
    let first_line = row.entries.first()?.lines().next()?;
    if !first_line.starts_with(char::is_whitespace) {
        return None;
    }
    Some(
        ConversionWarning::new(format!(
            "row {}: first cell starts with whitespace; the list table will not read back",
            row_index + 1
        ))
        .with_suggestion("remove the leading whitespace or keep the table as a grid table"),
    )
}
