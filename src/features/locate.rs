//! Locating tables inside a larger text buffer
//!
//! Given a document and a line number, find the table that line belongs
//! to, convert it, and splice the result back in place. Indentation of
//! the table block is removed before conversion and restored after.

use crate::core::options::{ConvertOptions, Notation};
use crate::data::constants::{GRID_LINE, LIST_TABLE_DIRECTIVE};
use crate::utils::error::{ConversionError, ConversionOutput, ConversionResult};

/// Inclusive line range of one table within a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRange {
    /// First line (0-based)
    pub start: usize,
    /// Last line (0-based, inclusive)
    pub end: usize,
    pub notation: Notation,
    /// Common indentation of the block, in bytes
    pub indent: usize,
}

impl TableRange {
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Lines that belong to a grid table: `|` or `+` after optional indentation
pub fn is_grid_line(line: &str) -> bool {
    GRID_LINE.is_match(line)
}

fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Smallest indentation over the non-blank lines
fn common_indent(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| leading_whitespace(l))
        .min()
        .unwrap_or(0)
}

/// Strip the common indentation from a block of text.
///
/// Leading blank lines are dropped. Whitespace-only lines lose the same
/// indentation as every other line, so a list continuation line that
/// holds a blank cell line keeps its lead; only whitespace lines shorter
/// than the indentation become empty. Returns the dedented text and the
/// indentation removed.
pub fn dedent(text: &str) -> (String, usize) {
    let lines: Vec<&str> = text.lines().skip_while(|l| is_blank(l)).collect();
    let indent = common_indent(&lines);

    let body = lines
        .iter()
        .map(|line| match line.get(indent..) {
            Some(rest) => rest,
            None if is_blank(line) => "",
            None => line.trim_start(),
        })
        .collect::<Vec<_>>()
        .join("\n");

    (body, indent)
}

/// Prefix every non-empty line with `indent` spaces
pub fn indent_lines(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find the table that contains `line` (0-based).
///
/// A grid line extends outward to the contiguous run of grid lines around
/// it. Otherwise the nearest `.. list-table::` directive at or above the
/// line is taken, together with every following line that is blank or
/// indented deeper than the directive; trailing blank lines are not part
/// of the range.
pub fn find_table_range(text: &str, line: usize) -> Option<TableRange> {
    let lines: Vec<&str> = text.lines().collect();
    let current = *lines.get(line)?;

    if is_grid_line(current) {
        let start = (0..line)
            .rev()
            .take_while(|&i| is_grid_line(lines[i]))
            .last()
            .unwrap_or(line);
        let end = (line + 1..lines.len())
            .take_while(|&i| is_grid_line(lines[i]))
            .last()
            .unwrap_or(line);

        return Some(TableRange {
            start,
            end,
            notation: Notation::Grid,
            indent: common_indent(&lines[start..=end]),
        });
    }

    let start = (0..=line)
        .rev()
        .find(|&i| lines[i].trim() == LIST_TABLE_DIRECTIVE)?;
    let directive_indent = leading_whitespace(lines[start]);

    let mut end = start;
    for (i, l) in lines.iter().enumerate().skip(start + 1) {
        if is_blank(l) {
            continue;
        }
        if leading_whitespace(l) <= directive_indent {
            break;
        }
        end = i;
    }

    let range = TableRange {
        start,
        end,
        notation: Notation::ListTable,
        indent: directive_indent,
    };
    range.contains(line).then_some(range)
}

/// Convert the table containing `line` and splice the result into `text`.
///
/// Lines outside the table are kept verbatim, as is a trailing newline.
///
/// # Errors
/// Fails with [`ConversionError::InvalidInput`] when no table contains the
/// line, or with the decode/encode error of the table itself.
pub fn convert_table_at(
    text: &str,
    line: usize,
    options: &ConvertOptions,
) -> ConversionResult<ConversionOutput> {
    let range = find_table_range(text, line)
        .ok_or_else(|| ConversionError::invalid(format!("no table at line {}", line + 1)))?;

    let lines: Vec<&str> = text.lines().collect();
    let block = lines[range.start..=range.end].join("\n");
    let (table_text, indent) = dedent(&block);

    let converted = crate::convert_table(&table_text, options)?;
    let replacement = indent_lines(&converted.content, indent);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..range.start]);
    out.extend(replacement.lines());
    out.extend_from_slice(&lines[range.end + 1..]);

    let mut content = out.join("\n");
    if text.ends_with('\n') {
        content.push('\n');
    }

    Ok(ConversionOutput::with_warnings(content, converted.warnings))
}
