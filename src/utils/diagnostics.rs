//! Table diagnostics
//!
//! Lints table text without converting it. For grid tables it reports:
//!
//! - A missing top or bottom border
//! - Border lines that differ from the top border
//! - Content lines with the wrong number of columns
//! - Column separators that do not line up with the top border
//! - More than one header separator
//!
//! List tables are checked by decoding them.
//!
//! ## Example
//!
//! ```rust
//! use restables::diagnostics::check_grid;
//!
//! let result = check_grid("+---+\n| a | b |\n+---+");
//! assert!(result.has_errors());
//! ```

use std::fmt;

use crate::core::grid::{border_widths, is_border, is_header_end, split_content_line};
use crate::core::list_table::from_list_table;
use crate::core::options::Notation;
use crate::data::constants::{GRID_COLUMN_SEP, GRID_CORNER, GRID_HEADER_RULE, GRID_RULE};
use crate::features::locate::dedent;
use crate::utils::error::ConversionError;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the table converts, but maybe not as intended
    Warning,
    /// Error - the table will not convert
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed)
    pub column: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add location information
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&ConversionError> for Diagnostic {
    fn from(err: &ConversionError) -> Self {
        let message = match err {
            ConversionError::ParseError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        let mut diag = Diagnostic::new(DiagnosticLevel::Error, message);
        if let ConversionError::ParseError {
            line: Some(line),
            column,
            ..
        } = err
        {
            diag = diag.with_location(*line, column.unwrap_or(1));
        }
        diag
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         --> line:column
        //         |
        //         | source text
        //         = help: suggestion

        write!(f, "{}: {}", self.level, self.message)?;

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  --> line {}:{}", line, col)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check a table in either notation.
///
/// The block is dedented first; line numbers count from its first
/// non-blank line.
pub fn check_table(input: &str) -> CheckResult {
    let (text, _) = dedent(input);
    match Notation::detect(&text) {
        Some(Notation::Grid) => check_grid(&text),
        Some(Notation::ListTable) => check_list_table(&text),
        None => {
            let mut result = CheckResult::new();
            result.add(
                Diagnostic::new(DiagnosticLevel::Error, "no grid table or list table found")
                    .with_suggestion(
                        "a grid table starts with '+', a list table with '.. list-table::'",
                    ),
            );
            result
        }
    }
}

/// Check a list table by decoding it
pub fn check_list_table(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    if let Err(err) = from_list_table(input) {
        result.add(Diagnostic::from(&err));
    }
    result
}

/// Check grid table source for issues
pub fn check_grid(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let lines: Vec<&str> = input.trim_end().lines().collect();

    let Some(first) = lines.first() else {
        result.add(Diagnostic::new(DiagnosticLevel::Error, "empty input"));
        return result;
    };

    let widths = match border_widths(first) {
        Ok(widths) => widths,
        Err(err) => {
            result.add(Diagnostic::from(&err).with_source(*first));
            return result;
        }
    };

    let top = normalize_border(first);
    let junctions = char_positions(first, GRID_CORNER);
    let mut header_ends = 0;

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let line_no = idx + 1;

        if is_border(line) {
            if is_header_end(line) {
                header_ends += 1;
                if header_ends == 2 {
                    result.add(
                        Diagnostic::new(
                            DiagnosticLevel::Warning,
                            "more than one header separator",
                        )
                        .with_location(line_no, 1)
                        .with_source(*line)
                        .with_suggestion("only the last '+=' border ends the header"),
                    );
                }
            }
            if normalize_border(line) != top {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        "border does not match the top border",
                    )
                    .with_location(line_no, 1)
                    .with_source(*line)
                    .with_suggestion("column widths are taken from the top border only"),
                );
            }
            continue;
        }

        let found = split_content_line(line).len();
        if found != widths.len() {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!("expected {} columns, found {}", widths.len(), found),
                )
                .with_location(line_no, 1)
                .with_source(*line),
            );
            continue;
        }

        let separators = char_positions(line, GRID_COLUMN_SEP);
        if let Some(column) = first_misalignment(&junctions, &separators) {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    "column separator is not aligned with the top border",
                )
                .with_location(line_no, column)
                .with_source(*line),
            );
        }
    }

    if lines.len() > 1 && lines.last().is_some_and(|l| !is_border(l)) {
        result.add(
            Diagnostic::new(DiagnosticLevel::Error, "table is not closed by a border line")
                .with_location(lines.len(), 1)
                .with_suggestion("add a '+---+' line after the last row"),
        );
    }

    result
}

/// Border with header rules read as body rules
fn normalize_border(line: &str) -> String {
    line.trim_end()
        .chars()
        .map(|c| if c == GRID_HEADER_RULE { GRID_RULE } else { c })
        .collect()
}

/// 1-based character columns at which `needle` occurs
fn char_positions(line: &str, needle: char) -> Vec<usize> {
    line.chars()
        .enumerate()
        .filter(|(_, c)| *c == needle)
        .map(|(i, _)| i + 1)
        .collect()
}

fn first_misalignment(expected: &[usize], found: &[usize]) -> Option<usize> {
    expected
        .iter()
        .zip(found)
        .find(|(e, f)| e != f)
        .map(|(_, f)| *f)
}

/// Format check result for display
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
