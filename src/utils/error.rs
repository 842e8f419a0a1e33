//! Error handling for table conversions
//!
//! This module provides a unified error type and result type for every
//! decode, encode and conversion operation.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Parse error - input is not a recognizable table or list
    ParseError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// A row does not have one entry per column
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid input (e.g. a table without any tgroup)
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::ParseError {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Parse error at line {}, column {}: {}", l, c, message)
                } else if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            ConversionError::ShapeMismatch {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch: row {} has {} entries, expected {}",
                    row, found, expected
                )
            }
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub message: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach the 1-based output line the warning refers to
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn parse(message: impl Into<String>) -> Self {
        ConversionError::ParseError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Parse error at a 1-based line number
    pub fn parse_line(message: impl Into<String>, line: usize) -> Self {
        ConversionError::ParseError {
            message: message.into(),
            line: Some(line),
            column: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        ConversionError::ParseError {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn shape_mismatch(row: usize, expected: usize, found: usize) -> Self {
        ConversionError::ShapeMismatch {
            row,
            expected,
            found,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ConversionError::parse("not a bulleted list");
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("not a bulleted list"));
    }

    #[test]
    fn test_parse_error_with_location() {
        let err = ConversionError::parse_at("unexpected character", 10, 5);
        let msg = err.to_string();
        assert!(msg.contains("line 10"));
        assert!(msg.contains("column 5"));

        let err = ConversionError::parse_line("ragged row", 3);
        assert_eq!(err.to_string(), "Parse error at line 3: ragged row");
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = ConversionError::shape_mismatch(2, 3, 1);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: row 2 has 1 entries, expected 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.rst");
        let err: ConversionError = io.into();
        assert!(matches!(err, ConversionError::IoError { .. }));
        assert!(err.to_string().contains("missing.rst"));
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::new("+--+".to_string());
        assert!(!output.has_warnings());

        let output_with_warn = ConversionOutput::with_warnings(
            "+--+".to_string(),
            vec![ConversionWarning::new("cell overflows column")
                .with_suggestion("use --fit-widths")],
        );
        assert!(output_with_warn.has_warnings());
        assert_eq!(
            output_with_warn.warnings[0].to_string(),
            "Warning: cell overflows column (use --fit-widths)"
        );

        let located = ConversionWarning::new("cell overflows column").at_line(4);
        assert_eq!(
            located.to_string(),
            "Warning at line 4: cell overflows column"
        );
    }
}
