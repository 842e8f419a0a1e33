//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for table source text
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    check_grid, check_list_table, check_table, format_diagnostics, CheckResult, Diagnostic,
    DiagnosticLevel,
};
pub use error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};
