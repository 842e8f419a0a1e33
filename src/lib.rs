//! # restables
//!
//! Bidirectional converter between reStructuredText grid tables and list
//! tables, written in Rust.
//!
//! ## Features
//!
//! - **Two notations**: `+---+` grid tables and `.. list-table::` directives
//! - **Shared model**: every conversion goes through a reduced CALS table tree
//! - **Multi-line cells**: cell lines survive both notations unchanged
//! - **Header rows**: the `+===+` rule and `:header-rows:` map onto one head block
//! - **Diagnostics**: lint grid tables for misaligned or ragged lines
//! - **In-place editing**: locate a table around a line of a document and replace it
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Grid table to list table
//!
//! ```rust
//! use restables::grid_to_list_table;
//!
//! let grid = "\
//! +----+-------+
//! | Yo | There |
//! +----+-------+";
//!
//! let list = grid_to_list_table(grid).unwrap();
//! assert!(list.starts_with(".. list-table::"));
//! assert!(list.contains(":widths: 2 5"));
//! ```
//!
//! ### Automatic direction
//!
//! ```rust
//! use restables::{convert_auto, Notation};
//!
//! let list = ".. list-table::\n   :widths: 2\n   :header-rows: 0\n\n    * - Yo";
//! let (grid, notation) = convert_auto(list).unwrap();
//! assert_eq!(notation, Notation::Grid);
//! assert_eq!(grid, "+----+\n| Yo |\n+----+");
//! ```
//!
//! ### Building a table directly
//!
//! ```rust
//! use restables::{table_helper, to_grid};
//!
//! let table = table_helper(&[4, 3], vec![vec!["Name", "Qty"], vec!["nut", "4"]], 1).unwrap();
//! let grid = to_grid(&table).unwrap();
//! assert!(grid.contains("+======+=====+"));
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - notation constants
pub mod data;

/// Feature modules - document-level operations
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use core::cals::{
    table_helper, Attributes, CalsAttr, ColSpec, Entry, Row, TBody, TGroup, THead, Table,
};
pub use core::grid::{from_grid, to_grid, to_grid_with_diagnostics};
pub use core::list_table::{
    from_list_table, get_list_items, to_list_table, to_list_table_with_diagnostics, ListItems,
};
pub use core::options::{ConvertOptions, Notation};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::locate;
pub use features::locate::{convert_table_at, find_table_range, TableRange};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};

/// Detect the notation of a table block
///
/// Returns `None` unless the first non-blank line starts a grid table or
/// a list table.
pub fn detect_notation(input: &str) -> Option<Notation> {
    Notation::detect(input)
}

/// Decode a table block in whichever notation it is written in
///
/// The block may be indented and may carry leading or trailing blank
/// lines.
pub fn decode_table(input: &str) -> ConversionResult<(Table, Notation)> {
    let (text, _) = locate::dedent(input);
    let notation = detect_notation(&text).ok_or_else(|| {
        ConversionError::invalid("input is neither a grid table nor a list table")
    })?;

    let table = match notation {
        Notation::Grid => from_grid(&text)?,
        Notation::ListTable => from_list_table(&text)?,
    };
    Ok((table, notation))
}

/// Encode a table in the given notation
pub fn encode_table(
    table: &Table,
    notation: Notation,
    options: &ConvertOptions,
) -> ConversionResult<ConversionOutput> {
    match notation {
        Notation::Grid => to_grid_with_diagnostics(table, options),
        Notation::ListTable => to_list_table_with_diagnostics(table),
    }
}

/// Convert a table block according to `options`
///
/// By default the output is in the other notation; see
/// [`ConvertOptions::target_for`].
pub fn convert_table(input: &str, options: &ConvertOptions) -> ConversionResult<ConversionOutput> {
    let (table, source) = decode_table(input)?;
    encode_table(&table, options.target_for(source), options)
}

/// Convert with automatic direction detection
///
/// Grid tables become list tables and list tables become grid tables.
/// Returns the output together with its notation.
pub fn convert_auto(input: &str) -> ConversionResult<(String, Notation)> {
    let (table, source) = decode_table(input)?;
    let target = source.other();
    let output = encode_table(&table, target, &ConvertOptions::default())?;
    Ok((output.content, target))
}

/// Convert a grid table to a list table
pub fn grid_to_list_table(input: &str) -> ConversionResult<String> {
    to_list_table(&from_grid(input)?)
}

/// Convert a list table to a grid table
pub fn list_table_to_grid(input: &str) -> ConversionResult<String> {
    to_grid(&from_list_table(input)?)
}
