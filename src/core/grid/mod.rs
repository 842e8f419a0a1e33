//! Grid table codec
//!
//! Reads and writes reStructuredText grid tables:
//!
//! ```text
//! +------+-------+
//! | Name | Value |
//! +======+=======+
//! | a    | 1     |
//! +------+-------+
//! ```
//!
//! # Architecture
//!
//! ```text
//! text -> border widths -> row buffers -> table_helper -> Table
//! Table -> plates + multi-line rows -> text
//! ```

mod decode;
mod encode;

#[cfg(test)]
mod tests;

// Re-export public API
pub use decode::{border_widths, from_grid};
pub use encode::{border_line, to_grid, to_grid_with_diagnostics, write_row_multiline};

pub(crate) use decode::{is_border, is_header_end, split_content_line};
