//! Feature modules - conversions beyond a single table block
//!
//! - `locate`: find a table around a line of a larger document and
//!   convert it in place

pub mod locate;

pub use locate::{
    convert_table_at, dedent, find_table_range, indent_lines, is_grid_line, TableRange,
};
