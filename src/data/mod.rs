//! Data layer - Static markup constants
//!
//! This module contains the fixed spellings and patterns of the
//! reStructuredText grid-table and list-table notations.

pub mod constants;

// Re-export commonly used items
pub use constants::{
    CELL_BULLET, GRID_HEADER_END, GRID_LINE, LIST_ITEM_LEAD, LIST_TABLE_DIRECTIVE, ROW_BULLET,
};
