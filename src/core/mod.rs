//! Core conversion modules
//!
//! This module contains the table model and the two codecs:
//! - `cals`: the intermediate CALS table tree
//! - `grid`: grid table encoder/decoder
//! - `list_table`: list table encoder/decoder and the bullet list tokenizer
//!
//! The codecs never call each other; every conversion goes through a
//! [`cals::Table`].

pub mod cals;
pub mod grid;
pub mod list_table;
pub mod options;

// Re-export main types and functions
pub use cals::{
    table_helper, Attributes, CalsAttr, ColSpec, Entry, Row, TBody, TGroup, THead, Table,
};
pub use grid::{from_grid, to_grid, to_grid_with_diagnostics};
pub use list_table::{
    from_list_table, get_list_items, to_list_table, to_list_table_with_diagnostics, ListItems,
};
pub use options::{ConvertOptions, Notation};
