//! List table codec
//!
//! Reads and writes the `list-table` directive:
//!
//! ```text
//! .. list-table::
//!    :widths: 4 5
//!    :header-rows: 1
//!
//!     * - Name
//!       - Value
//!     * - a
//!       - 1
//! ```
//!
//! # Architecture
//!
//! ```text
//! text -> options -> tokenizer(* rows) -> tokenizer(- cells) -> table_helper -> Table
//! Table -> options + nested bullets -> text
//! ```

mod decode;
mod encode;
pub mod tokenizer;


// Re-export public API
pub use decode::{from_list_table, get_rest_parameter};
pub use encode::{to_list_element, to_list_table, to_list_table_with_diagnostics};
pub use tokenizer::{get_list_items, ListItems, ListLead};
