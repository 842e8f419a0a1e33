//! Markup constants for the two reStructuredText table notations
//!
//! Everything that fixes the bit-exact text layout lives here:
//! - Grid border and separator characters
//! - List-table directive and option spellings
//! - Indentation and bullet characters of the nested list
//! - Line-recognition patterns

use lazy_static::lazy_static;
use regex::Regex;

// ============================================================================
// Grid tables
// ============================================================================

/// Corner / column junction on border lines
pub const GRID_CORNER: char = '+';
/// Body rule character
pub const GRID_RULE: char = '-';
/// Header-end rule character
pub const GRID_HEADER_RULE: char = '=';
/// Column separator on content lines
pub const GRID_COLUMN_SEP: char = '|';
/// Blank margin inside each `|...|` segment, on either side
pub const GRID_MARGIN: usize = 1;

/// Prefix identifying a header-end border
pub const GRID_HEADER_END: &str = "+=";

// ============================================================================
// List tables
// ============================================================================

pub const LIST_TABLE_DIRECTIVE: &str = ".. list-table::";
pub const WIDTHS_OPTION: &str = ":widths:";
pub const HEADER_ROWS_OPTION: &str = ":header-rows:";

/// Indentation of the directive's option lines
pub const OPTION_INDENT: usize = 3;
/// Indentation of the outer (row) list under the directive
pub const ROW_LIST_INDENT: usize = 4;
/// Width of a bullet plus its separating space
pub const BULLET_INDENT: usize = 2;

/// Bullet of the outer list, one item per row
pub const ROW_BULLET: char = '*';
/// Bullet of the inner lists, one item per cell
pub const CELL_BULLET: char = '-';

/// Index of the first list line: directive, two options, one blank line
pub const LIST_BODY_START: usize = 4;

lazy_static! {
    /// Leading whitespace, one bullet, and the whitespace before the item text
    pub static ref LIST_ITEM_LEAD: Regex =
        Regex::new(r"^(\s*)([-*])(\s+)").expect("valid list lead pattern");

    /// A line that can belong to a grid table
    pub static ref GRID_LINE: Regex = Regex::new(r"^\s*[|+]").expect("valid grid line pattern");
}
