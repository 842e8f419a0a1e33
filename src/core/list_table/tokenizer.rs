//! Bulleted list tokenizer
//!
//! Splits one level of an indentation-sensitive bullet list into items.
//! Nested content stays inside its item as plain lines, so the same
//! tokenizer can be applied again to an item's lines.

use crate::data::constants::LIST_ITEM_LEAD;
use crate::utils::error::{ConversionError, ConversionResult};

/// Items of one list level, each item being its lines with the lead removed
pub type ListItems = Vec<Vec<String>>;

/// The text-start column of a list, as derived from its first line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLead {
    /// Indentation, bullet, and separating whitespace
    pub bullet: String,
    /// Same width as `bullet`, with the bullet replaced by a space
    pub continuation: String,
}

impl ListLead {
    /// Derive the leads from the first line of a list
    pub fn from_line(line: &str) -> Option<Self> {
        let caps = LIST_ITEM_LEAD.captures(line)?;
        Some(ListLead {
            bullet: format!("{}{}{}", &caps[1], &caps[2], &caps[3]),
            continuation: format!("{} {}", &caps[1], &caps[3]),
        })
    }
}

/// Decode one level of a bulleted list.
///
/// A line starting with the bullet lead opens a new item; a line starting
/// with the continuation lead extends the current one. The first line that
/// is neither ends the scan: it and every line after it are ignored.
///
/// An empty input yields no items.
///
/// # Errors
/// Fails when the first line is not a bullet line.
pub fn get_list_items<S: AsRef<str>>(lines: &[S]) -> ConversionResult<ListItems> {
    let Some(first) = lines.first() else {
        return Ok(Vec::new());
    };

    let lead = ListLead::from_line(first.as_ref()).ok_or_else(|| {
        ConversionError::parse(format!(
            "{:?} is not the start of a bulleted list",
            first.as_ref()
        ))
    })?;

    let mut items = Vec::new();
    let mut item: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if let Some(text) = line.strip_prefix(lead.bullet.as_str()) {
            if !item.is_empty() {
                items.push(std::mem::take(&mut item));
            }
            item.push(text.to_string());
        } else if let Some(text) = line.strip_prefix(lead.continuation.as_str()) {
            item.push(text.to_string());
        } else {
            break;
        }
    }

    if !item.is_empty() {
        items.push(item);
    }

    Ok(items)
}
