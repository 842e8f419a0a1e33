//! CALS table model
//!
//! A reduced Exchange-CALS representation that can hold everything the two
//! built-in reStructuredText table notations express. Decoders build these
//! trees wholesale and encoders consume them; nothing here knows about text
//! layout.
//!
//! ```text
//! Table -> TGroup -> { THead?, TBody } -> Row -> Entry
//! ```

use indexmap::IndexMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::error::{ConversionError, ConversionResult};

// ============================================================================
// Optional CALS attributes
// ============================================================================

/// Names of the optional CALS attributes carried on entries, rows, colspecs
/// and tgroups. The codecs never interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalsAttr {
    ColName,
    ColNum,
    NameSt,
    NameEnd,
    MoreRows,
    ColSep,
    RowSep,
    Align,
    Char,
    CharOff,
    VAlign,
}

impl CalsAttr {
    /// The attribute name as spelled in CALS markup
    pub fn as_str(&self) -> &'static str {
        match self {
            CalsAttr::ColName => "colname",
            CalsAttr::ColNum => "colnum",
            CalsAttr::NameSt => "namest",
            CalsAttr::NameEnd => "nameend",
            CalsAttr::MoreRows => "morerows",
            CalsAttr::ColSep => "colsep",
            CalsAttr::RowSep => "rowsep",
            CalsAttr::Align => "align",
            CalsAttr::Char => "char",
            CalsAttr::CharOff => "charoff",
            CalsAttr::VAlign => "valign",
        }
    }
}

impl fmt::Display for CalsAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse, insertion-ordered set of optional CALS attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(IndexMap<CalsAttr, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attr: CalsAttr) -> Option<&str> {
        self.0.get(&attr).map(String::as_str)
    }

    /// Builder-style insert, replacing any previous value
    pub fn with(mut self, attr: CalsAttr, value: impl Into<String>) -> Self {
        self.0.insert(attr, value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Tree
// ============================================================================

/// The content of one table cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    /// Cell text; embedded `\n` separates rendered lines
    pub paracon: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Attributes::is_empty"))]
    pub attrs: Attributes,
}

impl Entry {
    pub fn new(paracon: impl Into<String>) -> Self {
        Self {
            paracon: paracon.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// The cell text split into its rendered lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.paracon.split('\n')
    }
}

/// One table row, one entry per column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    pub entries: Vec<Entry>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Attributes::is_empty"))]
    pub attrs: Attributes,
}

impl Row {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            attrs: Attributes::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::new(iter.into_iter().map(Entry::new).collect())
    }
}

/// Column specification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColSpec {
    /// Content width in characters, excluding the margin on either side
    pub colwidth: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Attributes::is_empty"))]
    pub attrs: Attributes,
}

impl ColSpec {
    pub fn new(colwidth: usize) -> Self {
        Self {
            colwidth,
            attrs: Attributes::new(),
        }
    }
}

/// The header rows of a tgroup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct THead {
    pub rows: Vec<Row>,
}

/// The body rows of a tgroup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TBody {
    pub rows: Vec<Row>,
}

/// One uninterrupted layout of (part of) a table, e.g. one page's worth
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TGroup {
    pub colspecs: Vec<ColSpec>,
    /// Absent, rather than empty, when the table has no header
    pub thead: Option<THead>,
    pub tbody: TBody,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Attributes::is_empty"))]
    pub attrs: Attributes,
}

impl TGroup {
    /// Create a body-only tgroup, checking every row against the column count
    pub fn new(colspecs: Vec<ColSpec>, rows: Vec<Row>) -> ConversionResult<Self> {
        check_shape(colspecs.len(), &rows)?;
        Ok(Self {
            colspecs,
            thead: None,
            tbody: TBody { rows },
            attrs: Attributes::new(),
        })
    }

    /// Attach header rows. An empty list leaves the head block absent.
    pub fn with_head(mut self, rows: Vec<Row>) -> ConversionResult<Self> {
        check_shape(self.cols(), &rows)?;
        self.thead = if rows.is_empty() {
            None
        } else {
            Some(THead { rows })
        };
        Ok(self)
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.colspecs.len()
    }

    pub fn widths(&self) -> Vec<usize> {
        self.colspecs.iter().map(|c| c.colwidth).collect()
    }

    pub fn head_rows(&self) -> &[Row] {
        self.thead.as_ref().map_or(&[], |h| h.rows.as_slice())
    }

    pub fn body_rows(&self) -> &[Row] {
        &self.tbody.rows
    }

    /// Header rows followed by body rows
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        self.head_rows().iter().chain(self.body_rows())
    }
}

fn check_shape(cols: usize, rows: &[Row]) -> ConversionResult<()> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(ConversionError::shape_mismatch(i, cols, row.len()));
        }
    }
    Ok(())
}

/// One logical table, possibly split over several tgroups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    pub pgwide: bool,
    pub tgroups: Vec<TGroup>,
}

impl Table {
    pub fn new(tgroups: Vec<TGroup>) -> Self {
        Self {
            pgwide: false,
            tgroups,
        }
    }

    /// A table needs at least one tgroup
    pub fn is_valid(&self) -> bool {
        !self.tgroups.is_empty()
    }

    /// The tgroup that gets rendered, or an error for an invalid table
    pub fn first_tgroup(&self) -> ConversionResult<&TGroup> {
        self.tgroups
            .first()
            .ok_or_else(|| ConversionError::invalid("table has no tgroup"))
    }
}

/// Shortcut to a one-tgroup table from plain widths and cell strings.
///
/// The first `header_rows` rows become the head block, the rest the body.
pub fn table_helper<R, S>(widths: &[usize], rows: R, header_rows: usize) -> ConversionResult<Table>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    let colspecs: Vec<ColSpec> = widths.iter().copied().map(ColSpec::new).collect();
    let mut rows: Vec<Row> = rows
        .into_iter()
        .map(|r| r.into_iter().collect())
        .collect();

    if header_rows > rows.len() {
        return Err(ConversionError::invalid(format!(
            "{} header rows requested but the table has only {} rows",
            header_rows,
            rows.len()
        )));
    }

    // Report mismatches with their index in the full row list
    check_shape(colspecs.len(), &rows)?;

    let body = rows.split_off(header_rows);
    let tgroup = TGroup::new(colspecs, body)?.with_head(rows)?;
    Ok(Table::new(vec![tgroup]))
}
