//! Conversion options and notation selection

use std::fmt;

use crate::data::constants::{GRID_CORNER, LIST_TABLE_DIRECTIVE};

/// The two reStructuredText table notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Box-drawn `+---+` tables
    Grid,
    /// `.. list-table::` directive with nested bullet lists
    ListTable,
}

impl Notation {
    pub fn name(&self) -> &'static str {
        match self {
            Notation::Grid => "grid",
            Notation::ListTable => "list-table",
        }
    }

    /// Detect the notation of a table from its first non-blank line
    pub fn detect(input: &str) -> Option<Notation> {
        let first = input.lines().map(str::trim).find(|l| !l.is_empty())?;
        if first.starts_with(GRID_CORNER) {
            Some(Notation::Grid)
        } else if first.starts_with(LIST_TABLE_DIRECTIVE) {
            Some(Notation::ListTable)
        } else {
            None
        }
    }

    /// The notation a conversion produces by default
    pub fn other(&self) -> Notation {
        match self {
            Notation::Grid => Notation::ListTable,
            Notation::ListTable => Notation::Grid,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for table conversion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Output notation; `None` converts to the other notation
    pub target: Option<Notation>,
    /// With no explicit target, write the input's own notation back
    pub keep_notation: bool,
    /// Widen grid columns to fit their longest cell line
    pub fit_widths: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_grid() -> Self {
        Self {
            target: Some(Notation::Grid),
            ..Default::default()
        }
    }

    pub fn to_list_table() -> Self {
        Self {
            target: Some(Notation::ListTable),
            ..Default::default()
        }
    }

    /// Re-render a table in the notation it was read in
    pub fn normalize() -> Self {
        Self {
            target: None,
            keep_notation: true,
            fit_widths: true,
        }
    }

    /// Builder: widen grid columns to fit their content
    pub fn with_fit_widths(mut self, fit: bool) -> Self {
        self.fit_widths = fit;
        self
    }

    /// The notation to write for input read as `source`
    pub fn target_for(&self, source: Notation) -> Notation {
        match self.target {
            Some(target) => target,
            None if self.keep_notation => source,
            None => source.other(),
        }
    }
}
