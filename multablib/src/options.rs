//! Rendering options for table output.
//!
//! This module contains the configuration type that controls how a
//! [`Table`](crate::table::Table) is laid out as text.

use serde::{Deserialize, Serialize};

/// Minimum column width for the row-index column.
pub const DEFAULT_INDEX_WIDTH: usize = 3;

/// Minimum column width for value cells (header indices and products).
pub const DEFAULT_CELL_WIDTH: usize = 10;

/// Field widths for table rendering.
///
/// Widths are minimums: a value wider than its field keeps its full decimal
/// representation and simply pushes later columns to the right. There is no
/// truncation at any width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Width of the leading row-index column
    pub index_width: usize,
    /// Width of each value cell
    pub cell_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            index_width: DEFAULT_INDEX_WIDTH,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl RenderOptions {
    /// Create options with the default widths (index 3, cells 10)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the row-index column width
    pub fn with_index_width(mut self, width: usize) -> Self {
        self.index_width = width;
        self
    }

    /// Builder: set the value cell width
    pub fn with_cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }
}
