//! Table-ready data for multiplication output.
//!
//! This module provides `Table`, a presentation-ready data structure that
//! can be directly consumed by a text renderer or serialized to JSON.
//!
//! The data flow is:
//! 1. Dimension (validated integer from the input layer)
//! 2. Table (computed products, structured)
//! 3. Rendered lines (formatted strings, see [`crate::render`])
//!
//! `Table` holds the numbers only; all spacing and justification happens in
//! the render layer.

use serde::{Deserialize, Serialize};

/// A single body row: its 1-based index and the products `index * j`
/// for `j` in `1..=dimension`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based row index
    pub index: i64,
    /// Products for this row, in column order
    pub cells: Vec<i64>,
}

/// A computed multiplication table.
///
/// For `dimension <= 0` both `header` and `rows` are empty; this is the
/// degenerate table, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// The requested dimension (may be zero or negative)
    pub dimension: i64,
    /// Column indices `1..=dimension`
    pub header: Vec<i64>,
    /// Body rows, one per index in `1..=dimension`
    pub rows: Vec<Row>,
}

impl Table {
    /// Compute the table for the given dimension.
    ///
    /// The ranges are empty when `dimension <= 0`, matching the observed
    /// behavior of accepting any integer and producing no columns or rows.
    pub fn new(dimension: i64) -> Self {
        let header: Vec<i64> = (1..=dimension).collect();
        let rows: Vec<Row> = (1..=dimension)
            .map(|index| Row {
                index,
                cells: (1..=dimension).map(|j| index * j).collect(),
            })
            .collect();

        Table {
            dimension,
            header,
            rows,
        }
    }
}
