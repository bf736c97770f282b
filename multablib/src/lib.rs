//! # multablib
//!
//! Builds and renders multiplication tables for console output, with the
//! interactive prompt-and-retry input loop that drives the `multab` CLI.
//!
//! ## Overview
//!
//! The library is split into three small layers:
//!
//! - **Input**: parse a table dimension from text, or run the interactive
//!   retry loop over any `BufRead`/`Write` pair ([`prompt_dimension`])
//! - **Data**: the computed [`Table`] — header indices and product rows,
//!   serializable for structured output
//! - **Rendering**: fixed-minimum-width text lines ([`render_lines`],
//!   [`write_table`]); fields pad with spaces on the left and never
//!   truncate, so oversized values widen their column instead of losing
//!   digits
//!
//! Any syntactically valid integer is accepted as a dimension, including
//! zero and negatives; those produce a degenerate table whose only output
//! line is the blank header prefix.
//!
//! ## Example
//!
//! ```rust
//! use multablib::{render_lines, RenderOptions, Table};
//!
//! let table = Table::new(3);
//! assert_eq!(table.rows[1].cells, vec![2, 4, 6]);
//!
//! let lines = render_lines(&table, &RenderOptions::default());
//! assert_eq!(lines[2], "  2         2         4         6");
//! ```

pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod table;

pub use error::MultabError;
pub use input::{parse_dimension, prompt_dimension, INVALID_INPUT_MSG, PROMPT};
pub use options::{RenderOptions, DEFAULT_CELL_WIDTH, DEFAULT_INDEX_WIDTH};
pub use render::{render_lines, right_justify, write_table};
pub use table::{Row, Table};

/// Result type for multablib operations
pub type Result<T> = std::result::Result<T, MultabError>;
