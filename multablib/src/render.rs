//! Text rendering for [`Table`](crate::table::Table).
//!
//! Every value is right-justified into a fixed minimum width. Widths are
//! floors, not caps: a value wider than its field is emitted in full and
//! later columns shift right. This matches the "pad, never truncate"
//! output policy.

use std::io::Write;

use crate::options::RenderOptions;
use crate::table::Table;
use crate::Result;

/// Right-justify `text` to at least `width` characters, padding with
/// spaces on the left. Text already at or past `width` is returned as is.
pub fn right_justify(text: &str, width: usize) -> String {
    format!("{:>width$}", text)
}

/// Render a table as display lines, without trailing newlines.
///
/// The first line is the header: `index_width` spaces followed by each
/// column index in a `cell_width` field. Each body row leads with its
/// index in an `index_width` field followed by the products. A degenerate
/// table (`dimension <= 0`) renders as the single blank-prefix header line.
pub fn render_lines(table: &Table, opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    let mut header = " ".repeat(opts.index_width);
    for value in &table.header {
        header.push_str(&right_justify(&value.to_string(), opts.cell_width));
    }
    lines.push(header);

    for row in &table.rows {
        let mut line = right_justify(&row.index.to_string(), opts.index_width);
        for cell in &row.cells {
            line.push_str(&right_justify(&cell.to_string(), opts.cell_width));
        }
        lines.push(line);
    }

    lines
}

/// Write the rendered table to `out`, one line per `\n`-terminated write.
pub fn write_table<W: Write>(out: &mut W, table: &Table, opts: &RenderOptions) -> Result<()> {
    for line in render_lines(table, opts) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
