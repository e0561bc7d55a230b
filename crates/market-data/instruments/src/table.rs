//! Fixed-width instrument table
//!
//! The whole table is rendered into a buffer before anything is written,
//! so a failed decode never leaves a partial table behind.

use crate::error::{TableError, TableResult};
use crate::record::{Cell, InstrumentRecord, decode_records};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, warn};

/// Column labels, in print order
pub const HEADER_LABELS: [&str; 3] = ["SYMBOL", "INST. TOKEN", "EXCH. TOKEN"];

/// Table geometry and placeholder text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Minimum width of the symbol column
    pub symbol_width: usize,
    /// Minimum width of the instrument token column
    pub token_width: usize,
    /// Length of the dashed line under the header
    pub rule_width: usize,
    /// Text between columns
    pub column_separator: &'static str,
    /// Text printed for a missing field
    pub absent_marker: &'static str,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            symbol_width: 20,
            token_width: 12,
            rule_width: 50,
            column_separator: " | ",
            absent_marker: "null",
        }
    }
}

/// Counts gathered while rendering a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Data rows printed
    pub rows: usize,
    /// Fields printed as the absent marker
    pub absent_fields: usize,
}

/// Rendered table text with its summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// Header, rule and data rows, each terminated by a newline
    pub text: String,
    /// Row and absent-field counts
    pub summary: TableSummary,
}

/// Formats instrument lists as a fixed-width table
#[derive(Debug, Clone, Default)]
pub struct InstrumentTable {
    layout: TableLayout,
}

impl InstrumentTable {
    /// Create a formatter with the given layout
    pub const fn new(layout: TableLayout) -> Self {
        Self { layout }
    }

    /// Header row, without a trailing newline
    pub fn header(&self) -> String {
        let [symbol, inst_token, exch_token] = HEADER_LABELS;
        self.line(symbol, inst_token, exch_token)
    }

    /// Dashed rule, without a trailing newline
    pub fn rule(&self) -> String {
        "-".repeat(self.layout.rule_width)
    }

    /// One data row, without a trailing newline
    pub fn row(&self, record: &InstrumentRecord) -> String {
        self.line(
            self.cell(record.symbol.as_ref()),
            self.cell(record.instrument_token.as_ref()),
            self.cell(record.exchange_token.as_ref()),
        )
    }

    fn cell<'a>(&'a self, value: Option<&'a Value>) -> Cell<'a> {
        Cell::new(value, self.layout.absent_marker)
    }

    fn line(
        &self,
        symbol: impl std::fmt::Display,
        inst_token: impl std::fmt::Display,
        exch_token: impl std::fmt::Display,
    ) -> String {
        let sep = self.layout.column_separator;
        format!(
            "{symbol:<sw$}{sep}{inst_token:<tw$}{sep}{exch_token}",
            sw = self.layout.symbol_width,
            tw = self.layout.token_width,
        )
    }

    /// Render already decoded records
    pub fn render(&self, records: &[InstrumentRecord]) -> RenderedTable {
        let mut text = String::new();
        let mut summary = TableSummary::default();

        push_line(&mut text, &self.header());
        push_line(&mut text, &self.rule());

        for record in records {
            push_line(&mut text, &self.row(record));
            summary.rows += 1;
            summary.absent_fields += record.absent_fields();
        }

        RenderedTable { text, summary }
    }

    /// Decode a JSON instrument list and render it
    pub fn format(&self, input: &str) -> TableResult<RenderedTable> {
        let records = decode_records(input)?;
        Ok(self.render(&records))
    }

    /// Decode, render and write the table to `out`
    ///
    /// On failure the diagnostic line is written to `out` in place of the
    /// table, and the error is returned as well.
    pub fn run<W: Write>(&self, input: &str, out: &mut W) -> TableResult<TableSummary> {
        let table = match self.format(input) {
            Ok(table) => table,
            Err(err) => {
                warn!("Instrument table rendering failed: {}", err);
                if let Err(write_err) = writeln!(out, "{err}").and_then(|()| out.flush()) {
                    warn!("Failed to write diagnostic: {}", write_err);
                }
                return Err(err);
            }
        };

        if let Err(write_err) = out.write_all(table.text.as_bytes()).and_then(|()| out.flush()) {
            let err = TableError::from(write_err);
            warn!("Instrument table write failed: {}", err);
            return Err(err);
        }

        debug!(
            rows = table.summary.rows,
            absent_fields = table.summary.absent_fields,
            "Rendered instrument table"
        );
        Ok(table.summary)
    }
}

fn push_line(text: &mut String, line: &str) {
    text.push_str(line);
    text.push('\n');
}
