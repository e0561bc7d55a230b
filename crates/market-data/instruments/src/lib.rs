//! Instrument list decoding and fixed-width table rendering
//!
//! Reads a JSON array of instrument records (symbol, instrument token,
//! exchange token) and prints it as an aligned text table:
//!
//! ```text
//! SYMBOL               | INST. TOKEN  | EXCH. TOKEN
//! --------------------------------------------------
//! NIFTY2610625300CE    | 10350338     | 40431
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(dead_code)]
#![deny(unused)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod sample;
pub mod table;

pub use error::{TableError, TableResult};
pub use record::{InstrumentRecord, decode_records};
pub use sample::SAMPLE_INSTRUMENTS_JSON;
pub use table::{InstrumentTable, RenderedTable, TableLayout, TableSummary};
