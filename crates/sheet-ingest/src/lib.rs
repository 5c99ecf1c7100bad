//! Spreadsheet ingestion for the Pulso feedback dashboard.
//!
//! Turns a spreadsheet share URL into typed [`FeedbackRecord`]s in three
//! steps:
//!
//! - [`csv_export_url`] - derive the CSV export endpoint from the share URL
//! - [`SheetClient`] - fetch the export over HTTP with a bounded timeout
//! - [`parse_records`] - defensive CSV parse plus fixed-column row mapping
//!
//! # Example
//!
//! ```rust
//! use sheet_ingest::parse_records;
//!
//! let csv = "\
//! h0,h1,h2,h3,h4,h5,h6,h7,h8,h9,h10,h11,h12,h13,h14,h15,h16
//! 5,4,3,\"Great, really\",9,,,x,x,x,x,x,x,x,x,x,01/03/2024";
//!
//! let records = parse_records(csv);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].nps, 9);
//! assert_eq!(records[0].why_us, "Great, really");
//! ```

mod client;
mod config;
mod csv;
mod error;
mod records;
mod url;

pub use client::SheetClient;
pub use config::{SheetConfig, SheetConfigBuilder, DEFAULT_TIMEOUT_SECS};
pub use csv::parse_csv;
pub use error::IngestError;
pub use records::{parse_records, records_from_rows};
pub use url::csv_export_url;

pub use feedback_core::FeedbackRecord;
