//! # tablecast
//!
//! Turn an ordered collection of record-like values into a tabular sheet:
//! a header row, one data row per record, and per-column format/width
//! metadata, all issued as commands against a pluggable [`SheetSink`].
//!
//! ## Features
//!
//! - **Column inference**: with no configuration, columns come from the
//!   first record's field names, sorted lexicographically
//! - **Nested projection**: column specs reach into associated sub-records
//!   (e.g. pull `name` out of a related `company` object)
//! - **Grouped configuration**: format and width maps accept single column
//!   keys, key groups, and an `all` wildcard merged as a low-priority
//!   default
//! - **Pluggable output**: the core performs no I/O; any spreadsheet
//!   backend implements four sink commands, and [`MemorySheet`] is provided
//!   for tests and in-process consumers
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use tablecast::{assemble, MemorySheet, SheetOptions};
//!
//! # fn main() -> Result<(), tablecast::SheetError> {
//! let records = vec![
//!     json!({"name": "Peter", "age": 20, "email": "peter@gmail.com"}),
//!     json!({"name": "John", "age": 25, "email": "john@gmail.com"}),
//! ];
//!
//! let mut sheet = MemorySheet::new();
//! assemble(&mut sheet, &records, &SheetOptions::new())?;
//!
//! assert_eq!(sheet.row_strings(0), vec!["age", "email", "name"]);
//! assert_eq!(sheet.row_strings(1), vec!["20", "peter@gmail.com", "Peter"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Formats and widths
//!
//! ```
//! use serde_json::json;
//! use tablecast::{assemble, FormatBag, MemorySheet, RawConfig, SheetOptions};
//!
//! # fn main() -> Result<(), tablecast::SheetError> {
//! let records = vec![json!({"name": "Peter", "age": 20, "email": "peter@gmail.com"})];
//!
//! let options = SheetOptions::new()
//!     .with_columns(json!(["name", "age", "email"]))
//!     .with_header_format(FormatBag::new().with("weight", "bold"))
//!     .with_column_width(RawConfig::new().with("age", 4.0).with(["email", "name"], 20.0));
//!
//! let mut sheet = MemorySheet::new();
//! assemble(&mut sheet, &records, &options)?;
//!
//! assert_eq!(sheet.column_width(0), Some(20.0));
//! assert_eq!(sheet.column_width(1), Some(4.0));
//! assert_eq!(sheet.column_width(2), Some(20.0));
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod column;
pub mod config;
pub mod error;
pub mod options;
pub mod project;
pub mod record;
pub mod sink;
pub mod types;

pub use assembler::{assemble, SheetAssembler};
pub use column::ColumnSpec;
pub use config::{ConfigKey, FlatConfig, MergeValue, RawConfig, WILDCARD};
pub use error::{Result, SheetError};
pub use options::SheetOptions;
pub use project::{project, project_into};
pub use record::{Field, Record};
pub use sink::{MemoryColumn, MemoryRow, MemorySheet, SheetSink};
pub use types::{CellValue, FormatBag};
