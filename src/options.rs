//! Sheet build options
//!
//! An immutable snapshot of everything the assembler consults: the column
//! list, header labels, row-level format bags, and per-column format/width
//! configuration. The assembler never mutates the snapshot, so one options
//! value can drive any number of builds.

use crate::config::RawConfig;
use crate::types::FormatBag;
use serde_json::Value;

/// Options controlling one sheet build
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tablecast::{FormatBag, RawConfig, SheetOptions};
///
/// let options = SheetOptions::new()
///     .with_columns(json!(["name", "age", "email"]))
///     .with_header_format(FormatBag::new().with("weight", "bold"))
///     .with_column_width(RawConfig::new().with("age", 4.0).with(["email", "name"], 20.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetOptions {
    columns: Option<Value>,
    headers: Option<Value>,
    cell_format: Option<FormatBag>,
    header_format: Option<FormatBag>,
    column_format: RawConfig<FormatBag>,
    column_width: RawConfig<f64>,
}

impl SheetOptions {
    /// Create the default options: columns inferred from the first record,
    /// headers included and equal to the columns, no formats or widths
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column list
    ///
    /// The value must be array-shaped (its elements are column specs:
    /// strings, objects, or nested arrays); anything else fails the build
    /// with `InvalidConfiguration`.
    pub fn with_columns(mut self, columns: impl Into<Value>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Set the header labels, or pass `false` to suppress the header row
    pub fn with_headers(mut self, headers: impl Into<Value>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    /// Set the default format applied to every data row
    pub fn with_cell_format(mut self, format: FormatBag) -> Self {
        self.cell_format = Some(format);
        self
    }

    /// Set the default format applied to the header row
    pub fn with_header_format(mut self, format: FormatBag) -> Self {
        self.header_format = Some(format);
        self
    }

    /// Set the per-column format configuration
    pub fn with_column_format(mut self, config: RawConfig<FormatBag>) -> Self {
        self.column_format = config;
        self
    }

    /// Set the per-column width configuration
    pub fn with_column_width(mut self, config: RawConfig<f64>) -> Self {
        self.column_width = config;
        self
    }

    /// The configured column list, if any
    pub fn columns(&self) -> Option<&Value> {
        self.columns.as_ref()
    }

    /// The configured header value, if any
    pub fn headers(&self) -> Option<&Value> {
        self.headers.as_ref()
    }

    /// The data-row format bag, if any
    pub fn cell_format(&self) -> Option<&FormatBag> {
        self.cell_format.as_ref()
    }

    /// The header-row format bag, if any
    pub fn header_format(&self) -> Option<&FormatBag> {
        self.header_format.as_ref()
    }

    /// The raw per-column format configuration
    pub fn column_format(&self) -> &RawConfig<FormatBag> {
        &self.column_format
    }

    /// The raw per-column width configuration
    pub fn column_width(&self) -> &RawConfig<f64> {
        &self.column_width
    }
}
