//! The sheet sink boundary and an inspectable in-memory implementation

use crate::types::{CellValue, FormatBag};

/// The external surface a sheet build writes into
///
/// Implementations own all physical spreadsheet concerns (workbook,
/// worksheet, serialization). The assembler only issues these commands,
/// synchronously and in a deterministic order.
pub trait SheetSink {
    /// Set the default format for a row
    fn set_row_format(&mut self, row: u32, format: &FormatBag);

    /// Append a cell value to a row, in column order
    fn push_row_value(&mut self, row: u32, value: CellValue);

    /// Set the default format for a column
    fn set_column_format(&mut self, col: u32, format: &FormatBag);

    /// Set the width of a column
    fn set_column_width(&mut self, col: u32, width: f64);
}

/// One row of an in-memory sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRow {
    format: Option<FormatBag>,
    cells: Vec<CellValue>,
}

impl MemoryRow {
    /// The row's default format, if one was set
    pub fn format(&self) -> Option<&FormatBag> {
        self.format.as_ref()
    }

    /// The row's cells in column order
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Convert the row to a vector of strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells.iter().map(CellValue::as_string).collect()
    }
}

/// Format and width metadata for one in-memory column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryColumn {
    format: Option<FormatBag>,
    width: Option<f64>,
}

impl MemoryColumn {
    /// The column's default format, if one was set
    pub fn format(&self) -> Option<&FormatBag> {
        self.format.as_ref()
    }

    /// The column's width, if one was set
    pub fn width(&self) -> Option<f64> {
        self.width
    }
}

/// An in-memory sheet sink with an inspectable grid
///
/// Useful as a test double and for callers that post-process the assembled
/// grid themselves instead of writing a spreadsheet file. Rows and columns
/// grow on demand as commands address them.
///
/// # Examples
///
/// ```
/// use tablecast::{CellValue, MemorySheet, SheetSink};
///
/// let mut sheet = MemorySheet::new();
/// sheet.push_row_value(0, CellValue::String("name".to_string()));
/// sheet.push_row_value(0, CellValue::Int(20));
///
/// assert_eq!(sheet.row_strings(0), vec!["name", "20"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySheet {
    rows: Vec<MemoryRow>,
    columns: Vec<MemoryColumn>,
}

impl MemorySheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows addressed so far
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns addressed so far
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get a row by index
    pub fn row(&self, row: u32) -> Option<&MemoryRow> {
        self.rows.get(row as usize)
    }

    /// Get a cell value
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.row(row).and_then(|r| r.cells.get(col as usize))
    }

    /// Get a row's cells as strings (empty when the row does not exist)
    pub fn row_strings(&self, row: u32) -> Vec<String> {
        self.row(row).map(MemoryRow::to_strings).unwrap_or_default()
    }

    /// Get a column's default format
    pub fn column_format(&self, col: u32) -> Option<&FormatBag> {
        self.columns.get(col as usize).and_then(|c| c.format.as_ref())
    }

    /// Get a column's width
    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.columns.get(col as usize).and_then(|c| c.width)
    }

    fn row_mut(&mut self, row: u32) -> &mut MemoryRow {
        let index = row as usize;
        if self.rows.len() <= index {
            self.rows.resize_with(index + 1, MemoryRow::default);
        }
        &mut self.rows[index]
    }

    fn column_mut(&mut self, col: u32) -> &mut MemoryColumn {
        let index = col as usize;
        if self.columns.len() <= index {
            self.columns.resize_with(index + 1, MemoryColumn::default);
        }
        &mut self.columns[index]
    }
}

impl SheetSink for MemorySheet {
    fn set_row_format(&mut self, row: u32, format: &FormatBag) {
        self.row_mut(row).format = Some(format.clone());
    }

    fn push_row_value(&mut self, row: u32, value: CellValue) {
        self.row_mut(row).cells.push(value);
    }

    fn set_column_format(&mut self, col: u32, format: &FormatBag) {
        self.column_mut(col).format = Some(format.clone());
    }

    fn set_column_width(&mut self, col: u32, width: f64) {
        self.column_mut(col).width = Some(width);
    }
}
