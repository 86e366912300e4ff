//! Sheet assembly: the only component that touches the sink

use crate::column::{resolve, ColumnSpec};
use crate::error::Result;
use crate::options::SheetOptions;
use crate::project::project_into;
use crate::record::Record;
use crate::sink::SheetSink;
use crate::types::FormatBag;
use log::debug;

/// Builds one sheet from a record sequence
///
/// Resolution happens first, so configuration errors abort before any sink
/// command is issued. An empty resolved column list short-circuits into a
/// total no-op (no rows, no formats, no widths).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tablecast::{MemorySheet, SheetAssembler, SheetOptions};
///
/// let records = vec![json!({"name": "Peter", "age": 20})];
/// let options = SheetOptions::new();
/// let mut sheet = MemorySheet::new();
///
/// SheetAssembler::new(&mut sheet, &records, &options).assemble()?;
/// assert_eq!(sheet.row_strings(0), vec!["age", "name"]);
/// assert_eq!(sheet.row_strings(1), vec!["20", "Peter"]);
/// # Ok::<(), tablecast::SheetError>(())
/// ```
pub struct SheetAssembler<'a, S: SheetSink, R: Record> {
    sink: &'a mut S,
    records: &'a [R],
    options: &'a SheetOptions,
}

impl<'a, S: SheetSink, R: Record> SheetAssembler<'a, S, R> {
    /// Create an assembler borrowing the sink for the duration of the build
    pub fn new(sink: &'a mut S, records: &'a [R], options: &'a SheetOptions) -> Self {
        SheetAssembler {
            sink,
            records,
            options,
        }
    }

    /// Run the build: header row, data rows, column formats, column widths
    pub fn assemble(mut self) -> Result<()> {
        let resolved = resolve(
            self.options,
            self.records.first().map(|r| r as &dyn Record),
        )?;

        if resolved.columns.is_empty() {
            debug!("no columns resolved, sheet build is a no-op");
            return Ok(());
        }
        debug!(
            "assembling sheet: {} columns, {} records, headers included: {}",
            resolved.columns.len(),
            self.records.len(),
            resolved.include_headers
        );

        let mut row_index = 0;
        if resolved.include_headers {
            self.write_row(0, &resolved.headers, None, self.options.header_format());
            row_index = 1;
        }

        for record in self.records {
            self.write_row(
                row_index,
                &resolved.columns,
                Some(record as &dyn Record),
                self.options.cell_format(),
            );
            row_index += 1;
        }

        self.apply_column_formats(&resolved.columns);
        self.apply_column_widths(&resolved.columns);
        Ok(())
    }

    fn write_row(
        &mut self,
        row: u32,
        specs: &[ColumnSpec],
        record: Option<&dyn Record>,
        format: Option<&FormatBag>,
    ) {
        if let Some(format) = format {
            self.sink.set_row_format(row, format);
        }
        let mut values = Vec::with_capacity(specs.len());
        for spec in specs {
            project_into(spec, record, &mut values);
        }
        for value in values {
            self.sink.push_row_value(row, value);
        }
    }

    fn apply_column_formats(&mut self, columns: &[ColumnSpec]) {
        let flat = self.options.column_format().flatten();

        // wildcard first, so per-column entries overwrite it positionally
        if let Some(all) = flat.wildcard() {
            for col in 0..columns.len() {
                self.sink.set_column_format(col as u32, all);
            }
        }
        for (name, format) in flat.iter_named() {
            for col in positions_of(columns, name) {
                self.sink.set_column_format(col, format);
            }
        }
    }

    fn apply_column_widths(&mut self, columns: &[ColumnSpec]) {
        let flat = self.options.column_width().flatten();

        if let Some(all) = flat.wildcard() {
            for col in 0..columns.len() {
                self.sink.set_column_width(col as u32, *all);
            }
        }
        for (name, width) in flat.iter_named() {
            for col in positions_of(columns, name) {
                self.sink.set_column_width(col, *width);
            }
        }
    }
}

/// Every position whose atomic column identifier matches `name`
///
/// Duplicate identifiers all match; names resolving to no column are
/// skipped silently by the callers.
fn positions_of<'c>(columns: &'c [ColumnSpec], name: &'c str) -> impl Iterator<Item = u32> + 'c {
    columns
        .iter()
        .enumerate()
        .filter_map(move |(index, spec)| (spec.field_name() == Some(name)).then_some(index as u32))
}

/// Assemble one sheet from `records` into `sink` according to `options`
///
/// Convenience wrapper around [`SheetAssembler`].
pub fn assemble<S: SheetSink, R: Record>(
    sink: &mut S,
    records: &[R],
    options: &SheetOptions,
) -> Result<()> {
    SheetAssembler::new(sink, records, options).assemble()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_of_matches_every_duplicate() {
        let columns = vec![
            ColumnSpec::field("name"),
            ColumnSpec::field("age"),
            ColumnSpec::field("name"),
        ];
        let positions: Vec<_> = positions_of(&columns, "name").collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_positions_of_skips_non_atomic_specs() {
        let columns = vec![
            ColumnSpec::field("name"),
            ColumnSpec::Assoc(vec![(
                "company".to_string(),
                ColumnSpec::List(vec![ColumnSpec::field("name")]),
            )]),
        ];
        let positions: Vec<_> = positions_of(&columns, "name").collect();
        assert_eq!(positions, vec![0]);
    }
}
