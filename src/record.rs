//! Field access for record-like values
//!
//! Records are opaque to the core: all it needs is field lookup by name,
//! optional enumeration of field names (for column inference), and a scalar
//! rendering for records that end up in a leaf cell position.

use crate::types::CellValue;
use indexmap::IndexMap;
use serde_json::Value;

/// The result of looking up a field on a [`Record`]
pub enum Field<'a> {
    /// A scalar value, ready to become a cell
    Value(CellValue),
    /// A nested record, traversable by an association column spec
    Nested(&'a dyn Record),
}

/// Capability trait for anything the assembler can project into rows
pub trait Record {
    /// Look up a field by name
    ///
    /// Returns `None` when the field does not exist or the record has no
    /// fields at all.
    fn get(&self, name: &str) -> Option<Field<'_>>;

    /// Field names for column inference, if the record can enumerate them
    fn field_names(&self) -> Option<Vec<String>> {
        None
    }

    /// Scalar rendering used when a nested record lands in a leaf position
    fn to_cell(&self) -> CellValue {
        CellValue::Empty
    }
}

impl Record for Value {
    fn get(&self, name: &str) -> Option<Field<'_>> {
        let Value::Object(fields) = self else {
            return None;
        };
        fields.get(name).map(|value| match value {
            Value::Object(_) => Field::Nested(value),
            scalar => Field::Value(CellValue::from_json(scalar)),
        })
    }

    fn field_names(&self) -> Option<Vec<String>> {
        match self {
            Value::Object(fields) => Some(fields.keys().cloned().collect()),
            _ => None,
        }
    }

    fn to_cell(&self) -> CellValue {
        CellValue::from_json(self)
    }
}

/// Flat map-backed record for callers not using json values
impl Record for IndexMap<String, CellValue> {
    fn get(&self, name: &str) -> Option<Field<'_>> {
        IndexMap::get(self, name).map(|value| Field::Value(value.clone()))
    }

    fn field_names(&self) -> Option<Vec<String>> {
        Some(self.keys().cloned().collect())
    }
}
