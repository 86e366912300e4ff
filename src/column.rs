//! Column specifications and column/header resolution

use crate::error::{Result, SheetError};
use crate::options::SheetOptions;
use crate::record::Record;
use serde_json::Value;

/// Recursive description of how one logical column projects values
///
/// A spec is either an atomic field name, one level of sub-object traversal
/// (an "association"), or a horizontal concatenation of further specs. The
/// enum is closed: malformed shapes are rejected when dynamic values are
/// parsed, so projection can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSpec {
    /// An atomic field name
    Field(String),
    /// Traverse into sub-objects: each accessor's value becomes the record
    /// context for its sub-spec, in declaration order
    Assoc(Vec<(String, ColumnSpec)>),
    /// Concatenate several specs against the same record
    List(Vec<ColumnSpec>),
}

impl ColumnSpec {
    /// Shorthand for an atomic field spec
    pub fn field(name: impl Into<String>) -> Self {
        ColumnSpec::Field(name.into())
    }

    /// Parse a dynamic json value into a column spec
    ///
    /// Strings become fields, objects become associations, arrays become
    /// lists. Anything else fails with `InvalidColumnSpec`, naming the
    /// offending value and its shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => Ok(ColumnSpec::Field(name.clone())),
            Value::Object(fields) => {
                let mut pairs = Vec::with_capacity(fields.len());
                for (accessor, sub) in fields {
                    pairs.push((accessor.clone(), ColumnSpec::from_value(sub)?));
                }
                Ok(ColumnSpec::Assoc(pairs))
            }
            Value::Array(items) => Ok(ColumnSpec::List(
                items
                    .iter()
                    .map(ColumnSpec::from_value)
                    .collect::<Result<Vec<_>>>()?,
            )),
            other => Err(SheetError::InvalidColumnSpec {
                value: other.to_string(),
                shape: value_shape(other).to_string(),
            }),
        }
    }

    /// The field name, when this spec is atomic
    ///
    /// Format and width configuration keys only ever match atomic columns.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ColumnSpec::Field(name) => Some(name),
            _ => None,
        }
    }
}

fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The outcome of column/header resolution
#[derive(Debug)]
pub(crate) struct ResolvedColumns {
    pub columns: Vec<ColumnSpec>,
    pub headers: Vec<ColumnSpec>,
    pub include_headers: bool,
}

/// Resolve the effective column list and header labels
///
/// Columns come from the configuration when present (must be array-shaped),
/// otherwise from the first record's field names sorted lexicographically,
/// otherwise they are empty and the build becomes a no-op. Headers default
/// to the columns; the literal `false` suppresses the header row.
pub(crate) fn resolve(
    options: &SheetOptions,
    first_record: Option<&dyn Record>,
) -> Result<ResolvedColumns> {
    let columns = match options.columns() {
        Some(Value::Array(items)) => items
            .iter()
            .map(ColumnSpec::from_value)
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(SheetError::InvalidConfiguration(format!(
                "columns ({other}) must be an array"
            )))
        }
        None => inferred_columns(first_record),
    };

    let (headers, include_headers) = match options.headers() {
        None => (columns.clone(), true),
        Some(Value::Bool(false)) => (columns.clone(), false),
        Some(Value::Array(items)) => (
            items
                .iter()
                .map(ColumnSpec::from_value)
                .collect::<Result<Vec<_>>>()?,
            true,
        ),
        Some(other) => {
            return Err(SheetError::InvalidConfiguration(format!(
                "headers ({other}) must be an array or false"
            )))
        }
    };

    Ok(ResolvedColumns {
        columns,
        headers,
        include_headers,
    })
}

fn inferred_columns(first_record: Option<&dyn Record>) -> Vec<ColumnSpec> {
    let Some(mut names) = first_record.and_then(|record| record.field_names()) else {
        return Vec::new();
    };
    names.sort();
    names.into_iter().map(ColumnSpec::Field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_spec() {
        let spec = ColumnSpec::from_value(&json!("name")).unwrap();
        assert_eq!(spec, ColumnSpec::field("name"));
        assert_eq!(spec.field_name(), Some("name"));
    }

    #[test]
    fn test_parse_association_spec() {
        let spec = ColumnSpec::from_value(&json!({"company": ["name"]})).unwrap();
        assert_eq!(
            spec,
            ColumnSpec::Assoc(vec![(
                "company".to_string(),
                ColumnSpec::List(vec![ColumnSpec::field("name")]),
            )])
        );
        assert_eq!(spec.field_name(), None);
    }

    #[test]
    fn test_parse_rejects_scalar_shapes() {
        let err = ColumnSpec::from_value(&json!(42)).unwrap_err();
        match err {
            SheetError::InvalidColumnSpec { value, shape } => {
                assert_eq!(value, "42");
                assert_eq!(shape, "number");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(ColumnSpec::from_value(&json!(true)).is_err());
        assert!(ColumnSpec::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_resolve_infers_sorted_columns_from_first_record() {
        let records = vec![json!({"name": "Peter", "age": 20, "email": "peter@gmail.com"})];
        let resolved = resolve(
            &SheetOptions::new(),
            records.first().map(|r| r as &dyn Record),
        )
        .unwrap();

        assert_eq!(
            resolved.columns,
            vec![
                ColumnSpec::field("age"),
                ColumnSpec::field("email"),
                ColumnSpec::field("name"),
            ]
        );
        assert_eq!(resolved.headers, resolved.columns);
        assert!(resolved.include_headers);
    }

    #[test]
    fn test_resolve_empty_without_introspection() {
        let resolved = resolve(&SheetOptions::new(), None).unwrap();
        assert!(resolved.columns.is_empty());

        // records without enumerable fields resolve to no columns either
        let records = vec![json!(1), json!(2)];
        let resolved = resolve(
            &SheetOptions::new(),
            records.first().map(|r| r as &dyn Record),
        )
        .unwrap();
        assert!(resolved.columns.is_empty());
    }

    #[test]
    fn test_resolve_rejects_non_array_columns() {
        let options = SheetOptions::new().with_columns(json!("foo"));
        let err = resolve(&options, None).unwrap_err();
        assert!(matches!(err, SheetError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_resolve_rejects_non_array_headers() {
        let options = SheetOptions::new()
            .with_columns(json!(["name"]))
            .with_headers(json!(true));
        let err = resolve(&options, None).unwrap_err();
        assert!(matches!(err, SheetError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_resolve_headers_false_suppresses_but_keeps_columns() {
        let options = SheetOptions::new()
            .with_columns(json!(["name", "age"]))
            .with_headers(json!(false));
        let resolved = resolve(&options, None).unwrap();

        assert!(!resolved.include_headers);
        assert_eq!(resolved.columns.len(), 2);
    }

    #[test]
    fn test_resolve_explicit_headers() {
        let options = SheetOptions::new()
            .with_columns(json!(["name", {"company": ["name"]}]))
            .with_headers(json!(["name", "company_name"]));
        let resolved = resolve(&options, None).unwrap();

        assert_eq!(
            resolved.headers,
            vec![
                ColumnSpec::field("name"),
                ColumnSpec::field("company_name"),
            ]
        );
    }
}
