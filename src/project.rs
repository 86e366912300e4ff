//! Row projection: walking a column spec over one record
//!
//! Projection with no record emits the field identifiers themselves, which
//! is exactly how the header row is produced from the resolved header specs.

use crate::column::ColumnSpec;
use crate::record::{Field, Record};
use crate::types::CellValue;

/// Project one column spec over a record, returning the leaf values
pub fn project(spec: &ColumnSpec, record: Option<&dyn Record>) -> Vec<CellValue> {
    let mut out = Vec::new();
    project_into(spec, record, &mut out);
    out
}

/// Project one column spec over a record, appending leaf values to `out`
pub fn project_into(spec: &ColumnSpec, record: Option<&dyn Record>, out: &mut Vec<CellValue>) {
    match spec {
        ColumnSpec::Field(name) => out.push(leaf_value(name, record)),
        ColumnSpec::Assoc(pairs) => {
            for (accessor, sub) in pairs {
                // Only a nested record can serve as the new context; a
                // scalar or missing association leaves the context absent,
                // so the sub-spec's leaves emit their own identifiers.
                let context = record.and_then(|r| match r.get(accessor) {
                    Some(Field::Nested(nested)) => Some(nested),
                    _ => None,
                });
                project_into(sub, context, out);
            }
        }
        ColumnSpec::List(items) => {
            for item in items {
                project_into(item, record, out);
            }
        }
    }
}

fn leaf_value(name: &str, record: Option<&dyn Record>) -> CellValue {
    match record {
        None => CellValue::String(name.to_string()),
        Some(record) => match record.get(name) {
            Some(Field::Value(value)) => value,
            Some(Field::Nested(nested)) => nested.to_cell(),
            None => CellValue::Empty,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(value: serde_json::Value) -> ColumnSpec {
        ColumnSpec::from_value(&value).unwrap()
    }

    #[test]
    fn test_project_without_record_emits_identifiers() {
        let headers = spec(json!(["name", "email", "age"]));
        assert_eq!(
            project(&headers, None),
            vec![
                CellValue::String("name".into()),
                CellValue::String("email".into()),
                CellValue::String("age".into()),
            ]
        );
    }

    #[test]
    fn test_project_scalar_fields() {
        let record = json!({"name": "Peter", "age": 20});
        let columns = spec(json!(["name", "age"]));
        assert_eq!(
            project(&columns, Some(&record)),
            vec![CellValue::String("Peter".into()), CellValue::Int(20)]
        );
    }

    #[test]
    fn test_project_association() {
        let record = json!({"name": "Peter", "company": {"name": "Acme"}});
        let columns = spec(json!(["name", {"company": ["name"]}]));
        assert_eq!(
            project(&columns, Some(&record)),
            vec![
                CellValue::String("Peter".into()),
                CellValue::String("Acme".into()),
            ]
        );
    }

    #[test]
    fn test_project_missing_field_is_empty() {
        let record = json!({"name": "Peter"});
        let columns = spec(json!(["name", "age"]));
        assert_eq!(
            project(&columns, Some(&record)),
            vec![CellValue::String("Peter".into()), CellValue::Empty]
        );
    }

    #[test]
    fn test_project_missing_association_emits_identifier() {
        // no context below a missing association, so the leaf falls back
        // to its label, matching the header machinery
        let record = json!({"name": "Peter"});
        let columns = spec(json!([{"company": ["name"]}]));
        assert_eq!(
            project(&columns, Some(&record)),
            vec![CellValue::String("name".into())]
        );
    }

    #[test]
    fn test_project_duplicate_fields() {
        let record = json!({"name": "Peter"});
        let columns = spec(json!(["name", "name"]));
        assert_eq!(
            project(&columns, Some(&record)),
            vec![
                CellValue::String("Peter".into()),
                CellValue::String("Peter".into()),
            ]
        );
    }

    #[test]
    fn test_project_nested_leaf_uses_to_cell() {
        let record = json!({"company": {"name": "Acme"}});
        let columns = spec(json!(["company"]));
        assert_eq!(
            project(&columns, Some(&record)),
            vec![CellValue::String(r#"{"name":"Acme"}"#.into())]
        );
    }
}
