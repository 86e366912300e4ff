//! Cell values and format-option bags

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Represents a single cell value pushed into a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Date/time value
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Convert cell value to string
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::String(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Check if cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to convert to integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => Some(*f as i64),
            CellValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to convert to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to convert to boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Int(i) => Some(*i != 0),
            CellValue::String(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Convert a dynamic json value into a cell value
    ///
    /// Nested arrays and objects in a leaf position keep their compact json
    /// text rather than being dropped.
    pub fn from_json(value: &Value) -> CellValue {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => CellValue::String(s.clone()),
            other => CellValue::String(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::DateTime(d)
    }
}

/// An opaque bag of format options applied to a row or column
///
/// The bag is an ordered map from option name (e.g. `weight`, `color`,
/// `number_format`) to an option value. The core never interprets the
/// options; it only merges bags and hands them to the sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatBag {
    options: IndexMap<String, CellValue>,
}

impl FormatBag {
    /// Create an empty format bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, consuming and returning the bag (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an option in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.options.insert(key.into(), value.into());
    }

    /// Get an option value
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.options.get(key)
    }

    /// Number of options in the bag
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the bag has no options
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `other` into this bag, with `other`'s options overriding
    /// options already present here
    pub fn merge_over(&mut self, other: &FormatBag) {
        for (key, value) in &other.options {
            self.options.insert(key.clone(), value.clone());
        }
    }

    /// Merge `other` into this bag as low-priority defaults: only options
    /// not already set here are taken
    pub fn merge_under(&mut self, other: &FormatBag) {
        for (key, value) in &other.options {
            self.options
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for FormatBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = FormatBag::new();
        for (key, value) in iter {
            bag.set(key, value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_value_conversions() {
        let val = CellValue::Int(42);
        assert_eq!(val.as_i64(), Some(42));
        assert_eq!(val.as_f64(), Some(42.0));

        let val = CellValue::String("true".to_string());
        assert_eq!(val.as_bool(), Some(true));

        let val = CellValue::Float(1.5);
        assert_eq!(val.as_string(), "1.5");
    }

    #[test]
    fn test_cell_value_from_json() {
        assert_eq!(CellValue::from_json(&json!(null)), CellValue::Empty);
        assert_eq!(CellValue::from_json(&json!(20)), CellValue::Int(20));
        assert_eq!(CellValue::from_json(&json!(1.25)), CellValue::Float(1.25));
        assert_eq!(CellValue::from_json(&json!(true)), CellValue::Bool(true));
        assert_eq!(
            CellValue::from_json(&json!("Peter")),
            CellValue::String("Peter".to_string())
        );
        assert_eq!(
            CellValue::from_json(&json!({"name": "Acme"})),
            CellValue::String(r#"{"name":"Acme"}"#.to_string())
        );
    }

    #[test]
    fn test_format_bag_merge_over() {
        let mut bag = FormatBag::new().with("color", "blue").with("size", 10);
        let other = FormatBag::new().with("color", "red").with("weight", "bold");

        bag.merge_over(&other);

        assert_eq!(bag.get("color"), Some(&CellValue::String("red".into())));
        assert_eq!(bag.get("size"), Some(&CellValue::Int(10)));
        assert_eq!(bag.get("weight"), Some(&CellValue::String("bold".into())));
    }

    #[test]
    fn test_format_bag_merge_under_keeps_explicit_options() {
        let mut bag = FormatBag::new().with("color", "blue");
        let defaults = FormatBag::new().with("color", "red").with("weight", "bold");

        bag.merge_under(&defaults);

        assert_eq!(bag.get("color"), Some(&CellValue::String("blue".into())));
        assert_eq!(bag.get("weight"), Some(&CellValue::String("bold".into())));
    }
}
