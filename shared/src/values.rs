//! Buyer Form Values
//!
//! The per-session mapping from parameter name to the buyer's current value.
//! The mapping is owned by the caller; the engine reads it and returns
//! updated copies. Keys are parameter names, `"{name}_suboption"` for
//! sub-option selections, and the literal `"quantity"` for order quantity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved key holding the order quantity
pub const QUANTITY_KEY: &str = "quantity";

/// A single form value
///
/// Buyers type strings, derived calculations store numeric results rendered
/// as strings, and callers may pass numbers directly. Untagged so the
/// external JSON shape stays a plain string-or-number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    /// Numeric reading of the value; `None` for missing or non-numeric text
    /// and for non-finite numbers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            FormValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// True for the empty string (a cleared field)
    pub fn is_blank(&self) -> bool {
        matches!(self, FormValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Number(n) => write!(f, "{}", n),
            FormValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

/// Form values for one quoting session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FormValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FormValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<FormValue> {
        self.0.remove(name)
    }

    /// Current value rendered as text (numbers use their shortest form,
    /// e.g. `2.0` renders `"2"`)
    pub fn text(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|v| v.to_string())
    }

    /// Numeric reading of a value; `None` for missing/non-numeric
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(FormValue::as_number)
    }

    /// True when the value is missing or an empty string
    pub fn is_blank(&self, name: &str) -> bool {
        self.0.get(name).is_none_or(FormValue::is_blank)
    }

    /// Key under which a parameter's sub-option selection is stored
    pub fn suboption_key(name: &str) -> String {
        format!("{name}_suboption")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FormValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parses_text() {
        let mut values = FormValues::new();
        values.set("width", "12.5");
        values.set("height", 24.0);
        values.set("note", "hello");

        assert_eq!(values.numeric("width"), Some(12.5));
        assert_eq!(values.numeric("height"), Some(24.0));
        assert_eq!(values.numeric("note"), None);
        assert_eq!(values.numeric("missing"), None);
    }

    #[test]
    fn test_text_renders_numbers_shortest() {
        let mut values = FormValues::new();
        values.set("a", 2.0);
        values.set("b", 2.5);

        assert_eq!(values.text("a").as_deref(), Some("2"));
        assert_eq!(values.text("b").as_deref(), Some("2.5"));
    }

    #[test]
    fn test_blank_detection() {
        let mut values = FormValues::new();
        values.set("cleared", "");
        values.set("zero", 0.0);

        assert!(values.is_blank("cleared"));
        assert!(values.is_blank("missing"));
        assert!(!values.is_blank("zero"));
    }

    #[test]
    fn test_untagged_json_shape() {
        let mut values = FormValues::new();
        values.set("material", "vinyl");
        values.set(QUANTITY_KEY, 3.0);

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"material":"vinyl","quantity":3.0}"#);

        let back: FormValues = serde_json::from_str(&json).unwrap();
        assert_eq!(back.numeric(QUANTITY_KEY), Some(3.0));
        assert_eq!(back.text("material").as_deref(), Some("vinyl"));
    }

    #[test]
    fn test_suboption_key() {
        assert_eq!(FormValues::suboption_key("material"), "material_suboption");
    }
}
