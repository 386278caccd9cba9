//! Parameter Schema Model
//!
//! Pure data definitions for merchant-authored quote forms: parameters,
//! their options and sub-options, and the pricing rules attached to them.
//! Schemas are authored/edited elsewhere and loaded immutably for a quoting
//! session; every other component consumes them read-only.

mod option;
mod parameter;
mod pricing_rule;

pub use option::{FixedOption, SubOption};
pub use parameter::{Conditional, Parameter, ParameterKind, PricingScope};
pub use pricing_rule::{PricingRule, StepPricing};

use serde::{Deserialize, Serialize};

/// Ordered, immutable parameter schema for a quoting session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ParameterSchema(Vec<Parameter>);

impl ParameterSchema {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }

    /// Parameters in authoring order
    pub fn parameters(&self) -> &[Parameter] {
        &self.0
    }

    /// Look up a parameter by its stable name
    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name == name)
    }

    /// The parameter marked as the billable-units driver, if any
    pub fn main_units_parameter(&self) -> Option<&Parameter> {
        self.0.iter().find(|p| p.is_main_units)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }
}

impl From<Vec<Parameter>> for ParameterSchema {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }
}

impl<'a> IntoIterator for &'a ParameterSchema {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_and_main_units_lookup() {
        let mut width = Parameter::numeric("width", "Width");
        width.is_main_units = true;
        let schema = ParameterSchema::new(vec![
            width,
            Parameter::derived("area", "Area", "width * width", &["width"]),
        ]);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.find("area").unwrap().name, "area");
        assert!(schema.find("height").is_none());
        assert_eq!(schema.main_units_parameter().unwrap().name, "width");
    }

    #[test]
    fn test_schema_json_round_trip() {
        let mut material = Parameter::fixed_option(
            "material",
            "Material",
            vec![FixedOption::new("Vinyl", "vinyl")],
        );
        material.required = true;
        material.pricing = Some(PricingRule::base(10.0));

        let schema = ParameterSchema::new(vec![
            material,
            Parameter::numeric("width", "Width"),
            Parameter::derived("area", "Area", "width * width / 144", &["width"]),
        ]);

        let json = serde_json::to_string(&schema).unwrap();
        let back: ParameterSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_wire_names() {
        let param = Parameter::numeric("width", "Width");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["kind"], "NUMERIC_VALUE");
        // defaults are elided
        assert!(json.get("formula").is_none());
        assert!(json.get("options").is_none());

        let scope = serde_json::to_value(PricingScope::PerUnit).unwrap();
        assert_eq!(scope, "per_unit");
    }
}
