//! Parameter Model

use serde::{Deserialize, Serialize};

use super::option::FixedOption;
use super::pricing_rule::PricingRule;

/// Parameter kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterKind {
    /// Discrete choice among fixed options
    FixedOption,
    /// Buyer-entered bounded number
    NumericValue,
    /// Computed from other parameters via a formula
    DerivedCalc,
}

/// Advisory pricing scope tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingScope {
    PerUnit,
    PerQty,
}

/// Conditional display rule: the parameter is inactive unless the named
/// parent parameter's current value is one of `show_when`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conditional {
    pub parent_parameter: String,
    pub show_when: Vec<String>,
}

/// Parameter entity: one configurable input in a quote form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    pub id: String,
    /// Stable key used in formulas, values and dependencies (unique within
    /// a schema)
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ParameterKind,
    #[serde(default)]
    pub required: bool,
    /// Pricing attached to the parameter itself (applies regardless of the
    /// selected option)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingRule>,
    /// Embedded options (FixedOption kind only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FixedOption>,

    // Numeric constraints / display hints (NumericValue; advisory for
    // DerivedCalc)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Arithmetic expression (DerivedCalc kind only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Parameter names referenced by `formula`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional: Option<Conditional>,
    /// Marks the billable-units driver (at most one per schema)
    #[serde(default)]
    pub is_main_units: bool,
    /// Converts the raw value into total billable units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_per_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_scope: Option<PricingScope>,
}

impl Parameter {
    fn base(name: impl Into<String>, label: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            label: label.into(),
            description: None,
            kind,
            required: false,
            pricing: None,
            options: Vec::new(),
            min: None,
            max: None,
            step: None,
            unit: None,
            formula: None,
            dependencies: Vec::new(),
            conditional: None,
            is_main_units: false,
            units_per_quantity: None,
            pricing_scope: None,
        }
    }

    /// Buyer-entered numeric input
    pub fn numeric(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::base(name, label, ParameterKind::NumericValue)
    }

    /// Discrete choice among the given options
    pub fn fixed_option(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FixedOption>,
    ) -> Self {
        let mut param = Self::base(name, label, ParameterKind::FixedOption);
        param.options = options;
        param
    }

    /// Computed parameter: `formula` evaluated over the named dependencies
    pub fn derived(
        name: impl Into<String>,
        label: impl Into<String>,
        formula: impl Into<String>,
        dependencies: &[&str],
    ) -> Self {
        let mut param = Self::base(name, label, ParameterKind::DerivedCalc);
        param.formula = Some(formula.into());
        param.dependencies = dependencies.iter().map(|d| d.to_string()).collect();
        param
    }

    /// Look up the option matching the buyer's current selection
    pub fn selected_option(&self, value: &str) -> Option<&FixedOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
