//! Fixed Option and Sub-Option Models

use serde::{Deserialize, Serialize};

use super::pricing_rule::PricingRule;
use super::parameter::PricingScope;

/// Nested choice refining a selected fixed option (e.g. finish color under
/// a material)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubOption {
    pub id: String,
    pub label: String,
    /// Unique within the parent option's sub-options
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Flat amount added when this sub-option is selected
    #[serde(default)]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_scope: Option<PricingScope>,
}

impl SubOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, price: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: label.into(),
            value: value.into(),
            description: None,
            price,
            pricing_scope: None,
        }
    }
}

/// One selectable choice within a fixed-option parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedOption {
    pub label: String,
    /// Unique within the parameter's options; stored in form values when
    /// selected
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingRule>,
    /// Embedded sub-options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_options: Vec<SubOption>,
}

impl FixedOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            pricing: None,
            sub_options: Vec::new(),
        }
    }

    /// Look up a sub-option by its stored value
    pub fn sub_option(&self, value: &str) -> Option<&SubOption> {
        self.sub_options.iter().find(|s| s.value == value)
    }
}
