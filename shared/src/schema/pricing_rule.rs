//! Pricing Rule Model

use serde::{Deserialize, Serialize};

/// Step/tier pricing: an additional per-unit amount applied only above a
/// threshold. `step_amount` may be negative (volume discount).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StepPricing {
    /// Unit count above which the step amount starts applying
    pub threshold: f64,
    /// Amount per unit above the threshold
    pub step_amount: f64,
}

/// Composable pricing primitives, all optional and independently combinable
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingRule {
    /// Flat amount added once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    /// Amount per billable unit for numeric parameters; added flat for
    /// fixed options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    /// Scales the parameter's assembled subtotal, after all additive
    /// components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_pricing: Option<StepPricing>,
}

impl PricingRule {
    /// Rule with only a flat base amount
    pub fn base(amount: f64) -> Self {
        Self {
            base_price: Some(amount),
            ..Self::default()
        }
    }

    /// Rule with only a per-unit amount
    pub fn per_unit(amount: f64) -> Self {
        Self {
            unit_price: Some(amount),
            ..Self::default()
        }
    }

    /// Rule with a per-unit amount plus step pricing above a threshold
    pub fn per_unit_stepped(amount: f64, threshold: f64, step_amount: f64) -> Self {
        Self {
            unit_price: Some(amount),
            step_pricing: Some(StepPricing {
                threshold,
                step_amount,
            }),
            ..Self::default()
        }
    }
}
