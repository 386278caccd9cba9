//! Quote Price Composer
//!
//! Composes the price of one quote from the schema and the buyer's current
//! form values. Supported primitives, combinable per parameter:
//! - flat base price (parameter- and option-level)
//! - unit price (per billable unit for numeric parameters, flat for fixed
//!   options)
//! - sub-option flat price
//! - step/tier pricing above a unit threshold (negative = volume discount)
//! - multiplier over the parameter's assembled subtotal
//!
//! Arithmetic is plain f64 end to end with no internal rounding; amounts
//! are rounded only when rendered into descriptions through the currency
//! helper. Composition never fails: malformed input degrades to zero
//! contributions.

use serde::{Deserialize, Serialize};

use shared::{
    Currency, FormValues, Parameter, ParameterKind, ParameterSchema, QUANTITY_KEY,
};

use crate::resolver::calculate_derived_values;
use crate::visibility::is_visible;

/// One priced contribution in the quote breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownEntry {
    /// Display label of the contributing parameter
    pub parameter: String,
    /// Human-readable summary of each contributing component
    pub description: String,
    /// Amount added to the unit total
    pub amount: f64,
}

/// Result of quote price composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteResult {
    /// Sum of per-parameter subtotals before quantity scaling
    pub unit_total: f64,
    /// Order quantity (defaults to 1 when absent or non-numeric)
    pub quantity: f64,
    /// Resolved value of the main-units parameter, 1 when none is marked
    pub main_units: f64,
    /// `unit_total × quantity`
    pub total_price: f64,
    /// Per-parameter contributions in schema order
    pub breakdown: Vec<BreakdownEntry>,
}

/// Compose a full price quote
///
/// Runs a full derived-value pass first so the breakdown always reflects a
/// consistent values mapping. Pure: same inputs always produce the same
/// result, and the caller's values are not mutated.
pub fn calculate_price(
    schema: &ParameterSchema,
    values: &FormValues,
    currency: Currency,
) -> QuoteResult {
    let resolved = calculate_derived_values(schema, values);

    let quantity = resolved.numeric(QUANTITY_KEY).unwrap_or(1.0);
    let main_units = schema
        .main_units_parameter()
        .and_then(|p| resolved.numeric(&p.name))
        .unwrap_or(1.0);

    let mut unit_total = 0.0;
    let mut breakdown = Vec::new();

    for param in schema.parameters() {
        if param.name == QUANTITY_KEY || !is_visible(param, &resolved) {
            continue;
        }
        if resolved.is_blank(&param.name) {
            continue;
        }
        if let Some(entry) = price_parameter(param, &resolved, currency) {
            unit_total += entry.amount;
            breakdown.push(entry);
        }
    }

    QuoteResult {
        unit_total,
        quantity,
        main_units,
        total_price: unit_total * quantity,
        breakdown,
    }
}

/// Assemble one parameter's subtotal and description
///
/// Only positive subtotals contribute to the quote; anything else returns
/// `None` and the parameter drops out of the breakdown.
fn price_parameter(
    param: &Parameter,
    values: &FormValues,
    currency: Currency,
) -> Option<BreakdownEntry> {
    let mut amount = 0.0;
    let mut parts: Vec<String> = Vec::new();

    // parameter-level flat amount, attributed per item
    if let Some(base) = param.pricing.as_ref().and_then(|p| p.base_price) {
        amount += base;
        parts.push(format!("base {} per item", currency.format_amount(base)));
    }

    match param.kind {
        ParameterKind::FixedOption => {
            let current = values.text(&param.name).unwrap_or_default();
            // a value matching no option contributes no option components;
            // the parameter-level base above still stands
            if let Some(option) = param.selected_option(&current) {
                let mut option_multiplier = None;
                if let Some(pricing) = &option.pricing {
                    if let Some(base) = pricing.base_price {
                        amount += base;
                        parts.push(format!("{} {}", option.label, currency.format_amount(base)));
                    }
                    // unit price on a fixed option is a flat add
                    if let Some(unit_price) = pricing.unit_price {
                        amount += unit_price;
                        parts.push(format!(
                            "{} unit price {}",
                            option.label,
                            currency.format_amount(unit_price)
                        ));
                    }
                    option_multiplier = pricing.multiplier;
                }

                let suboption_key = FormValues::suboption_key(&param.name);
                if let Some(selected) = values.text(&suboption_key)
                    && let Some(sub) = option.sub_option(&selected)
                    && sub.price != 0.0
                {
                    amount += sub.price;
                    parts.push(format!(
                        "{} {}",
                        sub.label,
                        currency.format_amount(sub.price)
                    ));
                }

                // the option multiplier scales this parameter's assembled
                // subtotal, after all additive components
                if let Some(multiplier) = option_multiplier {
                    amount *= multiplier;
                    parts.push(format!("x {}", multiplier));
                }
            }
        }
        ParameterKind::NumericValue | ParameterKind::DerivedCalc => {
            let value = values.numeric(&param.name).unwrap_or(0.0);
            let total_units = value * param.units_per_quantity.unwrap_or(1.0);

            if let Some(pricing) = &param.pricing {
                if let Some(unit_price) = pricing.unit_price {
                    amount += unit_price * total_units;
                    parts.push(format!(
                        "{} units at {}",
                        total_units,
                        currency.format_amount(unit_price)
                    ));
                }
                if let Some(step) = &pricing.step_pricing
                    && total_units > step.threshold
                {
                    let extra = step.step_amount * (total_units - step.threshold);
                    amount += extra;
                    let kind = if step.step_amount < 0.0 {
                        "volume discount"
                    } else {
                        "step charge"
                    };
                    parts.push(format!(
                        "{} {} above {} units",
                        kind,
                        currency.format_amount(extra),
                        step.threshold
                    ));
                }
                if let Some(multiplier) = pricing.multiplier {
                    amount *= multiplier;
                    parts.push(format!("x {}", multiplier));
                }
            }
        }
    }

    if amount > 0.0 {
        Some(BreakdownEntry {
            parameter: param.label.clone(),
            description: parts.join(", "),
            amount,
        })
    } else {
        None
    }
}

// ==================== Tests ====================
