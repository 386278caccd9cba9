//! Quoting Session
//!
//! Explicit context object for one buyer session: the immutable schema, the
//! current form values and the quote currency, threaded through every call.
//! The session performs no I/O and holds no hidden state; callers serialize
//! access per session and own persistence of the values.

use shared::{Currency, FormValue, FormValues, ParameterSchema};

use crate::pricing::{QuoteResult, calculate_price};
use crate::resolver::{calculate_derived_values, update_form_value_with_calculations};
use crate::validation::validate_required_sub_options;
use crate::visibility;

#[derive(Debug, Clone)]
pub struct QuotingSession {
    schema: ParameterSchema,
    values: FormValues,
    currency: Currency,
}

impl QuotingSession {
    /// Start a session over a schema, resolving initial derived values
    pub fn new(schema: ParameterSchema, currency: Currency) -> Self {
        Self::with_values(schema, FormValues::new(), currency)
    }

    /// Resume a session from previously stored form values
    pub fn with_values(schema: ParameterSchema, values: FormValues, currency: Currency) -> Self {
        let values = calculate_derived_values(&schema, &values);
        Self {
            schema,
            values,
            currency,
        }
    }

    pub fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Record a field interaction and re-resolve dependent calculations
    pub fn set_value(&mut self, name: &str, value: impl Into<FormValue>) {
        self.values =
            update_form_value_with_calculations(&self.schema, &self.values, name, value);
    }

    /// Current price quote
    pub fn quote(&self) -> QuoteResult {
        calculate_price(&self.schema, &self.values, self.currency)
    }

    /// Advisory validation messages for missing required sub-options
    pub fn validate(&self) -> Vec<String> {
        validate_required_sub_options(&self.schema, &self.values)
    }

    /// Whether the named parameter is currently visible to the buyer
    pub fn is_visible(&self, name: &str) -> bool {
        self.schema
            .find(name)
            .is_some_and(|p| visibility::is_visible(p, &self.values))
    }
}
