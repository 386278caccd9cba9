//! Shared types for the quote pricing engine
//!
//! Common types used across the workspace: the merchant-authored parameter
//! schema, buyer form values, currency display helpers, and schema error
//! types. These are pure data definitions; all calculation lives in the
//! `quote-engine` crate.

pub mod currency;
pub mod error;
pub mod schema;
pub mod values;

// Re-exports
pub use currency::Currency;
pub use error::SchemaError;
pub use schema::{
    Conditional, FixedOption, Parameter, ParameterKind, ParameterSchema, PricingRule,
    PricingScope, StepPricing, SubOption,
};
pub use values::{FormValue, FormValues, QUANTITY_KEY};
