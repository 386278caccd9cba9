//! Quote Pricing Engine
//!
//! Pure, synchronous calculation engine for merchant-authored quote forms:
//! it turns a parameter schema plus the buyer's current form values into a
//! price breakdown and total. Callers (UI, API handlers) own persistence,
//! transport and display; every operation here is a pure function over its
//! inputs.
//!
//! # Module structure
//!
//! ```text
//! quote-engine/src/
//! ├── formula/       # restricted arithmetic evaluator (lexer, parser, AST)
//! ├── resolver.rs    # derived-value resolution in dependency order
//! ├── visibility.rs  # conditional visibility predicate
//! ├── validation.rs  # required sub-option validation
//! ├── pricing/       # price composer and breakdown types
//! ├── schema_check.rs# opt-in structural schema validation
//! └── session.rs     # per-session context object
//! ```

pub mod formula;
pub mod pricing;
pub mod resolver;
pub mod schema_check;
pub mod session;
pub mod validation;
pub mod visibility;

// Re-export public entry points
pub use formula::{Formula, FormulaError, evaluate, evaluate_with};
pub use pricing::{BreakdownEntry, QuoteResult, calculate_price};
pub use resolver::{
    MAX_RESOLVE_PASSES, calculate_derived_values, update_form_value_with_calculations,
};
pub use schema_check::validate_schema;
pub use session::QuotingSession;
pub use validation::validate_required_sub_options;
pub use visibility::{is_visible, visible_parameters};
