//! Price Composition Module
//!
//! Walks the visible parameters, applies each parameter's and selected
//! option's pricing rules, and produces a per-parameter breakdown plus a
//! quantity-scaled total.

mod composer;

pub use composer::*;
