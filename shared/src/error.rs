//! Schema Error Types

use thiserror::Error;

/// Structural schema validation failure
///
/// Reported by the opt-in schema check at authoring/load time. The pricing
/// path never raises these; malformed schemas degrade to zero contributions
/// instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate parameter name \"{0}\"")]
    DuplicateName(String),

    #[error("parameter \"{parameter}\" has duplicate option value \"{value}\"")]
    DuplicateOptionValue { parameter: String, value: String },

    #[error("parameters \"{first}\" and \"{second}\" are both marked as main units")]
    MultipleMainUnits { first: String, second: String },

    #[error("derived parameter \"{0}\" has no formula")]
    MissingFormula(String),

    #[error("fixed-option parameter \"{0}\" has no options")]
    MissingOptions(String),

    #[error("parameter \"{parameter}\" depends on unknown parameter \"{dependency}\"")]
    UnknownDependency {
        parameter: String,
        dependency: String,
    },

    #[error("dependency cycle involving parameter \"{0}\"")]
    DependencyCycle(String),
}
