//! Structural Schema Validation
//!
//! Opt-in defensive checks for merchant-authored schemas, run at schema
//! load or save time. The pricing path never requires these and never
//! raises regardless; this exists to surface authoring mistakes before a
//! buyer ever opens the form.

use std::collections::BTreeSet;

use shared::{ParameterKind, ParameterSchema, SchemaError};

use crate::resolver::dependency_order;

/// Check a schema for structural problems, reporting the first one found
pub fn validate_schema(schema: &ParameterSchema) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for param in schema.parameters() {
        if !seen.insert(param.name.as_str()) {
            return Err(SchemaError::DuplicateName(param.name.clone()));
        }
    }

    let mut main_units: Option<&str> = None;
    for param in schema.parameters().iter().filter(|p| p.is_main_units) {
        if let Some(first) = main_units {
            return Err(SchemaError::MultipleMainUnits {
                first: first.to_string(),
                second: param.name.clone(),
            });
        }
        main_units = Some(&param.name);
    }

    for param in schema.parameters() {
        match param.kind {
            ParameterKind::DerivedCalc => {
                if param.formula.as_deref().is_none_or(|f| f.trim().is_empty()) {
                    return Err(SchemaError::MissingFormula(param.name.clone()));
                }
                for dep in &param.dependencies {
                    if schema.find(dep).is_none() {
                        return Err(SchemaError::UnknownDependency {
                            parameter: param.name.clone(),
                            dependency: dep.clone(),
                        });
                    }
                }
            }
            ParameterKind::FixedOption => {
                if param.options.is_empty() {
                    return Err(SchemaError::MissingOptions(param.name.clone()));
                }
                let mut values = BTreeSet::new();
                for option in &param.options {
                    if !values.insert(option.value.as_str()) {
                        return Err(SchemaError::DuplicateOptionValue {
                            parameter: param.name.clone(),
                            value: option.value.clone(),
                        });
                    }
                }
            }
            ParameterKind::NumericValue => {}
        }
    }

    let (_, cyclic) = dependency_order(schema);
    if let Some(param) = cyclic.first() {
        return Err(SchemaError::DependencyCycle(param.name.clone()));
    }

    Ok(())
}
