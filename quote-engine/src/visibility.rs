//! Conditional Visibility
//!
//! Determines which parameters are active given the buyer's current
//! selections. A parameter with no conditional rule is always visible; a
//! conditional parameter is visible only while its parent's current value
//! is one of the listed trigger values.

use shared::{FormValues, Parameter, ParameterSchema};

/// Check whether a parameter is active given the current form values
pub fn is_visible(parameter: &Parameter, values: &FormValues) -> bool {
    let Some(conditional) = &parameter.conditional else {
        return true;
    };
    match values.text(&conditional.parent_parameter) {
        Some(current) => conditional.show_when.iter().any(|v| *v == current),
        None => false,
    }
}

/// Iterate the parameters currently visible to the buyer, in schema order
pub fn visible_parameters<'a>(
    schema: &'a ParameterSchema,
    values: &'a FormValues,
) -> impl Iterator<Item = &'a Parameter> {
    schema
        .parameters()
        .iter()
        .filter(move |p| is_visible(p, values))
}
