//! Required Sub-Option Validation
//!
//! Advisory validation run by callers (typically on submit): every visible,
//! required fixed-option parameter whose selected option carries sub-options
//! must have a matching sub-option selection recorded. Errors are returned
//! as user-facing strings; nothing is thrown and nothing is mutated.

use shared::{FormValues, ParameterKind, ParameterSchema};

use crate::visibility::visible_parameters;

/// Collect messages for missing required sub-option selections
pub fn validate_required_sub_options(
    schema: &ParameterSchema,
    values: &FormValues,
) -> Vec<String> {
    let mut errors = Vec::new();

    for param in visible_parameters(schema, values) {
        if !param.required || param.kind != ParameterKind::FixedOption {
            continue;
        }
        let Some(current) = values.text(&param.name) else {
            continue;
        };
        let Some(option) = param.selected_option(&current) else {
            continue;
        };
        if option.sub_options.is_empty() {
            continue;
        }

        let key = FormValues::suboption_key(&param.name);
        let selected = values.text(&key).unwrap_or_default();
        let valid = !selected.is_empty() && option.sub_option(&selected).is_some();
        if !valid {
            errors.push(format!(
                "{}: select a sub-option for \"{}\"",
                param.label, option.label
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FixedOption, Parameter, SubOption};

    fn material_schema() -> ParameterSchema {
        let mut vinyl = FixedOption::new("Vinyl", "vinyl");
        vinyl.sub_options = vec![
            SubOption::new("Matte", "matte", 0.0),
            SubOption::new("Glossy", "glossy", 2.0),
        ];
        let paper = FixedOption::new("Paper", "paper");

        let mut material = Parameter::fixed_option("material", "Material", vec![vinyl, paper]);
        material.required = true;
        ParameterSchema::new(vec![material])
    }

    #[test]
    fn test_missing_suboption_reports_one_error() {
        let schema = material_schema();
        let mut values = FormValues::new();
        values.set("material", "vinyl");

        let errors = validate_required_sub_options(&schema, &values);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Material"));
        assert!(errors[0].contains("Vinyl"));
    }

    #[test]
    fn test_valid_suboption_passes() {
        let schema = material_schema();
        let mut values = FormValues::new();
        values.set("material", "vinyl");
        values.set("material_suboption", "glossy");

        assert!(validate_required_sub_options(&schema, &values).is_empty());
    }

    #[test]
    fn test_unknown_suboption_value_rejected() {
        let schema = material_schema();
        let mut values = FormValues::new();
        values.set("material", "vinyl");
        values.set("material_suboption", "neon");

        assert_eq!(validate_required_sub_options(&schema, &values).len(), 1);
    }

    #[test]
    fn test_option_without_suboptions_passes() {
        let schema = material_schema();
        let mut values = FormValues::new();
        values.set("material", "paper");

        assert!(validate_required_sub_options(&schema, &values).is_empty());
    }

    #[test]
    fn test_hidden_parameter_not_validated() {
        let mut schema_params = material_schema().parameters().to_vec();
        schema_params[0].conditional = Some(shared::Conditional {
            parent_parameter: "mode".to_string(),
            show_when: vec!["advanced".to_string()],
        });
        let schema = ParameterSchema::new(schema_params);

        let mut values = FormValues::new();
        values.set("material", "vinyl");

        // parent not set to "advanced", so the parameter is inactive
        assert!(validate_required_sub_options(&schema, &values).is_empty());
    }

    #[test]
    fn test_unselected_parameter_not_validated() {
        // required but nothing chosen yet: sub-option validation stays quiet
        let schema = material_schema();
        assert!(validate_required_sub_options(&schema, &FormValues::new()).is_empty());
    }
}
