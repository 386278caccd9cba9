//! Derived-Value Resolver
//!
//! Computes every `DerivedCalc` parameter's value in dependency order and
//! writes the results back into the form values as strings. Acyclic
//! dependency graphs resolve in a single topological pass; parameters
//! caught in a cycle fall back to a bounded fixed-point phase so resolution
//! always terminates. A formula failure sets that one parameter to `"0"`
//! and resolution of the others continues.

use std::collections::{BTreeMap, VecDeque};

use shared::{FormValue, FormValues, Parameter, ParameterKind, ParameterSchema};

use crate::formula::Formula;

/// Upper bound on fixed-point passes over cyclic dependency graphs
pub const MAX_RESOLVE_PASSES: usize = 10;

/// Full pass: recompute every derived parameter
///
/// Returns an updated copy of the form values; the input is not mutated.
/// Calling this twice with no intervening input change yields identical
/// values.
pub fn calculate_derived_values(schema: &ParameterSchema, values: &FormValues) -> FormValues {
    let mut next = values.clone();
    let (ordered, cyclic) = dependency_order(schema);

    for param in &ordered {
        evaluate_into(param, &mut next);
    }

    if !cyclic.is_empty() {
        for pass in 1..=MAX_RESOLVE_PASSES {
            let mut changed = false;
            for param in &cyclic {
                changed |= evaluate_into(param, &mut next);
            }
            if !changed {
                break;
            }
            if pass == MAX_RESOLVE_PASSES {
                tracing::warn!(
                    parameters = cyclic.len(),
                    "derived-value resolution hit the pass cap, keeping last computed values"
                );
            }
        }
    }

    next
}

/// Incremental shape: store a single changed field, then re-resolve
///
/// Both call shapes share the full topological ordering, so deep dependency
/// chains converge identically in one update.
pub fn update_form_value_with_calculations(
    schema: &ParameterSchema,
    values: &FormValues,
    changed_field: &str,
    new_value: impl Into<FormValue>,
) -> FormValues {
    let mut next = values.clone();
    next.set(changed_field, new_value);
    calculate_derived_values(schema, &next)
}

/// Evaluate one derived parameter and store the rendered result
///
/// Returns true when the stored value changed.
fn evaluate_into(param: &Parameter, values: &mut FormValues) -> bool {
    let result = match &param.formula {
        Some(formula) => match Formula::parse(formula) {
            Ok(parsed) => {
                let mut env = BTreeMap::new();
                for dep in &param.dependencies {
                    env.insert(dep.clone(), values.numeric(dep).unwrap_or(0.0));
                }
                parsed.eval(&env)
            }
            Err(err) => {
                tracing::debug!(parameter = %param.name, %err, "formula rejected, storing 0");
                0.0
            }
        },
        // derived parameter without a formula resolves to zero
        None => 0.0,
    };

    let rendered = format!("{}", result);
    let changed = values.text(&param.name).as_deref() != Some(rendered.as_str());
    values.set(&param.name, rendered);
    changed
}

/// Order derived parameters topologically by direct dependency references
///
/// Returns `(ordered, cyclic)`: `ordered` is a valid evaluation order for
/// the acyclic part (schema order among peers); `cyclic` holds parameters
/// caught in a dependency cycle, in schema order. Non-derived dependencies
/// are leaves and impose no ordering.
pub(crate) fn dependency_order<'a>(
    schema: &'a ParameterSchema,
) -> (Vec<&'a Parameter>, Vec<&'a Parameter>) {
    let derived: Vec<&Parameter> = schema
        .parameters()
        .iter()
        .filter(|p| p.kind == ParameterKind::DerivedCalc)
        .collect();

    let index: BTreeMap<&str, usize> = derived
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name.as_str(), i))
        .collect();

    let mut indegree = vec![0usize; derived.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); derived.len()];
    for (i, param) in derived.iter().enumerate() {
        for dep in &param.dependencies {
            if let Some(&j) = index.get(dep.as_str()) {
                indegree[i] += 1;
                if j != i {
                    dependents[j].push(i);
                }
                // a self-reference keeps its indegree and lands in the
                // cyclic remainder
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..derived.len()).filter(|&i| indegree[i] == 0).collect();
    let mut ordered = Vec::with_capacity(derived.len());
    let mut done = vec![false; derived.len()];

    while let Some(i) = queue.pop_front() {
        done[i] = true;
        ordered.push(derived[i]);
        for &dependent in &dependents[i] {
            indegree[dependent] -= 1;
            if indegree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    let cyclic = derived
        .iter()
        .enumerate()
        .filter(|(i, _)| !done[*i])
        .map(|(_, p)| *p)
        .collect();

    (ordered, cyclic)
}
