//! Restricted Formula Evaluation
//!
//! Merchant formulas are arithmetic only: numbers, parameter names,
//! `+ - * /` and parentheses. Input is sanitized to that character set
//! before lexing; evaluation binds parameter names from a caller-supplied
//! environment. The sanitize-then-evaluate step is a hard boundary; no
//! dynamic code execution facility is ever involved.
//!
//! Public entry points fail soft: any lexing, parsing or numeric failure
//! yields `0.0` with a debug-level diagnostic, never an error to the caller.

mod lexer;
mod parser;

pub use parser::{BinOp, Expr, Formula};

use std::collections::BTreeMap;
use thiserror::Error;

/// Formula rejection reason
///
/// Surfaced by [`Formula::parse`] for diagnostics; the fail-soft entry
/// points log it and return `0.0`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("empty formula")]
    Empty,

    #[error("malformed number \"{0}\"")]
    MalformedNumber(String),

    #[error("unexpected character at offset {0}")]
    UnexpectedChar(usize),

    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),

    #[error("unbalanced parenthesis")]
    UnbalancedParen,

    #[error("trailing input after expression")]
    TrailingInput,
}

/// Strip every character outside the safe formula set
///
/// Allowed: ASCII digits, `.`, parentheses, whitespace, `+ - * /`, and
/// identifier characters (`A-Z a-z 0-9 _`) for parameter references.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '.' | '_' | '(' | ')' | '+' | '-' | '*' | '/')
        })
        .collect()
}

/// Evaluate a formula with no variable bindings; returns `0.0` on any
/// failure
pub fn evaluate(expression: &str) -> f64 {
    evaluate_with(expression, &BTreeMap::new())
}

/// Evaluate a formula against a variable environment
///
/// Missing variables read as `0.0`; non-finite results (division by zero
/// and friends) collapse to `0.0`.
pub fn evaluate_with(expression: &str, vars: &BTreeMap<String, f64>) -> f64 {
    match Formula::parse(expression) {
        Ok(formula) => formula.eval(vars),
        Err(err) => {
            tracing::debug!(formula = expression, %err, "formula rejected, defaulting to 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_arithmetic() {
        assert_eq!(evaluate("1 + 2 * 3"), 7.0);
        assert_eq!(evaluate("(1 + 2) * 3"), 9.0);
        assert_eq!(evaluate("10 / 4"), 2.5);
        assert_eq!(evaluate("2.5 * 4"), 10.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10 - 2 - 3"), 5.0);
        assert_eq!(evaluate("16 / 4 / 2"), 2.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-3 + 5"), 2.0);
        assert_eq!(evaluate("2 * -4"), -8.0);
    }

    #[test]
    fn test_variables_bound_from_environment() {
        let mut vars = BTreeMap::new();
        vars.insert("width".to_string(), 12.0);
        vars.insert("height".to_string(), 24.0);
        assert_eq!(evaluate_with("width * height / 144", &vars), 2.0);
    }

    #[test]
    fn test_missing_variable_reads_zero() {
        let vars = BTreeMap::new();
        assert_eq!(evaluate_with("width + 5", &vars), 5.0);
    }

    #[test]
    fn test_name_prefix_collision_is_impossible() {
        // `width` vs `width2` are distinct identifiers, not substrings
        let mut vars = BTreeMap::new();
        vars.insert("width".to_string(), 10.0);
        vars.insert("width2".to_string(), 3.0);
        assert_eq!(evaluate_with("width + width2", &vars), 13.0);
    }

    #[test]
    fn test_malformed_yields_zero() {
        assert_eq!(evaluate("width * * height"), 0.0);
        assert_eq!(evaluate("1 +"), 0.0);
        assert_eq!(evaluate("(1 + 2"), 0.0);
        assert_eq!(evaluate(""), 0.0);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(evaluate("1 / 0"), 0.0);
        assert_eq!(evaluate("0 / 0"), 0.0);
    }

    #[test]
    fn test_sanitizer_strips_hostile_characters() {
        assert_eq!(sanitize("1 + 2; drop()"), "1 + 2 drop()");
        // stripped input still evaluates arithmetically or fails to zero
        assert_eq!(evaluate("1 + 2; #!"), 3.0);
        assert_eq!(evaluate("`rm` + 1"), 1.0);
    }
}
