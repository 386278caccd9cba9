//! Formula Parser and AST Evaluation
//!
//! Recursive descent over the token stream with standard precedence:
//! `expr := term (("+"|"-") term)*`, `term := factor (("*"|"/") factor)*`,
//! `factor := NUMBER | IDENT | "(" expr ")" | ("+"|"-") factor`.
//! Same-precedence operators associate left to right.

use std::collections::BTreeMap;

use super::FormulaError;
use super::lexer::{Token, lex};
use super::sanitize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// Parameter reference, bound at evaluation time
    Var(String),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// A parsed, reusable formula
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expr: Expr,
}

impl Formula {
    /// Sanitize and parse a formula string
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        let cleaned = sanitize(input);
        let tokens = lex(&cleaned)?;
        if tokens.is_empty() {
            return Err(FormulaError::Empty);
        }
        let mut parser = Parser { tokens, pos: 0 };
        let expr = parser.expression()?;
        if parser.pos != parser.tokens.len() {
            return Err(FormulaError::TrailingInput);
        }
        Ok(Self { expr })
    }

    /// Evaluate against a variable environment
    ///
    /// Missing variables read as `0.0`; a non-finite result collapses
    /// to `0.0`.
    pub fn eval(&self, vars: &BTreeMap<String, f64>) -> f64 {
        let value = eval_expr(&self.expr, vars);
        if value.is_finite() {
            value
        } else {
            tracing::debug!("formula produced a non-finite value, defaulting to 0");
            0.0
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

fn eval_expr(expr: &Expr, vars: &BTreeMap<String, f64>) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Var(name) => vars.get(name).copied().unwrap_or(0.0),
        Expr::Neg(inner) => -eval_expr(inner, vars),
        Expr::Binary { op, lhs, rhs } => {
            let l = eval_expr(lhs, vars);
            let r = eval_expr(rhs, vars);
            match op {
                BinOp::Add => l + r,
                BinOp::Sub => l - r,
                BinOp::Mul => l * r,
                BinOp::Div => l / r,
            }
        }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.bump();
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                _ => break,
            };
            self.bump();
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, FormulaError> {
        match self.bump() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Ident(name)) => Ok(Expr::Var(name)),
            Some(Token::Minus) => Ok(Expr::Neg(Box::new(self.factor()?))),
            Some(Token::Plus) => self.factor(),
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.bump() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(FormulaError::UnbalancedParen),
                }
            }
            _ => Err(FormulaError::UnexpectedToken(self.pos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str, vars: &[(&str, f64)]) -> f64 {
        let env: BTreeMap<String, f64> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        Formula::parse(input).unwrap().eval(&env)
    }

    #[test]
    fn test_precedence_over_addition() {
        assert_eq!(eval("2 + 3 * 4", &[]), 14.0);
        assert_eq!(eval("2 * 3 + 4", &[]), 10.0);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(eval("(2 + 3) * 4", &[]), 20.0);
    }

    #[test]
    fn test_nested_negation() {
        assert_eq!(eval("--5", &[]), 5.0);
        assert_eq!(eval("-(2 + 3)", &[]), -5.0);
    }

    #[test]
    fn test_variable_binding() {
        assert_eq!(eval("w * h / 144", &[("w", 12.0), ("h", 24.0)]), 2.0);
    }

    #[test]
    fn test_parse_rejects_double_operator() {
        assert!(matches!(
            Formula::parse("width * * height"),
            Err(FormulaError::UnexpectedToken(_))
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert_eq!(Formula::parse("1 2"), Err(FormulaError::TrailingInput));
        assert_eq!(Formula::parse("(1) (2)"), Err(FormulaError::TrailingInput));
    }

    #[test]
    fn test_parse_rejects_unbalanced_parens() {
        assert_eq!(Formula::parse("(1 + 2"), Err(FormulaError::UnbalancedParen));
    }

    #[test]
    fn test_non_finite_collapses_to_zero() {
        assert_eq!(eval("1 / 0", &[]), 0.0);
        assert_eq!(eval("1 / 0 + 5", &[]), 0.0);
    }
}
