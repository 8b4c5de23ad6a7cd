//! # Prefix Formula Parser
//!
//! Turns a String formula in normal Polish notation with brackets, e.g.
//! `(+ (/ (* 2.3 x) (log x)) (sin x) 8)`, into an [`ExpressionTree`].
//!
//! Parsing runs in three passes over immutable string views (no character
//! buffers are mutated to mark consumed spans):
//! 1. a bracket-balance scan over the whole string,
//! 2. recursive descent over groups `(<op> <operand> <operand> ...)`:
//!    the leading token is resolved against the operator table, the rest is
//!    split into top-level operand tokens with nesting depth tracked,
//! 3. operand classification: sub-formula (recurse), the free variable, the
//!    reserved constant `pi`, or a numeric literal checked against the strict
//!    double-format grammar.
//!
//! The resulting arena is laid out in pre-order: an operation node is pushed
//! first and its operand subtrees follow left to right, so every child index
//! points forward and the evaluator can walk the tree without re-parsing.

use crate::formula::errors::ParseError;
use crate::formula::expr_tree::{ExpressionTree, Node, Op};
use crate::formula::utils::{check_parentheses, split_top_level};
use regex::Regex;
use std::f64::consts::PI;
use std::sync::LazyLock;

// the double-format grammar: optional leading '-', then one of
// 0 | [1-9]d* | 0?.d* | [1-9]d*.d* | scientific form with a [1-9]+ exponent
static DOUBLE_FORMAT_REGEXP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)((((0?\.)|([1-9]\d*\.))\d*$)|([1-9]+\d*\.?\d*e[+-]?[1-9]+$)|(0$|([1-9]+\d*$)))")
        .unwrap()
});

/// Reserved name of the circle constant.
const PI_TOKEN: &str = "pi";

struct Parser<'a> {
    variable: &'a str,
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    /// Parses one bracketed group and returns the arena index of its
    /// operation node. Sub-groups recurse through `parse_operand`.
    fn parse_group(&mut self, group: &str) -> Result<usize, ParseError> {
        let inner = group
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseError::UnclosedParentheses)?;
        let inner = inner.trim();

        if inner.is_empty() {
            return Err(ParseError::EmptyFormula);
        }

        // leading token up to the first whitespace is the operation symbol
        let (op_token, rest) = match inner.find(|c: char| c.is_whitespace()) {
            Some(pos) => (&inner[..pos], inner[pos..].trim_start()),
            None => (inner, ""),
        };

        let op = Op::from_token(op_token).ok_or_else(|| ParseError::UnknownOperator {
            token: op_token.to_string(),
        })?;

        let operand_tokens = split_top_level(rest)?;
        if !op.arity().accepts(operand_tokens.len()) {
            return Err(ParseError::ArityError {
                operator: op,
                expected: op.arity(),
                actual: operand_tokens.len(),
            });
        }

        // push the operation first so the arena stays in pre-order, then
        // patch in the child indices once the operand subtrees are built
        let index = self.nodes.len();
        self.nodes.push(Node::Operation(op, Vec::new()));

        let mut children = Vec::with_capacity(operand_tokens.len());
        for token in operand_tokens {
            children.push(self.parse_operand(token)?);
        }
        self.nodes[index] = Node::Operation(op, children);

        Ok(index)
    }

    fn parse_operand(&mut self, token: &str) -> Result<usize, ParseError> {
        if token.starts_with('(') {
            return self.parse_group(token);
        }

        let node = if token == self.variable {
            Node::Variable
        } else if token == PI_TOKEN {
            Node::Constant(PI)
        } else if DOUBLE_FORMAT_REGEXP.is_match(token) {
            let value = token.parse::<f64>().map_err(|_| ParseError::InvalidLiteral {
                token: token.to_string(),
            })?;
            Node::Constant(value)
        } else {
            return Err(ParseError::InvalidLiteral {
                token: token.to_string(),
            });
        };

        let index = self.nodes.len();
        self.nodes.push(node);
        Ok(index)
    }
}

impl ExpressionTree {
    /// Parses a formula in normal Polish notation into an expression tree.
    ///
    /// Available operations: `*`, `/`, `+`, `-`, `sqr`, `sqrt`, `pow`,
    /// `sin`, `cos`, `tan`, `cot`, `exp`, `log`. Available constant: `pi`.
    /// `variable` is the symbol of the free variable; the caller is expected
    /// to pass something distinct from the reserved names.
    ///
    /// # Example
    /// ```
    /// use RustedQuad::formula::expr_tree::ExpressionTree;
    /// // (* pi (sqr x)) <=> pi*x^2
    /// let tree = ExpressionTree::parse("(* pi (sqr x))", "x").unwrap();
    /// let y = tree.eval(2.0).unwrap();
    /// assert!((y - 4.0 * std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn parse(formula: &str, variable: &str) -> Result<ExpressionTree, ParseError> {
        let trimmed = formula.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyFormula);
        }

        check_parentheses(trimmed)?;

        let mut parser = Parser {
            variable,
            nodes: Vec::new(),
        };
        let root = parser.parse_group(trimmed)?;

        Ok(ExpressionTree::from_parts(
            parser.nodes,
            root,
            variable.to_string(),
        ))
    }
}
