//! # Expression Tree Module
//!
//! This module provides the core data structure for parsed prefix-notation
//! formulas and the evaluator that reduces it to a number. It is the
//! foundation the numerical integrator is built on: a formula is parsed once
//! and then evaluated up to hundreds of thousands of times.
//!
//! ## Main Structures
//!
//! ### `Op` Enum
//! The fixed operator table of the formula language: arithmetic (`Multiply`,
//! `Divide`, `Add`, `Subtract`, `Power`), powers and roots (`Square`,
//! `SquareRoot`), trigonometry (`Sin`, `Cos`, `Tan`, `Cot`) and
//! exponential/logarithm (`Exp`, `Log`). Each operator knows its textual
//! token and its arity class.
//!
//! ### `Node` Enum
//! One arena slot: `Variable`, `Constant(f64)` or `Operation(Op, children)`
//! where children are indices into the same arena.
//!
//! ### `ExpressionTree`
//! Owns all nodes in a `Vec` in pre-order (an operation node is immediately
//! followed by its operand subtrees, left to right) with a designated root.
//! The tree is read-only after construction: `eval` takes `&self` and never
//! removes or rewrites nodes, so the same tree may be evaluated concurrently
//! from many threads without locking.

use crate::formula::errors::EvalError;
use std::fmt;

/// Operator kinds of the formula language.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Multiply,
    Divide,
    Add,
    Subtract,
    Square,
    SquareRoot,
    Power,
    Sin,
    Cos,
    Tan,
    Cot,
    Exp,
    Log,
}

/// Arity class of an operator: a fixed operand count or a lower bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// Checks whether the observed operand count satisfies this class.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl Op {
    /// Resolves a textual token against the operator table.
    ///
    /// Direct match expression instead of positional lookup in a string
    /// array, so behavior does not depend on array order.
    pub fn from_token(token: &str) -> Option<Op> {
        match token {
            "*" => Some(Op::Multiply),
            "/" => Some(Op::Divide),
            "+" => Some(Op::Add),
            "-" => Some(Op::Subtract),
            "sqr" => Some(Op::Square),
            "sqrt" => Some(Op::SquareRoot),
            "pow" => Some(Op::Power),
            "sin" => Some(Op::Sin),
            "cos" => Some(Op::Cos),
            "tan" => Some(Op::Tan),
            "cot" => Some(Op::Cot),
            "exp" => Some(Op::Exp),
            "log" => Some(Op::Log),
            _ => None,
        }
    }

    /// Textual token of the operator, inverse of `from_token`.
    pub fn token(&self) -> &'static str {
        match self {
            Op::Multiply => "*",
            Op::Divide => "/",
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Square => "sqr",
            Op::SquareRoot => "sqrt",
            Op::Power => "pow",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Cot => "cot",
            Op::Exp => "exp",
            Op::Log => "log",
        }
    }

    /// Arity class: `/`, `-`, `pow` take exactly 2 operands, `*` and `+` take
    /// 2 or more, every unary function takes exactly 1.
    pub fn arity(&self) -> Arity {
        match self {
            Op::Divide | Op::Subtract | Op::Power => Arity::Exactly(2),
            Op::Multiply | Op::Add => Arity::AtLeast(2),
            _ => Arity::Exactly(1),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One slot of the expression arena.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// The free variable of the formula.
    Variable,
    /// Numerical constant value (literals and `pi`).
    Constant(f64),
    /// Operation with the arena indices of its operands, left to right.
    Operation(Op, Vec<usize>),
}

/// Immutable, indexable representation of a parsed formula.
///
/// Built once by the parser, evaluated any number of times. All nodes live in
/// one arena in pre-order; children always sit at larger indices than their
/// parent, so the structure is a tree by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
    root: usize,
    variable: String,
}

impl ExpressionTree {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: usize, variable: String) -> ExpressionTree {
        ExpressionTree {
            nodes,
            root,
            variable,
        }
    }

    /// Index of the root node (0 for parser-built trees).
    pub fn root(&self) -> usize {
        self.root
    }

    /// Node at the given arena index.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Symbol of the free variable this formula was parsed with.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Evaluates the formula at the point x.
    ///
    /// Pure function of `(self, x)`: the tree is not mutated, repeated calls
    /// with the same x return identical results, and the same tree may be
    /// shared between threads.
    ///
    /// # Example
    /// ```
    /// use RustedQuad::formula::expr_tree::ExpressionTree;
    /// let tree = ExpressionTree::parse("(+ 1 2)", "x").unwrap();
    /// assert_eq!(tree.eval(100.0).unwrap(), 3.0);
    /// ```
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.eval_node(self.root, x)
    }

    fn eval_node(&self, index: usize, x: f64) -> Result<f64, EvalError> {
        match &self.nodes[index] {
            Node::Variable => Ok(x),
            Node::Constant(value) => Ok(*value),
            Node::Operation(op, children) => {
                let mut operand_values = Vec::with_capacity(children.len());
                for &child in children {
                    operand_values.push(self.eval_node(child, x)?);
                }
                Self::apply(*op, &operand_values)
            }
        }
    }

    // Operand counts are guaranteed by the parser's arity check, hence the
    // direct indexing below.
    fn apply(op: Op, vals: &[f64]) -> Result<f64, EvalError> {
        match op {
            Op::Multiply => Ok(vals.iter().product()),
            Op::Add => Ok(vals.iter().sum()),
            Op::Divide => {
                if vals[1] == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(vals[0] / vals[1])
                }
            }
            Op::Subtract => Ok(vals[0] - vals[1]),
            Op::Power => Ok(vals[0].powf(vals[1])),
            Op::Square => Ok(vals[0].powi(2)),
            Op::SquareRoot => {
                if vals[0] < 0.0 {
                    Err(EvalError::NegativeSquareRoot)
                } else {
                    Ok(vals[0].sqrt())
                }
            }
            Op::Sin => Ok(vals[0].sin()),
            Op::Cos => Ok(vals[0].cos()),
            Op::Tan => Ok(vals[0].tan()),
            // tan(a) == 0 gives +-inf here, propagated as a regular float
            Op::Cot => Ok(1.0 / vals[0].tan()),
            Op::Exp => Ok(vals[0].exp()),
            Op::Log => {
                if vals[0] < 0.0 {
                    Err(EvalError::NegativeLogarithm)
                } else {
                    // log(0) = -inf stays a float on purpose
                    Ok(vals[0].ln())
                }
            }
        }
    }

    fn fmt_node(&self, index: usize, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.nodes[index] {
            Node::Variable => write!(f, "{}", self.variable),
            Node::Constant(value) => write!(f, "{}", value),
            Node::Operation(op, children) => {
                write!(f, "({}", op)?;
                for &child in children {
                    write!(f, " ")?;
                    self.fmt_node(child, f)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Display implementation printing the tree back in canonical prefix form,
/// e.g. `(* pi (sqr x))`.
impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_node(self.root, f)
    }
}
