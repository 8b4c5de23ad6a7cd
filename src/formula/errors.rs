use crate::formula::expr_tree::{Arity, Op};
use thiserror::Error;

/// Errors raised while parsing a prefix-notation formula. Parsing either
/// produces a complete tree or one of these; nothing is silently recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Input string (or a parenthesized group) is empty or blank.
    #[error("formula is empty")]
    EmptyFormula,
    /// Parenthesis depth went negative; `index` is the byte position of the
    /// extra closing parenthesis.
    #[error("extra closing parenthesis at {index}")]
    UnbalancedParentheses { index: usize },
    /// The string ended with open groups still unclosed, or contained no
    /// parentheses at all.
    #[error("unclosed parentheses")]
    UnclosedParentheses,
    /// The leading token of a group is not in the operator table.
    #[error("unknown operation type '{token}'")]
    UnknownOperator { token: String },
    /// Operand count does not match the operator's arity class.
    #[error("incorrect number of operands in the '{operator}' operation: expected {expected}, got {actual}")]
    ArityError {
        operator: Op,
        expected: Arity,
        actual: usize,
    },
    /// A closing `)` must be separated from the next token by whitespace.
    #[error("whitespace between brackets is missed")]
    MissingSeparator,
    /// Token is neither the variable, nor `pi`, nor a valid numeric literal.
    #[error("invalid number format '{token}'")]
    InvalidLiteral { token: String },
}

/// Errors raised while evaluating a tree. The first one aborts the whole
/// computation, including any integration driving the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative value")]
    NegativeSquareRoot,
    #[error("logarithm of a negative value")]
    NegativeLogarithm,
}
