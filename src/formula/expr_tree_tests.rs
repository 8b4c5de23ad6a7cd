use crate::formula::errors::EvalError;
use crate::formula::expr_tree::{Arity, ExpressionTree, Op};
use std::f64::consts::PI;
use std::thread;

#[test]
fn test_eval_is_deterministic_and_nondestructive() {
    let tree = ExpressionTree::parse("(+ (* pi (sqr x)) (sin x))", "x").unwrap();
    let first = tree.eval(1.3).unwrap();
    // the tree must survive arbitrarily many evaluations unchanged
    for _ in 0..1000 {
        assert_eq!(tree.eval(1.3).unwrap(), first);
    }
    let snapshot = tree.clone();
    let _ = tree.eval(42.0).unwrap();
    assert_eq!(tree, snapshot);
}

#[test]
fn test_eval_order_of_arguments_does_not_matter() {
    let tree = ExpressionTree::parse("(exp (- x 1))", "x").unwrap();
    let at_2_first = tree.eval(2.0).unwrap();
    let _ = tree.eval(5.0).unwrap();
    let _ = tree.eval(-3.0).unwrap();
    assert_eq!(tree.eval(2.0).unwrap(), at_2_first);
    assert_eq!(at_2_first, 1.0_f64.exp());
}

#[test]
fn test_multiply_folds_all_operands() {
    let tree = ExpressionTree::parse("(* 2 3 4 x)", "x").unwrap();
    assert_eq!(tree.eval(0.5).unwrap(), 12.0);
}

#[test]
fn test_subtract_and_divide() {
    let tree = ExpressionTree::parse("(- 5 2)", "x").unwrap();
    assert_eq!(tree.eval(0.0).unwrap(), 3.0);
    let tree = ExpressionTree::parse("(/ x 4)", "x").unwrap();
    assert_eq!(tree.eval(10.0).unwrap(), 2.5);
}

#[test]
fn test_division_by_zero_denominator_only() {
    // zero numerator is fine
    let tree = ExpressionTree::parse("(/ 0 x)", "x").unwrap();
    assert_eq!(tree.eval(2.0).unwrap(), 0.0);
    // zero denominator is an error, reported eagerly
    let tree = ExpressionTree::parse("(+ (/ 1 x) 100)", "x").unwrap();
    assert_eq!(tree.eval(0.0), Err(EvalError::DivisionByZero));
}

#[test]
fn test_power_with_fractional_and_negative_exponents() {
    let tree = ExpressionTree::parse("(pow x 0.5)", "x").unwrap();
    assert_eq!(tree.eval(2.0).unwrap(), 2.0_f64.powf(0.5));
    let tree = ExpressionTree::parse("(pow x -1)", "x").unwrap();
    assert_eq!(tree.eval(4.0).unwrap(), 0.25);
}

#[test]
fn test_square_and_square_root() {
    let tree = ExpressionTree::parse("(sqr x)", "x").unwrap();
    assert_eq!(tree.eval(-3.0).unwrap(), 9.0);
    let tree = ExpressionTree::parse("(sqrt (sqr x))", "x").unwrap();
    assert_eq!(tree.eval(-3.0).unwrap(), 3.0);
}

#[test]
fn test_trig_in_radians() {
    let tree = ExpressionTree::parse("(sin x)", "x").unwrap();
    assert!((tree.eval(PI / 2.0).unwrap() - 1.0).abs() < 1e-15);
    let tree = ExpressionTree::parse("(cos pi)", "x").unwrap();
    assert!((tree.eval(0.0).unwrap() + 1.0).abs() < 1e-15);
    let tree = ExpressionTree::parse("(tan x)", "x").unwrap();
    assert!((tree.eval(PI / 4.0).unwrap() - 1.0).abs() < 1e-15);
}

#[test]
fn test_cot_at_zero_is_infinite_not_an_error() {
    // unlike division, cot propagates the infinity as a regular float
    let tree = ExpressionTree::parse("(cot x)", "x").unwrap();
    let y = tree.eval(0.0).unwrap();
    assert!(y.is_infinite() && y.is_sign_positive());
}

#[test]
fn test_log_boundary() {
    let tree = ExpressionTree::parse("(log x)", "x").unwrap();
    // negative argument is an error
    assert_eq!(tree.eval(-0.5), Err(EvalError::NegativeLogarithm));
    // zero is not rejected: log(0) = -inf propagates as a float
    let at_zero = tree.eval(0.0).unwrap();
    assert!(at_zero.is_infinite() && at_zero.is_sign_negative());
    assert_eq!(tree.eval(std::f64::consts::E).unwrap(), 1.0);
}

#[test]
fn test_exp_of_log() {
    let tree = ExpressionTree::parse("(exp (log x))", "x").unwrap();
    assert!((tree.eval(7.0).unwrap() - 7.0).abs() < 1e-12);
}

#[test]
fn test_concurrent_evaluation_of_shared_tree() {
    let tree = ExpressionTree::parse("(+ (sqr x) (* 2 x) 1)", "x").unwrap();
    let expected: Vec<f64> = (0..8).map(|i| (i as f64 + 1.0).powi(2)).collect();

    thread::scope(|s| {
        let mut handles = Vec::new();
        for i in 0..8 {
            let tree_ref = &tree;
            handles.push(s.spawn(move || tree_ref.eval(i as f64).unwrap()));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), expected[i]);
        }
    });
}

#[test]
fn test_arity_table() {
    assert_eq!(Op::Divide.arity(), Arity::Exactly(2));
    assert_eq!(Op::Subtract.arity(), Arity::Exactly(2));
    assert_eq!(Op::Power.arity(), Arity::Exactly(2));
    assert_eq!(Op::Multiply.arity(), Arity::AtLeast(2));
    assert_eq!(Op::Add.arity(), Arity::AtLeast(2));
    for op in [
        Op::Square,
        Op::SquareRoot,
        Op::Sin,
        Op::Cos,
        Op::Tan,
        Op::Cot,
        Op::Exp,
        Op::Log,
    ] {
        assert_eq!(op.arity(), Arity::Exactly(1));
    }
}

#[test]
fn test_token_roundtrip() {
    for op in [
        Op::Multiply,
        Op::Divide,
        Op::Add,
        Op::Subtract,
        Op::Square,
        Op::SquareRoot,
        Op::Power,
        Op::Sin,
        Op::Cos,
        Op::Tan,
        Op::Cot,
        Op::Exp,
        Op::Log,
    ] {
        assert_eq!(Op::from_token(op.token()), Some(op));
    }
    assert_eq!(Op::from_token("pi"), None);
    assert_eq!(Op::from_token("ln"), None);
}
