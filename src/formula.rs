#![allow(non_snake_case)]
/// a module turns a String formula in normal Polish (prefix) notation
/// into an immutable expression tree and evaluates it
///
///# Example
/// ```
/// use RustedQuad::formula::expr_tree::ExpressionTree;
/// let input = "(+ (/ (* 2.3 x) (log x)) (sin x) 8)"; // 2.3*x/log(x) + sin(x) + 8
/// let tree = ExpressionTree::parse(input, "x").unwrap();
/// println!("parsed formula: {}", tree);
/// let value = tree.eval(2.0).unwrap();
/// println!("{} at x = 2 gives {}", input, value);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Expression tree
/// a module
/// 1) stores a parsed formula as an arena of nodes addressed by index
/// 2) evaluates the tree at a given value of the free variable, any number of times
/// 3) prints the tree back in canonical prefix form
///# Example#
/// ```
/// use RustedQuad::formula::expr_tree::ExpressionTree;
/// let tree = ExpressionTree::parse("(* pi (sqr x))", "x").unwrap();
/// // the tree is never consumed, evaluate as many times as you need
/// let y1 = tree.eval(2.0).unwrap();
/// let y2 = tree.eval(2.0).unwrap();
/// assert_eq!(y1, y2);
/// ```
pub mod expr_tree;
/// structured error taxonomy: ParseError for parsing, EvalError for evaluation
pub mod errors;
/// the collection of utility functions mainly for bracket parsing and proceeding
pub mod utils;

#[cfg(test)]
pub mod expr_tree_tests;
