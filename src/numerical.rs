#![allow(non_snake_case)]
/// # Newton-Cotes integration
/// a module that numerically integrates a parsed formula over an interval
/// with composite Newton-Cotes rules of approximation order 0 to 5
///# Example#
/// ```
/// use RustedQuad::formula::expr_tree::ExpressionTree;
/// use RustedQuad::numerical::integral::{ApproxOrder, Grain, Integral};
/// // integral of x over [0, 1] is 0.5
/// let tree = ExpressionTree::parse("(+ x 0)", "x").unwrap();
/// let integral = Integral::new(tree, ApproxOrder::Order1, Grain::Coarse);
/// let value = integral.integrate(0.0, 1.0).unwrap();
/// assert!((value - 0.5).abs() < 1e-6);
/// ```
pub mod integral;
