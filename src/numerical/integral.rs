//! # Newton-Cotes Integral Module
//!
//! Composite numerical integration of a parsed formula with closed
//! Newton-Cotes rules. The integration interval is partitioned into `grain`
//! sub-intervals; on each of them the rule of the chosen approximation order
//! samples the function at `order + 1` equally spaced points and accumulates
//! a weighted sum, so one integration costs `grain * (order + 1)` evaluator
//! calls (up to 600 000 for the fine grain at order 5). This is the hot path
//! the read-only [`ExpressionTree`] arena exists for.
//!
//! ## Main Structures
//! - [`ApproxOrder`] - approximation order 0..5, selects a fixed weight row
//! - [`Grain`] - subdivision count: coarse 1000, medium 10000, fine 100000,
//!   or any positive custom value
//! - [`Integral`] - formula + order + grain, with whole-value setters and
//!   serial/parallel `integrate` entry points

use crate::formula::errors::EvalError;
use crate::formula::expr_tree::ExpressionTree;
use log::warn;
use rayon::prelude::*;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Weight rows of the closed Newton-Cotes rules, indexed by order.
pub const NEWTON_COTES_COEFFS: [&[f64]; 6] = [
    &[1.0],                                     // ORDER_0
    &[1.0, 1.0],                                // ORDER_1
    &[1.0, 4.0, 1.0],                           // ORDER_2
    &[1.0, 3.0, 3.0, 1.0],                      // ORDER_3
    &[7.0, 32.0, 12.0, 32.0, 7.0],              // ORDER_4
    &[19.0, 75.0, 50.0, 50.0, 75.0, 19.0],      // ORDER_5
];

/// Sums of the weight rows above.
pub const NEWTON_COTES_COEFF_SUMS: [f64; 6] = [1.0, 2.0, 6.0, 8.0, 90.0, 288.0];

/// Available approximation orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum ApproxOrder {
    #[strum(serialize = "0")]
    Order0 = 0,
    #[strum(serialize = "1")]
    Order1 = 1,
    #[strum(serialize = "2")]
    Order2 = 2,
    #[strum(serialize = "3")]
    Order3 = 3,
    #[strum(serialize = "4")]
    Order4 = 4,
    #[strum(serialize = "5")]
    Order5 = 5,
}

impl ApproxOrder {
    pub fn order(self) -> usize {
        self as usize
    }

    pub fn from_order(order: usize) -> Option<ApproxOrder> {
        match order {
            0 => Some(ApproxOrder::Order0),
            1 => Some(ApproxOrder::Order1),
            2 => Some(ApproxOrder::Order2),
            3 => Some(ApproxOrder::Order3),
            4 => Some(ApproxOrder::Order4),
            5 => Some(ApproxOrder::Order5),
            _ => None,
        }
    }
}

/// Fineness of the interval partition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Grain {
    Coarse,
    Medium,
    Fine,
    /// Any positive subdivision count, for callers that need something
    /// between (or beyond) the three named presets.
    #[strum(disabled)]
    Custom(usize),
}

impl Grain {
    pub fn grain(self) -> usize {
        match self {
            Grain::Coarse => 1_000,
            Grain::Medium => 10_000,
            Grain::Fine => 100_000,
            Grain::Custom(n) => n,
        }
    }
}

/// Numerical integration of a parsed formula by composite Newton-Cotes rules.
///
/// # Example
/// ```
/// use RustedQuad::formula::expr_tree::ExpressionTree;
/// use RustedQuad::numerical::integral::{ApproxOrder, Grain, Integral};
/// let tree = ExpressionTree::parse("(sin x)", "x").unwrap();
/// let integral = Integral::new(tree, ApproxOrder::Order2, Grain::Coarse);
/// // integral of sin over [0, pi] is 2
/// let value = integral.integrate(0.0, std::f64::consts::PI).unwrap();
/// assert!((value - 2.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Integral {
    /// formula of the integrand
    pub func: ExpressionTree,
    /// approximation order [0 - 5]
    order: usize,
    /// number of sub-intervals the domain is partitioned into
    grain: usize,
}

impl Integral {
    pub fn new(func: ExpressionTree, order: ApproxOrder, grain: Grain) -> Integral {
        let grain_value = grain.grain();
        assert!(grain_value > 0, "Grain should be a positive number.");
        Integral {
            func,
            order: order.order(),
            grain: grain_value,
        }
    }

    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    /// Replace the integrand formula.
    pub fn set_formula(&mut self, func: ExpressionTree) {
        self.func = func;
    }

    /// Replace the approximation order.
    pub fn set_order(&mut self, order: ApproxOrder) {
        self.order = order.order();
    }

    /// Replace the partition fineness.
    pub fn set_grain(&mut self, grain: Grain) {
        let grain_value = grain.grain();
        assert!(grain_value > 0, "Grain should be a positive number.");
        self.grain = grain_value;
    }

    /// Replace the approximation order from its config-style string form
    /// ("0" .. "5").
    pub fn set_order_from_str(&mut self, order: &str) -> Result<(), strum::ParseError> {
        self.order = ApproxOrder::from_str(order)?.order();
        Ok(())
    }

    /// Replace the partition fineness from its config-style string form
    /// ("coarse", "medium", "fine").
    pub fn set_grain_from_str(&mut self, grain: &str) -> Result<(), strum::ParseError> {
        self.grain = Grain::from_str(grain)?.grain();
        Ok(())
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn grain(&self) -> usize {
        self.grain
    }

    ////////////////////////////INTEGRATION///////////////////////////////////////////////////////////////
    /// Step of the sub-interval walk.
    ///
    /// When the limits come out of order the computation is not blocked: a
    /// warning is logged and the positive magnitude `(from - to) / grain` is
    /// used, the outer loop still walking forward from `from`. The bounds
    /// are deliberately not reordered.
    pub fn step(&self, from: f64, to: f64) -> f64 {
        if from > to {
            warn!("Incorrect interval limits: Limits are swapped");
            (from - to) / self.grain as f64
        } else {
            (to - from) / self.grain as f64
        }
    }

    // delta between sample points and the normalizing coefficient of the rule
    fn rule(&self, step: f64) -> (f64, f64) {
        if self.order == 0 {
            (step, step / NEWTON_COTES_COEFF_SUMS[0])
        } else {
            let delta = step / self.order as f64;
            (
                delta,
                (self.order as f64 * delta) / NEWTON_COTES_COEFF_SUMS[self.order],
            )
        }
    }

    /// Produce numerical integration over the interval `[from, to]`.
    ///
    /// The running sum accumulates all `grain * (order + 1)` weighted samples
    /// and is scaled by the normalizing coefficient once at the end. The
    /// first evaluation error aborts the whole integration: no partial
    /// integral is ever returned.
    pub fn integrate(&self, from: f64, to: f64) -> Result<f64, EvalError> {
        let step = self.step(from, to);
        let (delta, main_coeff) = self.rule(step);
        let coeffs = NEWTON_COTES_COEFFS[self.order];

        let mut integral = 0.0;
        let mut x = from;

        for _ in 0..self.grain {
            for (j, coeff) in coeffs.iter().enumerate() {
                integral += coeff * self.func.eval(x + j as f64 * delta)?;
            }
            x += step;
        }

        Ok(integral * main_coeff)
    }

    /// Parallel version of [`integrate`](Integral::integrate): the outer loop
    /// over sub-intervals is split across rayon's thread pool. The expression
    /// tree is read-only, so all workers share it without locking. Same rule
    /// and same abort-on-first-error semantics as the serial path; each
    /// sub-interval start is computed as `from + i * step` instead of the
    /// running accumulation of the serial loop.
    pub fn integrate_par(&self, from: f64, to: f64) -> Result<f64, EvalError> {
        let step = self.step(from, to);
        let (delta, main_coeff) = self.rule(step);
        let coeffs = NEWTON_COTES_COEFFS[self.order];

        let integral = (0..self.grain)
            .into_par_iter()
            .map(|i| {
                let x = from + i as f64 * step;
                let mut sum = 0.0;
                for (j, coeff) in coeffs.iter().enumerate() {
                    sum += coeff * self.func.eval(x + j as f64 * delta)?;
                }
                Ok(sum)
            })
            .try_reduce(|| 0.0, |a, b| Ok(a + b))?;

        Ok(integral * main_coeff)
    }
}

/// One-shot convenience wrapper: integrate `tree` over `[x_from, x_to]` with
/// the given rule order and partition fineness.
pub fn integrate(
    tree: &ExpressionTree,
    x_from: f64,
    x_to: f64,
    order: ApproxOrder,
    grain: Grain,
) -> Result<f64, EvalError> {
    Integral::new(tree.clone(), order, grain).integrate(x_from, x_to)
}
