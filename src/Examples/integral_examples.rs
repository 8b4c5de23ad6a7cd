//MIT License
#![allow(non_snake_case)]

use crate::Utils::logger::init_logger;
use crate::formula::expr_tree::ExpressionTree;
use crate::formula::utils::linspace;
use crate::numerical::integral::{ApproxOrder, Grain, Integral};
use std::f64::consts::PI;

#[allow(dead_code)]
pub fn integral_examples(example: usize) {
    match example {
        0 => {
            // PARSE AND EVALUATE
            // parse a formula in normal Polish notation into an expression tree
            let input = "(+ (/ (* 2.3 x) (log x)) (sin x) 8)"; // 2.3*x/log(x) + sin(x) + 8
            let tree = ExpressionTree::parse(input, "x").unwrap();
            println!("parsed formula: {}", tree);
            println!("arena holds {} nodes, root at {}", tree.len(), tree.root());
            // the tree is immutable: evaluate it as many times as you like
            for x in linspace(2.0, 4.0, 5) {
                println!("f({}) = {}", x, tree.eval(x).unwrap());
            }
        }
        1 => {
            // BASIC INTEGRATION
            // area of the unit half-wave of sin is exactly 2
            let tree = ExpressionTree::parse("(sin x)", "x").unwrap();
            let integral = Integral::new(tree, ApproxOrder::Order2, Grain::Medium);
            let value = integral.integrate(0.0, PI).unwrap();
            println!("integral of sin over [0, pi] = {}", value);

            // pi*x^2 over [0, 1] gives pi/3
            let tree = ExpressionTree::parse("(* pi (sqr x))", "x").unwrap();
            let integral = Integral::new(tree, ApproxOrder::Order3, Grain::Coarse);
            let value = integral.integrate(0.0, 1.0).unwrap();
            println!("integral of pi*x^2 over [0, 1] = {} (pi/3 = {})", value, PI / 3.0);
        }
        2 => {
            // SWAPPED LIMITS AND ERROR PROPAGATION
            // warnings go through the log facade, so install a logger first
            init_logger("warn");
            let tree = ExpressionTree::parse("(+ x 0)", "x").unwrap();
            let integral = Integral::new(tree, ApproxOrder::Order1, Grain::Coarse);
            // limits out of order: a warning is printed and the walk proceeds
            // forward from 1 with the positive step magnitude
            let value = integral.integrate(1.0, 0.0).unwrap();
            println!("integral with swapped limits = {}", value);

            // evaluation errors abort the whole integration
            let tree = ExpressionTree::parse("(sqrt x)", "x").unwrap();
            let integral = Integral::new(tree, ApproxOrder::Order1, Grain::Coarse);
            match integral.integrate(-1.0, 1.0) {
                Ok(value) => println!("integral = {}", value),
                Err(e) => println!("integration failed: {}", e),
            }
        }
        3 => {
            // PARALLEL INTEGRATION ON A FINE GRAIN
            // 600 000 evaluator calls per integration at order 5, fine grain;
            // the read-only tree is shared by all rayon workers
            let tree = ExpressionTree::parse("(exp (* -1 (sqr x)))", "x").unwrap();
            let integral = Integral::new(tree, ApproxOrder::Order5, Grain::Fine);
            let serial = integral.integrate(0.0, 5.0).unwrap();
            let parallel = integral.integrate_par(0.0, 5.0).unwrap();
            println!("gauss integral, serial   = {}", serial);
            println!("gauss integral, parallel = {}", parallel);
            println!("sqrt(pi)/2               = {}", PI.sqrt() / 2.0);
        }
        _ => {
            println!("there is no example with number {}", example);
        }
    }
}
