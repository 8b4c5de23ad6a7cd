#![allow(non_snake_case)]
/// runnable numbered examples of parsing and integrating prefix formulas
pub mod integral_examples;
