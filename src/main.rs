#![allow(non_snake_case)]
use RustedQuad::Examples::integral_examples::integral_examples;

fn main() {
    let example = 1;
    integral_examples(example);
}
