#![allow(non_snake_case)]
/// terminal logger initialization for the library and the demo binary
pub mod logger;
