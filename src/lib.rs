#![allow(nonstandard_style)]

//! An arithmetic expression evaluator built on a two-stack shunting yard.
//!
//! Besides `+ - * / ^ %` it understands `@` (average), `$` (max), `&` (min),
//! `~` (negation), and the postfix `!` (factorial) and `#` (digit sum).

pub mod error_handling;
pub mod evaluating;
pub mod math_functions;
pub mod numbers;
pub mod operators;
pub mod parsing;
pub mod scanning;

pub use error_handling::{CalcError, DomainError, Result};
pub use numbers::Number;
pub use parsing::evaluate;
