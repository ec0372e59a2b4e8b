//! Applicability predicates
//!
//! Parses predicate strings like "age>=18 & wealth>100" and evaluates them
//! against the age a character is entering plus its current attributes.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use parser::*;
