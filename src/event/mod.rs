//! Event catalog, selection and effects

mod catalog;
mod processor;
pub mod selector;


pub use catalog::*;
pub use processor::*;
pub use selector::*;
