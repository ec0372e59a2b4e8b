//! Character model and creation

mod creation;
mod state;

#[cfg(test)]
mod property_tests;

pub use creation::*;
pub use state::*;
