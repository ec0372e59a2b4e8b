//! Progression engine and session module

mod engine;
mod session;


pub use engine::*;
pub use session::*;
