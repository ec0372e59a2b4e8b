//! Education and career progression

mod education;

pub use education::*;
