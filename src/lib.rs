//! KowLife Core - life progression engine for the KowLife simulator
//!
//! A character is created once with randomized stats and then advanced one
//! year at a time. Each step draws a life event from a fixed catalog,
//! applies its stat deltas with clamping and appends a line to the
//! character's log. Every step returns a new `Character` value; the only
//! non-determinism is the event draw, which callers inject as a random
//! source or a fixed index.
//!
//! ```
//! use kowlife_core::character::Gender;
//! use kowlife_core::simulator::LifeEngine;
//! use rand::SeedableRng;
//!
//! let engine = LifeEngine::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let baby = engine.create("Ava", "Japan", Gender::Female, &mut rng);
//! let (one, line) = engine.advance(&baby, &mut rng).into_parts();
//! assert_eq!(one.age(), 1);
//! assert_eq!(line.as_deref(), Some("Age 1: Learned something new as a child."));
//! ```
//!
//! Python bindings are built with the `python` feature.

pub mod career;
pub mod character;
pub mod condition;
pub mod config;
pub mod error;
pub mod event;
pub mod simulator;

#[cfg(feature = "python")]
mod python;

pub use crate::character::{create, create_random, Attributes, Character, Gender, Stat};
pub use crate::error::{KowLifeError, Result};
pub use crate::event::{EventCatalog, LifeEvent};
pub use crate::simulator::{Advance, LifeEngine, LifeSession};
