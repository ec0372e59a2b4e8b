//! LifeSession - one life owned by the presentation layer
//!
//! The session holds the current Character, an engine handle and a random
//! source, and swaps in the engine's new Character value on every action.
//! With the `python` feature it is exposed as a PyClass.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::career::{self, Education};
use crate::character::{Attributes, Character, Gender, Stat, STAT_MAX};
use crate::error::Result;

use super::{Advance, LifeEngine, LifeRun};

// ============================================================================
// Helper Functions
// ============================================================================

/// Render a 10-cell progress bar for a value in [0, 1]
#[inline]
pub fn render_progress_bar(progress: f64) -> String {
    let filled = (progress.clamp(0.0, 1.0) * 10.0).round() as usize;
    let filled = filled.min(10);
    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// One-line stat summary, e.g. "💗 50 | 😊 60 | 🧠 40 | 💰 $0"
pub fn render_stats(attributes: &Attributes) -> String {
    format!(
        "💗 {} | 😊 {} | 🧠 {} | 💰 ${}",
        attributes.health, attributes.happiness, attributes.intelligence, attributes.wealth
    )
}

/// Progress bars for the bounded stats
pub fn render_stat_bars(attributes: &Attributes) -> Vec<(Stat, String)> {
    Stat::BOUNDED
        .iter()
        .map(|&stat| {
            let progress = f64::from(attributes.get(stat)) / f64::from(STAT_MAX);
            (stat, render_progress_bar(progress))
        })
        .collect()
}

// ============================================================================
// LifeSession
// ============================================================================

/// A single life in play
#[cfg_attr(feature = "python", pyo3::pyclass)]
pub struct LifeSession {
    engine: Arc<LifeEngine>,
    character: Character,
    rng: StdRng,
    last_milestone: Option<Education>,
}

impl LifeSession {
    /// Wrap an existing character, seeding the random source from the OS
    pub fn new(engine: Arc<LifeEngine>, character: Character) -> Self {
        Self::with_rng(engine, character, StdRng::from_entropy())
    }

    pub fn with_rng(engine: Arc<LifeEngine>, character: Character, rng: StdRng) -> Self {
        Self {
            engine,
            character,
            rng,
            last_milestone: None,
        }
    }

    /// Create a newborn and start a session for it
    pub fn start(engine: Arc<LifeEngine>, name: &str, country: &str, gender: Gender) -> Self {
        let mut rng = StdRng::from_entropy();
        let character = engine.create(name, country, gender, &mut rng);
        Self::with_rng(engine, character, rng)
    }

    /// Start a session for a random newborn
    pub fn start_random(engine: Arc<LifeEngine>) -> Self {
        let mut rng = StdRng::from_entropy();
        let character = crate::character::create_random(&mut rng);
        Self::with_rng(engine, character, rng)
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Milestone reached on the latest age-up, if any
    pub fn last_milestone(&self) -> Option<Education> {
        self.last_milestone
    }

    pub fn is_complete(&self) -> bool {
        self.character.is_complete(self.engine.config().max_age)
    }

    /// Advance one year; returns the new log line, `None` past the age cap
    pub fn age_up(&mut self) -> Option<String> {
        let Advance {
            character,
            log_line,
            milestone,
            ..
        } = self.engine.advance(&self.character, &mut self.rng);
        self.character = character;
        self.last_milestone = milestone;
        log_line
    }

    /// Play out the rest of the life
    pub fn finish(&mut self) -> LifeRun {
        let run = self.engine.simulate_to_end(&self.character, &mut self.rng);
        self.character = run.character.clone();
        self.last_milestone = run.milestones.last().map(|&(_, level)| level);
        run
    }

    /// Log entries for display, capped at the configured limit
    pub fn recent_log(&self) -> &[String] {
        self.character
            .recent_log(self.engine.config().log_display_limit)
    }

    pub fn stats_line(&self) -> String {
        render_stats(self.character.attributes())
    }

    pub fn enroll(&mut self, level: Education) -> Result<()> {
        self.character = career::choose_education(&self.character, level)?;
        Ok(())
    }

    pub fn take_job(&mut self, job: &str) -> Result<()> {
        self.character = career::choose_career(&self.character, job, &mut self.rng)?;
        Ok(())
    }
}
