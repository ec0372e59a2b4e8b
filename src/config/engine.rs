//! Engine tunables

use crate::error::{KowLifeError, Result};
use serde::{Deserialize, Serialize};

/// Age at which progression stops
pub const DEFAULT_MAX_AGE: u32 = 100;
/// Entering any age up to this one always gets the childhood event
pub const DEFAULT_CHILDHOOD_AGE: u32 = 5;
/// How many log entries the presentation shows by default
pub const DEFAULT_LOG_DISPLAY_LIMIT: usize = 10;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_age: u32,
    pub childhood_age: u32,
    pub log_display_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            childhood_age: DEFAULT_CHILDHOOD_AGE,
            log_display_limit: DEFAULT_LOG_DISPLAY_LIMIT,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_age == 0 {
            return Err(KowLifeError::InvalidConfig(
                "max_age must be positive".to_string(),
            ));
        }
        if self.childhood_age > self.max_age {
            return Err(KowLifeError::InvalidConfig(format!(
                "childhood_age {} exceeds max_age {}",
                self.childhood_age, self.max_age
            )));
        }
        Ok(())
    }
}
