//! Configuration for the event catalog and engine
//!
//! A catalog is described as JSON:
//!
//! ```json
//! {
//!   "events": [
//!     {"description": "Went to school.", "effect": {"happiness": 5}, "tone": "positive"},
//!     {"description": "Got a job.", "effect": {"wealth": 500}, "applies_when": "age>=18"}
//!   ],
//!   "childhood_event": {"description": "Learned something new as a child.", "effect": {"happiness": 5}},
//!   "engine": {"max_age": 100, "childhood_age": 5, "log_display_limit": 10}
//! }
//! ```
//!
//! Every key is optional. Missing `events` or `childhood_event` fall back to
//! the built-in catalog; an explicitly empty `events` list is rejected when
//! the catalog is built.

mod engine;
mod event;

pub use engine::*;
pub use event::*;

use crate::error::Result;
use serde::Deserialize;

/// Full catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub events: Option<Vec<EventConfig>>,
    #[serde(default, alias = "childhoodEvent")]
    pub childhood_event: Option<EventConfig>,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Parse a catalog configuration from JSON
pub fn load_catalog_json(json: &str) -> Result<CatalogConfig> {
    let config: CatalogConfig = serde_json::from_str(json)?;
    config.engine.validate()?;
    log::debug!(
        "loaded catalog config: {} events, custom childhood event: {}",
        config.events.as_ref().map_or(0, Vec::len),
        config.childhood_event.is_some()
    );
    Ok(config)
}
