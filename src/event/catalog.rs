//! Event catalog

use crate::character::{Attributes, Stat};
use crate::condition::cache::{check_condition, get_or_parse};
use crate::condition::ConditionContext;
use crate::config::{CatalogConfig, EventConfig, Tone};
use crate::error::{KowLifeError, Result};
use smallvec::SmallVec;

/// Stat deltas of one event; no event touches more than a few stats
pub type Effect = SmallVec<[(Stat, i32); 4]>;

pub const CHILDHOOD_EVENT: &str = "Learned something new as a child.";

/// A possible yearly occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct LifeEvent {
    pub description: String,
    pub effect: Effect,
    pub tone: Tone,
    /// Predicate over the entered age and current stats; `None` always applies
    pub applies_when: Option<String>,
}

impl LifeEvent {
    pub fn new(description: impl Into<String>, effect: &[(Stat, i32)], tone: Tone) -> Self {
        Self {
            description: description.into(),
            effect: effect.iter().copied().collect(),
            tone,
            applies_when: None,
        }
    }

    /// Restrict the event with a predicate such as `"age>=18"`
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.applies_when = Some(condition.into());
        self
    }

    /// Delta this event applies to `stat` (0 when untouched)
    pub fn delta(&self, stat: Stat) -> i32 {
        self.effect
            .iter()
            .filter(|(s, _)| *s == stat)
            .map(|(_, d)| *d)
            .sum()
    }

    /// Whether the event can happen to someone entering `age` with `attributes`.
    ///
    /// A predicate that fails to evaluate counts as not applicable.
    pub fn applies_at(&self, age: u32, attributes: &Attributes) -> bool {
        let Some(ref condition) = self.applies_when else {
            return true;
        };
        let ctx = ConditionContext::new(age, attributes);
        match check_condition(condition, &ctx) {
            Ok(applies) => applies,
            Err(err) => {
                log::warn!("event '{}' skipped: {}", self.description, err);
                false
            }
        }
    }
}

impl From<EventConfig> for LifeEvent {
    fn from(config: EventConfig) -> Self {
        Self {
            description: config.description,
            effect: config.effect.into_iter().collect(),
            tone: config.tone,
            applies_when: config
                .applies_when
                .filter(|condition| !condition.trim().is_empty()),
        }
    }
}

/// The forced event for early childhood
pub fn default_childhood_event() -> LifeEvent {
    LifeEvent::new(CHILDHOOD_EVENT, &[(Stat::Happiness, 5)], Tone::Positive)
}

/// The built-in general table
pub fn default_events() -> Vec<LifeEvent> {
    vec![
        LifeEvent::new("Went to school.", &[(Stat::Happiness, 5)], Tone::Positive),
        LifeEvent::new("Had a birthday party.", &[(Stat::Happiness, 10)], Tone::Positive),
        LifeEvent::new(
            "Faced a minor accident.",
            &[(Stat::Health, -10), (Stat::Happiness, -5)],
            Tone::Negative,
        ),
        LifeEvent::new(
            "Won a small lottery.",
            &[(Stat::Wealth, 50), (Stat::Happiness, 15)],
            Tone::Positive,
        ),
        LifeEvent::new("Gained new knowledge.", &[(Stat::Intelligence, 5)], Tone::Positive),
    ]
}

/// Fixed, ordered event table plus the childhood override
#[derive(Debug, Clone, PartialEq)]
pub struct EventCatalog {
    events: Vec<LifeEvent>,
    childhood_event: LifeEvent,
}

impl EventCatalog {
    /// Build a catalog, rejecting an empty table or unparsable predicates
    pub fn new(events: Vec<LifeEvent>, childhood_event: LifeEvent) -> Result<Self> {
        if events.is_empty() {
            return Err(KowLifeError::EmptyCatalog);
        }
        for event in events.iter().chain(std::iter::once(&childhood_event)) {
            if let Some(ref condition) = event.applies_when {
                get_or_parse(condition)?;
            }
        }
        Ok(Self {
            events,
            childhood_event,
        })
    }

    /// Build from configuration, filling gaps with the built-in table
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        let events = match config.events {
            Some(events) => events.into_iter().map(LifeEvent::from).collect(),
            None => default_events(),
        };
        let childhood_event = config
            .childhood_event
            .map(LifeEvent::from)
            .unwrap_or_else(default_childhood_event);
        Self::new(events, childhood_event)
    }

    pub fn events(&self) -> &[LifeEvent] {
        &self.events
    }

    pub fn childhood_event(&self) -> &LifeEvent {
        &self.childhood_event
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// General events applicable at `age`, in catalog order
    pub fn eligible(&self, age: u32, attributes: &Attributes) -> Vec<&LifeEvent> {
        self.events
            .iter()
            .filter(|event| event.applies_at(age, attributes))
            .collect()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self {
            events: default_events(),
            childhood_event: default_childhood_event(),
        }
    }
}
