//! Character state and attribute operations

use crate::career::{Career, Education};
use crate::error::{KowLifeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound shared by every stat
pub const STAT_MIN: i32 = 0;
/// Upper bound for the four bounded stats (wealth has none)
pub const STAT_MAX: i32 = 100;

/// Numeric trait of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Looks,
    Intelligence,
    Health,
    Happiness,
    #[serde(alias = "money")]
    Wealth,
}

impl Stat {
    /// All stats in display order
    pub const ALL: [Stat; 5] = [
        Stat::Health,
        Stat::Happiness,
        Stat::Intelligence,
        Stat::Looks,
        Stat::Wealth,
    ];

    /// Stats clamped to [STAT_MIN, STAT_MAX]
    pub const BOUNDED: [Stat; 4] = [Stat::Looks, Stat::Intelligence, Stat::Health, Stat::Happiness];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Stat::Looks => "looks",
            Stat::Intelligence => "intelligence",
            Stat::Health => "health",
            Stat::Happiness => "happiness",
            Stat::Wealth => "wealth",
        }
    }

    #[inline]
    pub fn is_bounded(self) -> bool {
        !matches!(self, Stat::Wealth)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stat {
    type Err = KowLifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "looks" => Ok(Stat::Looks),
            "intelligence" => Ok(Stat::Intelligence),
            "health" => Ok(Stat::Health),
            "happiness" => Ok(Stat::Happiness),
            // "money" is the name one variant of the game used for wealth
            "wealth" | "money" => Ok(Stat::Wealth),
            other => Err(KowLifeError::UnknownStat(other.to_string())),
        }
    }
}

/// Gender chosen at character creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

impl FromStr for Gender {
    type Err = KowLifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(KowLifeError::InvalidConfig(format!("unknown gender: {}", other))),
        }
    }
}

/// Attribute block of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub looks: i32,
    pub intelligence: i32,
    pub health: i32,
    pub happiness: i32,
    pub wealth: i32,
}

impl Attributes {
    #[inline]
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Looks => self.looks,
            Stat::Intelligence => self.intelligence,
            Stat::Health => self.health,
            Stat::Happiness => self.happiness,
            Stat::Wealth => self.wealth,
        }
    }

    #[inline]
    fn slot_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Looks => &mut self.looks,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Health => &mut self.health,
            Stat::Happiness => &mut self.happiness,
            Stat::Wealth => &mut self.wealth,
        }
    }

    /// Apply a delta to one stat, clamping the result.
    ///
    /// Bounded stats saturate at [0, 100]; wealth is floored at 0 only.
    #[inline]
    pub fn change(&mut self, stat: Stat, delta: i32) {
        let slot = self.slot_mut(stat);
        let raw = slot.saturating_add(delta);
        *slot = if stat.is_bounded() {
            raw.clamp(STAT_MIN, STAT_MAX)
        } else {
            raw.max(STAT_MIN)
        };
    }

    /// Copy with one delta applied
    #[inline]
    pub fn with_change(mut self, stat: Stat, delta: i32) -> Self {
        self.change(stat, delta);
        self
    }

    /// Iterate (stat, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Whether every bounded stat lies in [STAT_MIN, STAT_MAX] and wealth is non-negative
    pub fn is_within_bounds(&self) -> bool {
        Stat::BOUNDED
            .iter()
            .all(|&s| (STAT_MIN..=STAT_MAX).contains(&self.get(s)))
            && self.wealth >= STAT_MIN
    }

    pub fn to_map(&self) -> std::collections::HashMap<String, i32> {
        self.iter().map(|(s, v)| (s.name().to_string(), v)).collect()
    }
}

/// A life in progress
///
/// Identity fields are fixed at creation. Everything else is replaced
/// wholesale by the engine on each step, never edited in place by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) country: String,
    pub(crate) gender: Gender,
    pub(crate) age: u32,
    pub(crate) attributes: Attributes,
    pub(crate) event_log: Vec<String>,
    #[serde(default)]
    pub(crate) education: Vec<Education>,
    #[serde(default)]
    pub(crate) career: Option<Career>,
}

impl Character {
    /// Assemble a character from explicit parts
    ///
    /// Bounded stats are clamped so a hand-built character still satisfies
    /// the attribute bounds.
    pub fn from_parts(
        name: impl Into<String>,
        country: impl Into<String>,
        gender: Gender,
        age: u32,
        attributes: Attributes,
        event_log: Vec<String>,
    ) -> Self {
        let mut clamped = attributes;
        for stat in Stat::ALL {
            clamped.change(stat, 0);
        }
        Self {
            name: name.into(),
            country: country.into(),
            gender,
            age,
            attributes: clamped,
            event_log,
            education: Vec::new(),
            career: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn event_log(&self) -> &[String] {
        &self.event_log
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn career(&self) -> Option<&Career> {
        self.career.as_ref()
    }

    /// Most recent education entry, if any
    pub fn latest_education(&self) -> Option<Education> {
        self.education.last().copied()
    }

    /// The last `limit` log entries, oldest first. The stored log is untouched.
    pub fn recent_log(&self, limit: usize) -> &[String] {
        let start = self.event_log.len().saturating_sub(limit);
        &self.event_log[start..]
    }

    /// Whether the character has reached `max_age`
    #[inline]
    pub fn is_complete(&self, max_age: u32) -> bool {
        self.age >= max_age
    }
}
