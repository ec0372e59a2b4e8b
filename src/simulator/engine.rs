//! Life progression engine

use crate::career::Education;
use crate::character::{self, Character, Gender};
use crate::config::{load_catalog_json, CatalogConfig, EngineConfig};
use crate::error::Result;
use crate::event::{apply_event, log_line, select_event, EventCatalog, LifeEvent, Selection, QUIET_YEAR};
use rand::Rng;

/// Outcome of one progression step
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    pub character: Character,
    /// Entry appended to the log, `None` when the step was a no-op
    pub log_line: Option<String>,
    /// Event applied this year
    pub event: Option<LifeEvent>,
    /// School milestone reached this year
    pub milestone: Option<Education>,
}

impl Advance {
    fn unchanged(character: &Character) -> Self {
        Self {
            character: character.clone(),
            log_line: None,
            event: None,
            milestone: None,
        }
    }

    /// Whether the step changed nothing (age cap reached)
    pub fn is_noop(&self) -> bool {
        self.log_line.is_none()
    }

    /// `(character', logLine)` view
    pub fn into_parts(self) -> (Character, Option<String>) {
        (self.character, self.log_line)
    }
}

/// Result of running a life to the age cap
#[derive(Debug, Clone)]
pub struct LifeRun {
    pub character: Character,
    /// Log lines produced by this run, in order
    pub log_lines: Vec<String>,
    pub milestones: Vec<(u32, Education)>,
}

/// Life progression engine
#[derive(Debug, Clone, Default)]
pub struct LifeEngine {
    catalog: EventCatalog,
    config: EngineConfig,
}

impl LifeEngine {
    pub fn new(catalog: EventCatalog, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        let engine = config.engine;
        let catalog = EventCatalog::from_config(config)?;
        Self::new(catalog, engine)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(load_catalog_json(json)?)
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a newborn character
    pub fn create<R: Rng + ?Sized>(
        &self,
        name: &str,
        country: &str,
        gender: Gender,
        rng: &mut R,
    ) -> Character {
        character::create(name, country, gender, rng)
    }

    /// Advance `character` by one year, drawing the event from `rng`
    pub fn advance<R: Rng + ?Sized>(&self, character: &Character, rng: &mut R) -> Advance {
        self.progress(character, |n| rng.gen_range(0..n))
    }

    /// Advance with a fixed draw, an index into the eligible events
    pub fn advance_with_draw(&self, character: &Character, draw: usize) -> Advance {
        self.progress(character, |_| draw)
    }

    fn progress<F>(&self, character: &Character, draw: F) -> Advance
    where
        F: FnOnce(usize) -> usize,
    {
        if character.is_complete(self.config.max_age) {
            log::debug!(
                "{} is {}; progression stops at {}",
                character.name,
                character.age,
                self.config.max_age
            );
            return Advance::unchanged(character);
        }

        let next_age = character.age + 1;
        let selection = select_event(
            &self.catalog,
            self.config.childhood_age,
            next_age,
            &character.attributes,
            draw,
        );

        let (attributes, description) = match selection {
            Selection::Childhood(event) | Selection::Drawn(event) => {
                (apply_event(&character.attributes, event), event.description.as_str())
            }
            Selection::Quiet => (character.attributes, QUIET_YEAR),
        };

        let line = log_line(next_age, description);
        let mut event_log = character.event_log.clone();
        event_log.push(line.clone());

        let milestone = Education::milestone_at(next_age);
        let mut education = character.education.clone();
        if let Some(level) = milestone.filter(|level| level.records_milestone(character)) {
            education.push(level);
        }

        log::debug!("{}: {}", character.name, line);

        Advance {
            character: Character {
                age: next_age,
                attributes,
                event_log,
                education,
                ..character.clone()
            },
            log_line: Some(line),
            event: selection.event().cloned(),
            milestone,
        }
    }

    /// Advance until the age cap, returning the final character and new log lines
    pub fn simulate_to_end<R: Rng + ?Sized>(&self, character: &Character, rng: &mut R) -> LifeRun {
        let mut current = character.clone();
        let years = self.config.max_age.saturating_sub(current.age) as usize;
        let mut log_lines = Vec::with_capacity(years);
        let mut milestones = Vec::new();

        loop {
            let step = self.advance(&current, rng);
            let Some(line) = step.log_line else {
                break;
            };
            log_lines.push(line);
            if let Some(level) = step.milestone {
                milestones.push((step.character.age, level));
            }
            current = step.character;
        }

        log::info!(
            "simulated {} years for {}, final age {}",
            log_lines.len(),
            current.name,
            current.age
        );

        LifeRun {
            character: current,
            log_lines,
            milestones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career;
    use crate::character::{Attributes, Stat};
    use crate::config::Tone;
    use crate::event::{default_childhood_event, CHILDHOOD_EVENT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn character_at(age: u32, attributes: Attributes) -> Character {
        Character::from_parts("Ethan", "Australia", Gender::Other, age, attributes, Vec::new())
    }

    fn attrs() -> Attributes {
        Attributes {
            looks: 50,
            intelligence: 50,
            health: 50,
            happiness: 50,
            wealth: 0,
        }
    }

    /// Engine whose only general event is `event`
    fn single_event_engine(event: LifeEvent) -> LifeEngine {
        let catalog = EventCatalog::new(vec![event], default_childhood_event()).unwrap();
        LifeEngine::new(catalog, EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_childhood_example() {
        let engine = LifeEngine::default();
        let c = character_at(4, attrs());

        let step = engine.advance_with_draw(&c, 3);
        assert_eq!(step.character.age(), 5);
        assert_eq!(step.character.attributes().happiness, 55);
        assert_eq!(
            step.log_line.as_deref(),
            Some("Age 5: Learned something new as a child.")
        );
    }

    #[test]
    fn test_childhood_below_threshold() {
        let engine = LifeEngine::default();
        let mut rng = StdRng::seed_from_u64(1);
        let c = character_at(0, attrs());

        let step = engine.advance(&c, &mut rng);
        assert_eq!(step.character.age(), 1);
        assert_eq!(step.event.unwrap().description, CHILDHOOD_EVENT);
        let before = c.attributes();
        let after = step.character.attributes();
        assert_eq!(after.happiness, before.happiness + 5);
        assert_eq!(after.health, before.health);
        assert_eq!(after.wealth, before.wealth);
    }

    #[test]
    fn test_drawn_event_applies_delta() {
        let engine = single_event_engine(LifeEvent::new("Hurt.", &[(Stat::Health, -10)], Tone::Negative));
        let c = character_at(50, Attributes { health: 95, ..attrs() });

        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.character.attributes().health, 85);
        assert_eq!(step.log_line.as_deref(), Some("Age 51: Hurt."));
    }

    #[test]
    fn test_clamp_at_zero() {
        let engine = single_event_engine(LifeEvent::new("Hurt.", &[(Stat::Health, -10)], Tone::Negative));
        let c = character_at(99, Attributes { health: 5, ..attrs() });

        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.character.age(), 100);
        assert_eq!(step.character.attributes().health, 0);
    }

    #[test]
    fn test_clamp_at_hundred() {
        let engine = single_event_engine(LifeEvent::new("Spa.", &[(Stat::Health, 10)], Tone::Positive));
        let c = character_at(30, Attributes { health: 98, ..attrs() });

        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.character.attributes().health, 100);
    }

    #[test]
    fn test_noop_at_cap() {
        let engine = LifeEngine::default();
        let mut rng = StdRng::seed_from_u64(9);
        let c = character_at(100, attrs());

        let step = engine.advance(&c, &mut rng);
        assert!(step.is_noop());
        assert!(step.event.is_none());
        let (next, line) = step.into_parts();
        assert_eq!(next, c);
        assert!(line.is_none());
    }

    #[test]
    fn test_input_not_mutated() {
        let engine = LifeEngine::default();
        let c = character_at(20, attrs());
        let snapshot = c.clone();

        let step = engine.advance_with_draw(&c, 3);
        assert_eq!(c, snapshot);
        assert_eq!(step.character.event_log().len(), c.event_log().len() + 1);
        assert_eq!(step.character.attributes().wealth, 50);
    }

    #[test]
    fn test_identity_preserved() {
        let engine = LifeEngine::default();
        let c = character_at(20, attrs());
        let next = engine.advance_with_draw(&c, 1).character;
        assert_eq!(next.name(), c.name());
        assert_eq!(next.country(), c.country());
        assert_eq!(next.gender(), c.gender());
    }

    #[test]
    fn test_quiet_year() {
        let engine = single_event_engine(
            LifeEvent::new("Retired.", &[(Stat::Happiness, 10)], Tone::Positive).with_condition("age>=65"),
        );
        let c = character_at(30, attrs());

        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.character.age(), 31);
        assert_eq!(step.character.attributes(), c.attributes());
        assert_eq!(step.log_line.as_deref(), Some("Age 31: Nothing notable happened."));
        assert!(step.event.is_none());
    }

    #[test]
    fn test_school_milestones() {
        let engine = LifeEngine::default();
        let c = character_at(5, attrs());

        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.milestone, Some(Education::ElementarySchool));
        assert!(step.character.education().is_empty());
        assert_eq!(step.character.event_log().len(), 1);

        let c = character_at(13, attrs());
        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.milestone, Some(Education::HighSchool));
        assert_eq!(step.character.education(), [Education::HighSchool]);
    }

    #[test]
    fn test_milestones_keep_chosen_careers() {
        let engine = LifeEngine::default();
        let mut rng = StdRng::seed_from_u64(4);
        let c = career::choose_education(&character_at(5, attrs()), Education::University).unwrap();

        let c = engine.advance_with_draw(&c, 0).character;
        assert_eq!(c.education(), [Education::University]);
        assert!(career::choose_career(&c, "Doctor", &mut rng).is_ok());

        let c = character_at(13, *c.attributes());
        let c = career::choose_education(&c, Education::GraduateSchool).unwrap();
        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.milestone, Some(Education::HighSchool));
        assert_eq!(step.character.latest_education(), Some(Education::GraduateSchool));
        assert!(!career::available_careers(&step.character).is_empty());
    }

    #[test]
    fn test_predicate_sees_next_age() {
        let engine = single_event_engine(
            LifeEvent::new("Retired.", &[(Stat::Happiness, 10)], Tone::Positive).with_condition("age>=65"),
        );
        let c = character_at(64, attrs());

        let step = engine.advance_with_draw(&c, 0);
        assert_eq!(step.log_line.as_deref(), Some("Age 65: Retired."));
        assert_eq!(step.character.attributes().happiness, 60);
    }

    #[test]
    fn test_childhood_ends_with_threshold_year() {
        let engine = single_event_engine(LifeEvent::new("Hurt.", &[(Stat::Health, -10)], Tone::Negative));

        let step = engine.advance_with_draw(&character_at(4, attrs()), 0);
        assert_eq!(step.event.unwrap().description, CHILDHOOD_EVENT);

        let step = engine.advance_with_draw(&character_at(5, attrs()), 0);
        assert_eq!(step.log_line.as_deref(), Some("Age 6: Hurt."));
        assert_eq!(step.character.attributes().health, 40);
        assert_eq!(step.character.attributes().happiness, 50);
    }

    #[test]
    fn test_simulate_to_end() {
        let engine = LifeEngine::default();
        let mut rng = StdRng::seed_from_u64(77);
        let c = engine.create("Emma", "Canada", Gender::Female, &mut rng);

        let run = engine.simulate_to_end(&c, &mut rng);
        assert_eq!(run.character.age(), 100);
        assert_eq!(run.log_lines.len(), 100);
        assert_eq!(run.character.event_log().len(), 101);
        assert_eq!(run.character.event_log()[0], "You were born in Canada!");
        assert_eq!(run.log_lines[0], "Age 1: Learned something new as a child.");
        assert!(run.log_lines[99].starts_with("Age 100: "));
        assert_eq!(
            run.milestones,
            vec![(6, Education::ElementarySchool), (14, Education::HighSchool)]
        );
        assert!(run.character.attributes().is_within_bounds());
    }

    #[test]
    fn test_custom_max_age() {
        let engine = LifeEngine::from_json(r#"{"engine": {"max_age": 10}}"#).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let c = engine.create("Noah", "Japan", Gender::Male, &mut rng);

        let run = engine.simulate_to_end(&c, &mut rng);
        assert_eq!(run.character.age(), 10);
        assert!(engine.advance(&run.character, &mut rng).is_noop());
    }
}
