//! Event selection

use crate::character::Attributes;
use crate::event::{EventCatalog, LifeEvent};

/// Which rule produced the year's event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// Entered age is at or below the childhood threshold
    Childhood(&'a LifeEvent),
    /// Uniform draw from the eligible general events
    Drawn(&'a LifeEvent),
    /// No general event applies this year
    Quiet,
}

impl<'a> Selection<'a> {
    pub fn event(&self) -> Option<&'a LifeEvent> {
        match *self {
            Selection::Childhood(event) | Selection::Drawn(event) => Some(event),
            Selection::Quiet => None,
        }
    }
}

/// Select the event for a character entering `next_age`.
///
/// Up to and including `childhood_age` the childhood event is returned
/// without drawing. Otherwise `draw(n)` is called once with the number of
/// eligible events and must return an index; out-of-range indices wrap.
///
/// With `childhood_age = 5` a character entering age 5 still gets the
/// childhood event. Setting `childhood_age = 4` makes age 5 a normal draw,
/// as in the browser game.
pub fn select_event<'a, F>(
    catalog: &'a EventCatalog,
    childhood_age: u32,
    next_age: u32,
    attributes: &Attributes,
    draw: F,
) -> Selection<'a>
where
    F: FnOnce(usize) -> usize,
{
    if next_age <= childhood_age {
        return Selection::Childhood(catalog.childhood_event());
    }

    let eligible = catalog.eligible(next_age, attributes);
    log::trace!("{} eligible events at age {}", eligible.len(), next_age);
    if eligible.is_empty() {
        return Selection::Quiet;
    }

    let index = draw(eligible.len()) % eligible.len();
    Selection::Drawn(eligible[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Stat;
    use crate::config::Tone;
    use crate::event::default_childhood_event;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_childhood_never_draws() {
        let catalog = EventCatalog::default();
        let attrs = Attributes::default();
        for age in 1..=5 {
            let selection = select_event(&catalog, 5, age, &attrs, |_| panic!("drew at age {}", age));
            assert!(matches!(selection, Selection::Childhood(_)));
        }
    }

    #[test]
    fn test_lower_threshold_draws_at_five() {
        let catalog = EventCatalog::default();
        let attrs = Attributes::default();
        assert!(matches!(select_event(&catalog, 4, 4, &attrs, |_| 0), Selection::Childhood(_)));
        assert_eq!(
            select_event(&catalog, 4, 5, &attrs, |_| 0),
            Selection::Drawn(&catalog.events()[0])
        );
    }

    #[test]
    fn test_draw_indexes_eligible_set() {
        let catalog = EventCatalog::default();
        let attrs = Attributes::default();
        for (i, expected) in catalog.events().iter().enumerate() {
            let selection = select_event(&catalog, 5, 6, &attrs, |n| {
                assert_eq!(n, 5);
                i
            });
            assert_eq!(selection.event(), Some(expected));
        }
    }

    #[test]
    fn test_draw_wraps() {
        let catalog = EventCatalog::default();
        let attrs = Attributes::default();
        let selection = select_event(&catalog, 5, 40, &attrs, |_| 7);
        assert_eq!(selection.event(), Some(&catalog.events()[2]));
    }

    #[test]
    fn test_quiet_when_nothing_applies() {
        let events = vec![LifeEvent::new("Retired.", &[(Stat::Happiness, 10)], Tone::Positive)
            .with_condition("age>=65")];
        let catalog = EventCatalog::new(events, default_childhood_event()).unwrap();
        let attrs = Attributes::default();

        assert_eq!(select_event(&catalog, 5, 30, &attrs, |_| 0), Selection::Quiet);
        assert!(matches!(
            select_event(&catalog, 5, 65, &attrs, |_| 0),
            Selection::Drawn(_)
        ));
    }

    #[test]
    fn test_uniform_distribution() {
        let catalog = EventCatalog::default();
        let attrs = Attributes::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 5];

        for _ in 0..5000 {
            let selection = select_event(&catalog, 5, 30, &attrs, |n| rng.gen_range(0..n));
            let event = selection.event().unwrap();
            let idx = catalog.events().iter().position(|e| e == event).unwrap();
            counts[idx] += 1;
        }

        // Each of five events should land near 1000 draws
        for count in counts {
            assert!(count > 800 && count < 1200, "skewed counts: {:?}", counts);
        }
    }
}
