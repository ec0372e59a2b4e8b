//! Property tests for character module
//!
//! Creation bounds and attribute clamping.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::character::{create, Attributes, Gender, Stat, STAT_MAX, STAT_MIN};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)]
}

fn stat_strategy() -> impl Strategy<Value = Stat> {
    prop_oneof![
        Just(Stat::Looks),
        Just(Stat::Intelligence),
        Just(Stat::Health),
        Just(Stat::Happiness),
        Just(Stat::Wealth),
    ]
}

/// Attributes already within bounds
fn attributes_strategy() -> impl Strategy<Value = Attributes> {
    (0..=100i32, 0..=100i32, 0..=100i32, 0..=100i32, 0..=10_000i32).prop_map(
        |(looks, intelligence, health, happiness, wealth)| Attributes {
            looks,
            intelligence,
            health,
            happiness,
            wealth,
        },
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Newborns start at age 0 with no wealth and stats in [1, 100]
    #[test]
    fn prop_create_starting_bounds(
        seed in any::<u64>(),
        name in "[A-Za-z]{1,12}",
        country in "[A-Za-z ]{1,16}",
        gender in gender_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = create(&name, &country, gender, &mut rng);

        prop_assert_eq!(c.age(), 0);
        prop_assert_eq!(c.attributes().wealth, 0);
        for stat in Stat::BOUNDED {
            let v = c.attributes().get(stat);
            prop_assert!((1..=100).contains(&v), "{} out of range: {}", stat, v);
        }
        prop_assert_eq!(c.event_log().len(), 1);
    }

    /// Any sequence of deltas keeps every stat inside its bounds
    #[test]
    fn prop_change_stays_in_bounds(
        start in attributes_strategy(),
        changes in prop::collection::vec((stat_strategy(), -200..=200i32), 1..=30),
    ) {
        let mut attrs = start;
        for (stat, delta) in changes {
            attrs.change(stat, delta);
            prop_assert!(attrs.is_within_bounds());
        }
    }

    /// Within range a delta is applied exactly
    #[test]
    fn prop_change_exact_inside_range(
        start in attributes_strategy(),
        stat in stat_strategy(),
        delta in -200..=200i32,
    ) {
        let before = start.get(stat);
        let after = start.with_change(stat, delta).get(stat);
        let raw = before + delta;

        if stat.is_bounded() {
            prop_assert_eq!(after, raw.clamp(STAT_MIN, STAT_MAX));
        } else {
            prop_assert_eq!(after, raw.max(STAT_MIN));
        }
    }
}
