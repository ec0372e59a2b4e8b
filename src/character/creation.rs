//! Character creation

use super::{Attributes, Character, Gender};
use rand::seq::SliceRandom;
use rand::Rng;

/// Inclusive range for randomized starting stats
pub const STARTING_STAT_MIN: i32 = 1;
pub const STARTING_STAT_MAX: i32 = 100;

pub const FIRST_NAMES: [&str; 6] = ["Emma", "Liam", "Olivia", "Noah", "Ava", "Ethan"];
pub const LAST_NAMES: [&str; 6] = ["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia"];
pub const COUNTRIES: [&str; 7] = [
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "Japan",
    "Brazil",
];

/// First log entry of every life
pub fn birth_entry(country: &str) -> String {
    format!("You were born in {}!", country)
}

#[inline]
fn random_stat<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(STARTING_STAT_MIN..=STARTING_STAT_MAX)
}

/// Create a newborn character.
///
/// Looks, intelligence, health and happiness are drawn independently from
/// [1, 100]; wealth and age start at 0 and the log holds the birth entry.
/// Inputs are taken as already validated.
pub fn create<R: Rng + ?Sized>(name: &str, country: &str, gender: Gender, rng: &mut R) -> Character {
    let attributes = Attributes {
        looks: random_stat(rng),
        intelligence: random_stat(rng),
        health: random_stat(rng),
        happiness: random_stat(rng),
        wealth: 0,
    };

    let mut event_log = Vec::with_capacity(128);
    event_log.push(birth_entry(country));

    log::debug!("created character {} ({}, {})", name, country, gender);

    Character {
        name: name.to_string(),
        country: country.to_string(),
        gender,
        age: 0,
        attributes,
        event_log,
        education: Vec::new(),
        career: None,
    }
}

/// Generate a random "First Last" name
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Emma");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
    format!("{} {}", first, last)
}

/// Create a character with random name, country and gender
pub fn create_random<R: Rng + ?Sized>(rng: &mut R) -> Character {
    let name = random_name(rng);
    let country = COUNTRIES.choose(rng).copied().unwrap_or("United States");
    let gender = Gender::ALL.choose(rng).copied().unwrap_or_default();
    create(&name, country, gender, rng)
}
