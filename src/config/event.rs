//! Event configuration structures

use crate::character::Stat;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How an event reads to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Event configuration
///
/// `effect` maps stat names to signed deltas. An unknown stat name fails
/// deserialization, and so does naming a stat twice (`money` counts as
/// `wealth`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    pub description: String,
    #[serde(default, deserialize_with = "unique_effect")]
    pub effect: BTreeMap<Stat, i32>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default, alias = "appliesWhen")]
    pub applies_when: Option<String>,
}

fn unique_effect<'de, D>(deserializer: D) -> Result<BTreeMap<Stat, i32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EffectVisitor;

    impl<'de> Visitor<'de> for EffectVisitor {
        type Value = BTreeMap<Stat, i32>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of stat names to deltas")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut effect = BTreeMap::new();
            while let Some((stat, delta)) = map.next_entry::<Stat, i32>()? {
                if effect.insert(stat, delta).is_some() {
                    return Err(de::Error::custom(format!("duplicate effect on {}", stat)));
                }
            }
            Ok(effect)
        }
    }

    deserializer.deserialize_map(EffectVisitor)
}
