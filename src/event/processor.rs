//! Event effect application

use crate::character::Attributes;
use crate::event::LifeEvent;

/// Description logged for a year where no general event applies
pub const QUIET_YEAR: &str = "Nothing notable happened.";

/// Attributes after applying `event`, every delta clamped as it lands
pub fn apply_event(attributes: &Attributes, event: &LifeEvent) -> Attributes {
    let mut next = *attributes;
    for &(stat, delta) in &event.effect {
        next.change(stat, delta);
    }
    next
}

/// Log entry for a progression step
#[inline]
pub fn log_line(age: u32, description: &str) -> String {
    format!("Age {}: {}", age, description)
}
