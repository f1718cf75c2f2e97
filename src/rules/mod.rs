//! Notification rule table.
//!
//! Each `rules_*.rs` file contributes the rules for one extraction stage. The
//! full table is assembled by [`get`]; order inside a stage is decided by rule
//! priority, then declaration order.

pub(crate) mod annotations;
pub(crate) mod helpers;
pub(crate) mod patterns;
mod rules_business_day;
mod rules_hours;
mod rules_short_circuit;
mod rules_weekdays;


use crate::Rule;

/// Every extraction rule, grouped by stage.
pub(crate) fn get() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(rules_short_circuit::get());
    rules.extend(rules_weekdays::get());
    rules.extend(rules_hours::get());
    rules.extend(rules_business_day::get());
    rules
}
