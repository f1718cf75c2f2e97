//! Deduplication of extracted rules.
//!
//! AIP text often states the same lead time twice in different phrasings
//! ("PPR 24 HR, PN 24HR"). The general-hours stage collapses those by
//! `RuleKey`, keeping the first occurrence so output order stays the order of
//! appearance in the text.
//!
//! Weekday and business-day rules are never deduplicated: two weekday rules with
//! the same hours but different day ranges are distinct requirements.

use crate::NotificationRule;
use std::collections::HashSet;

/// Identity of an hours rule for deduplication purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RuleKey {
    pub(crate) hours_notice: Option<u32>,
}

impl RuleKey {
    pub(crate) fn from_rule(rule: &NotificationRule) -> Self {
        RuleKey { hours_notice: rule.hours_notice }
    }
}

/// Drop every rule whose key was already seen, preserving order.
pub(crate) fn dedup_first(rules: Vec<NotificationRule>) -> Vec<NotificationRule> {
    let mut seen: HashSet<RuleKey> = HashSet::new();
    rules.into_iter().filter(|rule| seen.insert(RuleKey::from_rule(rule))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NotificationType, RuleType};

    fn hours(h: u32, raw: &str) -> NotificationRule {
        let mut rule = NotificationRule::new(RuleType::Ppr, NotificationType::Hours);
        rule.hours_notice = Some(h);
        rule.raw_text = raw.to_string();
        rule
    }

    #[test]
    fn keeps_first_occurrence() {
        let out = dedup_first(vec![hours(24, "PPR 24 HR"), hours(48, "PN 48 HR"), hours(24, "PN 24HR")]);
        let raws: Vec<&str> = out.iter().map(|r| r.raw_text.as_str()).collect();
        assert_eq!(raws, vec!["PPR 24 HR", "PN 48 HR"]);
    }
}
