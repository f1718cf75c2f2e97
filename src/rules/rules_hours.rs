//! General "<N> hours" notice rules, used when no day-specific rule matched.

use crate::engine::BucketMask;
use crate::rules::helpers::{first_group, parse_hours};
use crate::rules::patterns::HOURS_NOTICE;
use crate::{NotificationRule, NotificationType, Rule, RuleType, Stage};

/// "PPR 24 HR", "48HR PPR MNM", "4 hours prior notice"
pub fn rule_hours_notice() -> Rule {
    rule! {
        name: "<N> hours notice",
        stage: Stage::Hours,
        pattern: &*HOURS_NOTICE,
        confidence: 0.8,
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |caps: &Captures| -> Option<NotificationRule> {
            let hours = parse_hours(first_group(caps, &[1, 2, 3])?)?;
            let mut rule = NotificationRule::new(RuleType::Ppr, NotificationType::Hours);
            rule.hours_notice = Some(hours);
            Some(rule)
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_hours_notice()]
}
