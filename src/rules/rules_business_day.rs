//! Business-day rules: "last working day before 1500".

use crate::engine::BucketMask;
use crate::{NotificationRule, NotificationType, Rule, RuleType, Stage};

/// "[last] working|business day [before] [HHMM]"
pub fn rule_last_business_day() -> Rule {
    rule! {
        name: "last business day [before HHMM]",
        stage: Stage::BusinessDay,
        pattern: regex!(r"(?i)(?:last\s+)?(?:working|business)\s+day\s+(?:before\s+)?([0-9]{4})?"),
        confidence: 0.75,
        buckets: BucketMask::BUSINESS_DAYISH.bits(),
        prod: |caps: &Captures| -> Option<NotificationRule> {
            let mut rule = NotificationRule::new(RuleType::Ppr, NotificationType::BusinessDay);
            rule.business_day_offset = Some(-1);
            rule.specific_time = caps.get(1).map(|m| m.as_str().to_string());
            Some(rule)
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_last_business_day()]
}
