//! Whole-text rules that end extraction on the first hit: H24, on request and
//! "as AD hours".

use crate::engine::BucketMask;
use crate::rules::patterns::HOURS_NOTICE;
use crate::{NotificationRule, NotificationType, Rule, RuleType, Stage};

/// "H24"
pub fn rule_h24() -> Rule {
    rule! {
        name: "h24",
        stage: Stage::ShortCircuit,
        pattern: regex!(r"(?i)\bH24\b"),
        confidence: 0.95,
        buckets: BucketMask::H24ISH.bits(),
        priority: 30,
        prod: |_caps: &Captures| -> Option<NotificationRule> {
            Some(NotificationRule::new(RuleType::Customs, NotificationType::H24))
        }
    }
}

/// "O/R", "on request", "by (prior) arrangement", "sur demande",
/// "subject to notice". Not applied when the text also states an hour count.
pub fn rule_on_request() -> Rule {
    rule! {
        name: "on request",
        stage: Stage::ShortCircuit,
        pattern: regex!(
            r"(?i)\b(?:O/R|on\s+request|by\s+(?:prior\s+)?arrangement|sur\s+demande|subject\s+to\s+(?:notified|notice))\b"
        ),
        unless: [&*HOURS_NOTICE],
        confidence: 0.9,
        buckets: BucketMask::REQUESTISH.bits(),
        priority: 20,
        prod: |_caps: &Captures| -> Option<NotificationRule> {
            Some(NotificationRule::new(RuleType::Customs, NotificationType::OnRequest))
        }
    }
}

/// "as AD hours", "AD OPR HR", "HR AD". Not applied when the text also states
/// an hour count.
pub fn rule_as_ad_hours() -> Rule {
    rule! {
        name: "as AD hours",
        stage: Stage::ShortCircuit,
        pattern: regex!(r"(?i)\b(?:as\s+AD\s+(?:hours?|HR)|AD\s+OPR\s+HR|HR\s+AD|AS\s+AD\s+HR)\b"),
        unless: [&*HOURS_NOTICE],
        confidence: 0.9,
        buckets: BucketMask::AD_HOURSISH.bits(),
        priority: 10,
        prod: |_caps: &Captures| -> Option<NotificationRule> {
            Some(NotificationRule::new(RuleType::Customs, NotificationType::AsAdHours))
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_h24(), rule_on_request(), rule_as_ad_hours()]
}
