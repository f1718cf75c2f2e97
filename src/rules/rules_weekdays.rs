//! Day-specific notice rules: "SAT-SUN, PPR 48 HR", "MON-FRI: PN 24 HR",
//! "HOL: 72 HR".

use crate::engine::BucketMask;
use crate::rules::helpers::{parse_day, parse_hours};
use crate::{NotificationRule, NotificationType, Rule, RuleType, Stage};

/// "<day>[-<day>][,:] [PPR|PN] [MNM] <N> HR"
///
/// Group 1 is the start token, group 2 the optional end token, group 3 the
/// hour count. A range end that is only a holiday token contributes the
/// holiday flag but no end day.
pub fn rule_weekday_hours() -> Rule {
    rule! {
        name: "<weekday range> <N> hours",
        stage: Stage::Weekday,
        pattern: regex!(concat!(
            r"(?i)(MON(?:DAY)?|TUE(?:SDAY)?|WED(?:NESDAY)?|THU(?:RSDAY)?|FRI(?:DAY)?|SAT(?:URDAY)?|SUN(?:DAY)?|WEEK-?END|WEEK-?DAYS?|HOL(?:IDAYS?)?)",
            r"(?:\s*[-\x{2013}]\s*(MON(?:DAY)?|TUE(?:SDAY)?|WED(?:NESDAY)?|THU(?:RSDAY)?|FRI(?:DAY)?|SAT(?:URDAY)?|SUN(?:DAY)?|HOL(?:IDAYS?)?))?",
            r"\s*[,:]?\s*",
            r"(?:PPR|PN|PPR\s*PN)?\s*(?:MNM\s+)?([0-9\x{FF10}-\x{FF19}]+)\s*(?:HR?S?|HOURS?)",
        )),
        confidence: 0.85,
        buckets: (BucketMask::HAS_DIGITS | BucketMask::WEEKDAYISH).bits(),
        prod: |caps: &Captures| -> Option<NotificationRule> {
            let hours = parse_hours(caps.get(3)?)?;
            let start = parse_day(caps.get(1)?.as_str());
            let (end, includes_holidays) = match caps.get(2) {
                Some(m) => {
                    let end = parse_day(m.as_str());
                    (end.start, start.includes_holidays || end.includes_holidays)
                }
                None => (start.end, start.includes_holidays),
            };

            let mut rule = NotificationRule::new(RuleType::Ppr, NotificationType::Hours);
            rule.hours_notice = Some(hours);
            rule.weekday_start = start.start;
            rule.weekday_end = end;
            rule.includes_holidays = includes_holidays;
            Some(rule)
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_weekday_hours()]
}
