//! Post-extraction annotations applied to every rule of a parse.

use crate::NotificationRule;
use crate::engine::BucketMask;
use crate::rules::patterns::{INTRA_SCHENGEN, NON_SCHENGEN, OPERATING_HOURS};

/// Mark rules as Schengen-only or non-Schengen-only.
///
/// When the text mentions both families the scope is ambiguous and no rule is
/// marked.
pub(crate) fn annotate_schengen(text: &str, buckets: BucketMask, rules: &mut [NotificationRule]) {
    if !buckets.contains(BucketMask::SCHENGENISH) {
        return;
    }
    let non_schengen = NON_SCHENGEN.is_match(text);
    let intra_schengen = INTRA_SCHENGEN.is_match(text);

    match (non_schengen, intra_schengen) {
        (true, false) => rules.iter_mut().for_each(|r| r.non_schengen_only = true),
        (false, true) => rules.iter_mut().for_each(|r| r.schengen_only = true),
        (true, true) => tracing::debug!("both Schengen scopes mentioned, leaving rules unscoped"),
        (false, false) => {}
    }
}

/// Copy a single "HHMM-HHMM" service window onto every rule. Texts with no
/// window or with several windows are left alone.
pub(crate) fn annotate_operating_hours(text: &str, rules: &mut [NotificationRule]) {
    let mut windows = OPERATING_HOURS.captures_iter(text);
    let (Some(window), None) = (windows.next(), windows.next()) else {
        return;
    };
    for rule in rules.iter_mut() {
        rule.hours_start = Some(window[1].to_string());
        rule.hours_end = Some(window[2].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NotificationType, RuleType};

    fn one_rule() -> Vec<NotificationRule> {
        vec![NotificationRule::new(RuleType::Ppr, NotificationType::Hours)]
    }

    #[test]
    fn non_schengen_scope() {
        let mut rules = one_rule();
        annotate_schengen("Non-Schengen: PPR 24 HR", BucketMask::SCHENGENISH, &mut rules);
        assert!(rules[0].non_schengen_only);
        assert!(!rules[0].schengen_only);
    }

    #[test]
    fn intra_schengen_scope() {
        let mut rules = one_rule();
        annotate_schengen("Within the Schengen area PN 2 HR", BucketMask::SCHENGENISH, &mut rules);
        assert!(rules[0].schengen_only);
        assert!(!rules[0].non_schengen_only);
    }

    #[test]
    fn both_scopes_are_ambiguous() {
        let mut rules = one_rule();
        annotate_schengen("intra-Schengen O/R, extra-Schengen PPR 24 HR", BucketMask::SCHENGENISH, &mut rules);
        assert!(!rules[0].schengen_only);
        assert!(!rules[0].non_schengen_only);
    }

    #[test]
    fn single_window_only() {
        let mut rules = one_rule();
        annotate_operating_hours("Customs 0700-1900, PPR 24 HR", &mut rules);
        assert_eq!(rules[0].hours_start.as_deref(), Some("0700"));
        assert_eq!(rules[0].hours_end.as_deref(), Some("1900"));

        let mut rules = one_rule();
        annotate_operating_hours("MON-FRI 0700-1900, SAT 0800-1200", &mut rules);
        assert_eq!(rules[0].hours_start, None);
    }
}
