//! Trigger scanning (input pre-classification).
//!
//! Inspects the raw text and produces a `BucketMask` of cheap signals ("has
//! digits", "mentions a weekday", "mentions Schengen", ...). Rules declare the
//! buckets they need and the parser skips any rule whose buckets are missing.
//!
//! ## Design notes
//!
//! - The scan is a *superset* test. False positives only cost a regex run; a
//!   false negative would silently drop a rule, so every bucket check must be
//!   implied by the patterns that declare it.
//! - Patterns are case-insensitive with Unicode simple case folding, so the
//!   scan lowercases with `to_lowercase()` and folds the long s (`ſ`), the one
//!   relevant character whose lowercase form is not plain ASCII.

use super::compiled_rules::BucketMask;

/// Input characteristics detected from the raw text.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();
        let lower = input.to_lowercase().replace('\u{17f}', "s");

        if input.chars().any(|c| c.is_ascii_digit() || ('\u{ff10}'..='\u{ff19}').contains(&c)) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if lower.contains("h24") {
            buckets |= BucketMask::H24ISH;
        }

        const REQUEST_WORDS: &[&str] = &["o/r", "request", "arrangement", "demande", "subject"];
        if REQUEST_WORDS.iter().any(|w| lower.contains(w)) {
            buckets |= BucketMask::REQUESTISH;
        }

        if lower.contains("ad") && (lower.contains("hr") || lower.contains("hour")) {
            buckets |= BucketMask::AD_HOURSISH;
        }

        // Day tokens are matched without word boundaries, so a substring test
        // is the right superset.
        const DAY_STEMS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun", "week", "hol"];
        if DAY_STEMS.iter().any(|d| lower.contains(d)) {
            buckets |= BucketMask::WEEKDAYISH;
        }

        if lower.contains("working") || lower.contains("business") {
            buckets |= BucketMask::BUSINESS_DAYISH;
        }

        if lower.contains("schengen") {
            buckets |= BucketMask::SCHENGENISH;
        }

        TriggerInfo { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_buckets() {
        let info = TriggerInfo::scan("SAT-SUN, PPR 48 HR");
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS | BucketMask::WEEKDAYISH));
        assert!(!info.buckets.contains(BucketMask::SCHENGENISH));

        let info = TriggerInfo::scan("O/R for extra-Schengen flights");
        assert!(info.buckets.contains(BucketMask::REQUESTISH | BucketMask::SCHENGENISH));
        assert!(!info.buckets.contains(BucketMask::HAS_DIGITS));

        let info = TriggerInfo::scan("Last working day before 1500");
        assert!(info.buckets.contains(BucketMask::BUSINESS_DAYISH | BucketMask::HAS_DIGITS));
    }

    #[test]
    fn scan_is_case_insensitive() {
        assert!(TriggerInfo::scan("h24").buckets.contains(BucketMask::H24ISH));
        assert!(TriggerInfo::scan("H24").buckets.contains(BucketMask::H24ISH));
        assert!(TriggerInfo::scan("As AD Hours").buckets.contains(BucketMask::AD_HOURSISH));
        assert!(TriggerInfo::scan("ſubject to notice").buckets.contains(BucketMask::REQUESTISH));
    }

    #[test]
    fn full_width_digits_count_as_digits() {
        assert!(TriggerInfo::scan("PPR \u{ff12}\u{ff14} HR").buckets.contains(BucketMask::HAS_DIGITS));
    }

    #[test]
    fn plain_text_has_no_buckets() {
        assert!(TriggerInfo::scan("contact tower for details").buckets.is_empty());
    }
}
