//! Patterns shared between rules and annotations.
//!
//! Rule-local patterns are declared inline with `regex!`; the ones here are
//! referenced from more than one place (a rule and a suppression guard, or an
//! annotation pass).

use once_cell::sync::Lazy;
use regex::Regex;

/// "<N> hours" next to PPR/PN/prior notice, in three phrasings:
///
/// ```text
/// prefix:  PPR 24 HR, PN MNM 2 HR, PPR PN 24HR
/// suffix:  48HR PPR MNM
/// notice:  4 hours prior notice, 24 HR advance
/// ```
///
/// Exactly one of groups 1..=3 is set per match. Counts may use ASCII or
/// full-width digits.
pub(crate) static HOURS_NOTICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(?:(?:PPR|PN|PPR\s*PN)\s*(?:MNM\s+)?([0-9\x{FF10}-\x{FF19}]+)\s*(?:HR?S?|HOURS?))",
        r"|(?:([0-9\x{FF10}-\x{FF19}]+)\s*(?:HR?S?|HOURS?)\s*(?:PPR|PN)\s*(?:MNM)?)",
        r"|(?:([0-9\x{FF10}-\x{FF19}]+)\s*(?:HR?S?|HOURS?)\s+(?:prior\s+)?(?:notice|advance|PN))",
    ))
    .unwrap()
});

/// Flights crossing the Schengen border.
pub(crate) static NON_SCHENGEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:extra[- ]?schengen|non[- ]?schengen|outside\s+(?:the\s+)?schengen)\b").unwrap()
});

/// Flights within the Schengen area.
pub(crate) static INTRA_SCHENGEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:intra[- ]?schengen|within\s+(?:the\s+)?schengen|schengen\s+(?:flights?|only))\b").unwrap()
});

/// Service window such as "0700-1900" (hyphen or en dash).
pub(crate) static OPERATING_HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4})\s*[-\x{2013}]\s*([0-9]{4})\b").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    fn hours_in(text: &str) -> Vec<u32> {
        HOURS_NOTICE
            .captures_iter(text)
            .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
            .filter_map(|m| m.as_str().parse().ok())
            .collect()
    }

    #[test]
    fn hours_notice_phrasings() {
        assert_eq!(hours_in("PPR 24 HR"), vec![24]);
        assert_eq!(hours_in("PPR PN 12HR"), vec![12]);
        assert_eq!(hours_in("PN MNM 2 HR"), vec![2]);
        assert_eq!(hours_in("48HR PPR MNM"), vec![48]);
        assert_eq!(hours_in("4 hours prior notice"), vec![4]);
        assert_eq!(hours_in("24 HR advance"), vec![24]);
        assert!(HOURS_NOTICE.is_match("PPR \u{ff12}\u{ff14} HR"));
        assert!(hours_in("O/R").is_empty());
        assert!(hours_in("0700-1900").is_empty());
    }

    #[test]
    fn schengen_families() {
        assert!(NON_SCHENGEN.is_match("Extra-Schengen flights"));
        assert!(NON_SCHENGEN.is_match("flights from outside the Schengen area"));
        assert!(!NON_SCHENGEN.is_match("Schengen flights only"));
        assert!(INTRA_SCHENGEN.is_match("intra schengen"));
        assert!(INTRA_SCHENGEN.is_match("Schengen flights only"));
    }

    #[test]
    fn operating_hours_window() {
        let caps = OPERATING_HOURS.captures("Customs 0700\u{2013}1900 LT").unwrap();
        assert_eq!(&caps[1], "0700");
        assert_eq!(&caps[2], "1900");
        assert!(OPERATING_HOURS.captures("before 1500").is_none());
    }
}
