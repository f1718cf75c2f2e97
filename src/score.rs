//! Hassle scoring.
//!
//! Maps a `ParsedNotificationRules` onto a single 0..1 number used to rank
//! aerodromes by how much arrival paperwork they demand. Lower is better.
//!
//! ```text
//! no rules            -> MODERATE 0.50
//! H24                 -> NONE     0.00
//! all O/R             -> LOW      0.20
//! all as AD hours     -> LOW      0.15
//! max hours notice:
//!   none              -> HIGH     0.70
//!   <= 2              -> LOW      0.15
//!   <= 12             -> LOW      0.25
//!   <= 24             -> MODERATE 0.40
//!   <= 48             -> HIGH     0.60
//!   <= 72             -> HIGH     0.75
//!   > 72              -> VERY_HIGH 0.90
//! weekend/holiday rule -> +0.10 (capped at 1.0, level unchanged)
//! ```
//!
//! The thresholds are fixed so rankings stay comparable across datasets.

use crate::model::ParsedNotificationRules;
use serde::{Deserialize, Serialize};

const WEEKEND_PENALTY: f64 = 0.1;

/// Overall hassle level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HassleLevel {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
    NotAvailable,
}

impl HassleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HassleLevel::None => "none",
            HassleLevel::Low => "low",
            HassleLevel::Moderate => "moderate",
            HassleLevel::High => "high",
            HassleLevel::VeryHigh => "very_high",
            HassleLevel::NotAvailable => "not_available",
        }
    }
}

impl std::fmt::Display for HassleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hassle score for an aerodrome's notification requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HassleScore {
    pub icao: String,
    pub level: HassleLevel,
    /// 0 = no hassle, 1 = maximum hassle.
    pub score: f64,
    pub summary: String,
    pub max_hours_notice: Option<u32>,
    pub has_weekend_rules: bool,
    pub has_schengen_rules: bool,
}

impl HassleScore {
    fn fixed(icao: &str, level: HassleLevel, score: f64, summary: &str) -> Self {
        HassleScore {
            icao: icao.to_string(),
            level,
            score,
            summary: summary.to_string(),
            max_hours_notice: None,
            has_weekend_rules: false,
            has_schengen_rules: false,
        }
    }

    /// Compute the score for a parse result. Total: every input yields a score.
    pub fn from_parsed_rules(parsed: &ParsedNotificationRules) -> Self {
        let icao = parsed.icao.as_str();

        if !parsed.has_rules() {
            // Unknown is treated as moderate so unparseable fields never rank as hassle-free.
            return Self::fixed(icao, HassleLevel::Moderate, 0.5, "Unable to parse notification rules");
        }
        if parsed.is_h24() {
            return Self::fixed(icao, HassleLevel::None, 0.0, "H24 - No prior notice required");
        }
        if parsed.is_on_request() {
            return Self::fixed(icao, HassleLevel::Low, 0.2, "On request / by arrangement");
        }
        if parsed.is_as_ad_hours() {
            return Self::fixed(icao, HassleLevel::Low, 0.15, "As aerodrome hours");
        }

        let max_hours = parsed.max_hours_notice();
        let has_weekend = parsed.has_weekend_rules();
        let (level, mut score) = level_for_hours(max_hours);
        if has_weekend {
            score = (score + WEEKEND_PENALTY).min(1.0);
        }

        HassleScore {
            icao: icao.to_string(),
            level,
            score,
            summary: parsed.get_summary(),
            max_hours_notice: max_hours,
            has_weekend_rules: has_weekend,
            has_schengen_rules: parsed.has_schengen_rules(),
        }
    }
}

/// Base level and score for the largest hours notice. `None` covers
/// business-day-only and other rules without an hour count.
fn level_for_hours(max_hours: Option<u32>) -> (HassleLevel, f64) {
    match max_hours {
        None => (HassleLevel::High, 0.7),
        Some(h) if h <= 2 => (HassleLevel::Low, 0.15),
        Some(h) if h <= 12 => (HassleLevel::Low, 0.25),
        Some(h) if h <= 24 => (HassleLevel::Moderate, 0.4),
        Some(h) if h <= 48 => (HassleLevel::High, 0.6),
        Some(h) if h <= 72 => (HassleLevel::High, 0.75),
        Some(_) => (HassleLevel::VeryHigh, 0.9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DEFAULT_FIELD_ID, NotificationRule, NotificationType, RuleType};

    fn parsed_with(rules: Vec<NotificationRule>) -> ParsedNotificationRules {
        let mut parsed = ParsedNotificationRules::new("LFXX", "", DEFAULT_FIELD_ID);
        parsed.rules = rules;
        parsed
    }

    fn hours(h: u32) -> NotificationRule {
        let mut rule = NotificationRule::new(RuleType::Ppr, NotificationType::Hours);
        rule.hours_notice = Some(h);
        rule
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn empty_rules_score_moderate() {
        let score = HassleScore::from_parsed_rules(&parsed_with(Vec::new()));
        assert_eq!(score.level, HassleLevel::Moderate);
        assert_close(score.score, 0.5);
        assert_eq!(score.summary, "Unable to parse notification rules");
    }

    #[test]
    fn thresholds() {
        let cases = [
            (0, HassleLevel::Low, 0.15),
            (2, HassleLevel::Low, 0.15),
            (3, HassleLevel::Low, 0.25),
            (12, HassleLevel::Low, 0.25),
            (13, HassleLevel::Moderate, 0.4),
            (24, HassleLevel::Moderate, 0.4),
            (25, HassleLevel::High, 0.6),
            (48, HassleLevel::High, 0.6),
            (49, HassleLevel::High, 0.75),
            (72, HassleLevel::High, 0.75),
            (73, HassleLevel::VeryHigh, 0.9),
            (168, HassleLevel::VeryHigh, 0.9),
        ];
        for (h, level, expected) in cases {
            let score = HassleScore::from_parsed_rules(&parsed_with(vec![hours(h)]));
            assert_eq!(score.level, level, "hours={h}");
            assert_close(score.score, expected);
            assert_eq!(score.max_hours_notice, Some(h));
        }
    }

    #[test]
    fn business_day_only_is_high() {
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![NotificationRule::new(
            RuleType::Ppr,
            NotificationType::BusinessDay,
        )]));
        assert_eq!(score.level, HassleLevel::High);
        assert_close(score.score, 0.7);
        assert_eq!(score.max_hours_notice, None);
    }

    #[test]
    fn hours_take_precedence_over_business_day() {
        let rules = vec![hours(12), NotificationRule::new(RuleType::Ppr, NotificationType::BusinessDay)];
        let score = HassleScore::from_parsed_rules(&parsed_with(rules));
        assert_eq!(score.level, HassleLevel::Low);
        assert_close(score.score, 0.25);
    }

    #[test]
    fn weekend_penalty_keeps_level_and_caps() {
        let mut weekend = hours(100);
        weekend.weekday_start = Some(5);
        weekend.weekday_end = Some(6);
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![weekend]));
        assert_eq!(score.level, HassleLevel::VeryHigh);
        assert_close(score.score, 1.0);
        assert!(score.has_weekend_rules);

        let mut holidays = hours(24);
        holidays.includes_holidays = true;
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![holidays]));
        assert_eq!(score.level, HassleLevel::Moderate);
        assert_close(score.score, 0.5);
    }

    #[test]
    fn short_circuit_levels() {
        let h24 = NotificationRule::new(RuleType::Customs, NotificationType::H24);
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![h24]));
        assert_eq!((score.level, score.score), (HassleLevel::None, 0.0));

        let on_request = NotificationRule::new(RuleType::Customs, NotificationType::OnRequest);
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![on_request]));
        assert_eq!(score.level, HassleLevel::Low);
        assert_close(score.score, 0.2);

        let ad_hours = NotificationRule::new(RuleType::Customs, NotificationType::AsAdHours);
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![ad_hours]));
        assert_eq!(score.level, HassleLevel::Low);
        assert_close(score.score, 0.15);
        assert_eq!(score.summary, "As aerodrome hours");
    }

    #[test]
    fn schengen_flag() {
        let mut rule = hours(24);
        rule.non_schengen_only = true;
        let score = HassleScore::from_parsed_rules(&parsed_with(vec![rule]));
        assert!(score.has_schengen_rules);
        assert!(!score.has_weekend_rules);
    }
}
