//! Notification rule data model.
//!
//! A `NotificationRule` is one requirement statement pulled out of an AIP
//! customs/immigration field ("PPR 24 HR", "O/R", "SAT-SUN: PN 48 HR").
//! `ParsedNotificationRules` bundles every rule found for one aerodrome together
//! with the verbatim input and any warnings produced while parsing.
//!
//! All types here are plain records. They serialize with `serde` (enums as
//! snake_case strings) so callers can ship them as JSON unchanged.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// AIP field id of the customs/immigration notification text.
pub const DEFAULT_FIELD_ID: u32 = 302;

/// Category of obligation a rule expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Prior Permission Required.
    Ppr,
    /// Prior Notice.
    Pn,
    Customs,
    Immigration,
    Handling,
}

/// How the notification timing is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// N hours before arrival.
    Hours,
    /// Last business day before, optionally with a cutoff time.
    BusinessDay,
    /// Before a specific time of day.
    SpecificTime,
    /// O/R, by arrangement.
    OnRequest,
    /// Service available around the clock.
    H24,
    /// Follows aerodrome operating hours.
    AsAdHours,
    NotAvailable,
    Unknown,
}

/// Which extractor produced a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    #[default]
    Regex,
    Llm,
}

/// Structured representation of a single notification requirement.
///
/// ```text
/// "PPR 24 HR"                      -> Hours, hours_notice = 24
/// "PN last working day before 1500" -> BusinessDay, specific_time = "1500"
/// "O/R"                             -> OnRequest
/// "H24"                             -> H24
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRule {
    pub rule_type: RuleType,
    pub notification_type: NotificationType,

    /// Lead time in hours; only set for `NotificationType::Hours`.
    pub hours_notice: Option<u32>,

    /// Inclusive weekday range, 0 = Monday. Both `None` means every day.
    pub weekday_start: Option<u8>,
    pub weekday_end: Option<u8>,
    pub includes_holidays: bool,

    /// -1 = last business day before.
    pub business_day_offset: Option<i32>,
    /// Cutoff time as written in the source ("1500").
    pub specific_time: Option<String>,

    /// Service operating window ("0700", "1900").
    pub hours_start: Option<String>,
    pub hours_end: Option<String>,

    pub is_obligatory: bool,
    pub schengen_only: bool,
    pub non_schengen_only: bool,
    pub conditions: Option<BTreeMap<String, serde_json::Value>>,

    /// Exact substring this rule was extracted from.
    pub raw_text: String,
    pub confidence: f64,
    pub extraction_method: ExtractionMethod,
}

impl NotificationRule {
    /// A rule with every optional field empty, obligatory, confidence 1.0.
    pub fn new(rule_type: RuleType, notification_type: NotificationType) -> Self {
        NotificationRule {
            rule_type,
            notification_type,
            hours_notice: None,
            weekday_start: None,
            weekday_end: None,
            includes_holidays: false,
            business_day_offset: None,
            specific_time: None,
            hours_start: None,
            hours_end: None,
            is_obligatory: true,
            schengen_only: false,
            non_schengen_only: false,
            conditions: None,
            raw_text: String::new(),
            confidence: 1.0,
            extraction_method: ExtractionMethod::Regex,
        }
    }

    /// Human-readable weekday scope of this rule.
    pub fn weekday_description(&self) -> String {
        let Some(start) = self.weekday_start else {
            return "all days".to_string();
        };
        let Some(end) = self.weekday_end else {
            return day_abbrev(start);
        };
        match (start, end) {
            (0, 4) => "weekdays".to_string(),
            (5, 6) => "weekends".to_string(),
            _ => format!("{}-{}", day_abbrev(start), day_abbrev(end)),
        }
    }

    /// Whether the rule is anchored on Saturday or mentions holidays.
    pub fn is_weekend_rule(&self) -> bool {
        self.weekday_start == Some(5) || self.includes_holidays
    }

    /// Short description used when rendering summaries. `None` for rule kinds
    /// that have no compact form.
    pub fn describe(&self) -> Option<String> {
        match self.notification_type {
            NotificationType::Hours => {
                let hours = self.hours_notice.filter(|h| *h > 0)?;
                let scope = self.weekday_description();
                if scope == "all days" {
                    Some(format!("PPR {hours}h"))
                } else {
                    Some(format!("{scope}: PPR {hours}h"))
                }
            }
            NotificationType::BusinessDay => match &self.specific_time {
                Some(time) => Some(format!("Last business day before {time}")),
                None => Some("Last business day".to_string()),
            },
            NotificationType::OnRequest => Some("O/R".to_string()),
            NotificationType::SpecificTime
            | NotificationType::H24
            | NotificationType::AsAdHours
            | NotificationType::NotAvailable
            | NotificationType::Unknown => None,
        }
    }
}

fn day_abbrev(day: u8) -> String {
    let weekday = match day {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        6 => Weekday::Sun,
        other => return other.to_string(),
    };
    weekday.to_string().to_uppercase()
}

/// Complete parse result for one aerodrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedNotificationRules {
    pub icao: String,
    /// Rules in extraction order.
    pub rules: Vec<NotificationRule>,
    /// Original input, verbatim.
    pub raw_text: String,
    pub source_field_id: u32,
    pub parse_warnings: Vec<String>,
}

impl ParsedNotificationRules {
    pub fn new(icao: impl Into<String>, raw_text: impl Into<String>, source_field_id: u32) -> Self {
        ParsedNotificationRules {
            icao: icao.into(),
            rules: Vec::new(),
            raw_text: raw_text.into(),
            source_field_id,
            parse_warnings: Vec::new(),
        }
    }

    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// True when any rule says H24.
    pub fn is_h24(&self) -> bool {
        self.rules.iter().any(|r| r.notification_type == NotificationType::H24)
    }

    /// True when there is at least one rule and every rule is on request.
    pub fn is_on_request(&self) -> bool {
        self.has_rules() && self.rules.iter().all(|r| r.notification_type == NotificationType::OnRequest)
    }

    /// True when there is at least one rule and every rule follows AD hours.
    pub fn is_as_ad_hours(&self) -> bool {
        self.has_rules() && self.rules.iter().all(|r| r.notification_type == NotificationType::AsAdHours)
    }

    /// Largest `hours_notice` across all rules.
    pub fn max_hours_notice(&self) -> Option<u32> {
        self.rules.iter().filter_map(|r| r.hours_notice).max()
    }

    pub fn has_weekend_rules(&self) -> bool {
        self.rules.iter().any(NotificationRule::is_weekend_rule)
    }

    pub fn has_schengen_rules(&self) -> bool {
        self.rules.iter().any(|r| r.schengen_only || r.non_schengen_only)
    }

    /// Human-readable summary of the rules.
    pub fn get_summary(&self) -> String {
        if !self.has_rules() {
            return "No notification rules parsed".to_string();
        }
        if self.is_h24() {
            return "H24 - No prior notice required".to_string();
        }
        if self.is_on_request() {
            return "On request / by arrangement".to_string();
        }

        let parts: Vec<String> = self.rules.iter().filter_map(NotificationRule::describe).collect();
        if parts.is_empty() { "See detailed rules".to_string() } else { parts.join("; ") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours_rule(hours: u32) -> NotificationRule {
        let mut rule = NotificationRule::new(RuleType::Ppr, NotificationType::Hours);
        rule.hours_notice = Some(hours);
        rule
    }

    #[test]
    fn weekday_description_variants() {
        let mut rule = hours_rule(24);
        assert_eq!(rule.weekday_description(), "all days");

        rule.weekday_start = Some(2);
        assert_eq!(rule.weekday_description(), "WED");

        rule.weekday_start = Some(0);
        rule.weekday_end = Some(4);
        assert_eq!(rule.weekday_description(), "weekdays");

        rule.weekday_start = Some(5);
        rule.weekday_end = Some(6);
        assert_eq!(rule.weekday_description(), "weekends");

        rule.weekday_start = Some(1);
        rule.weekday_end = Some(3);
        assert_eq!(rule.weekday_description(), "TUE-THU");
    }

    #[test]
    fn derived_properties() {
        let mut parsed = ParsedNotificationRules::new("LFXX", "PPR 24 HR", DEFAULT_FIELD_ID);
        assert!(!parsed.has_rules());
        assert!(!parsed.is_on_request());
        assert_eq!(parsed.max_hours_notice(), None);

        parsed.rules.push(hours_rule(24));
        parsed.rules.push(hours_rule(48));
        parsed.rules.push(NotificationRule::new(RuleType::Ppr, NotificationType::BusinessDay));
        assert_eq!(parsed.max_hours_notice(), Some(48));
        assert!(!parsed.is_h24());
        assert!(!parsed.has_weekend_rules());
    }

    #[test]
    fn on_request_requires_every_rule() {
        let mut parsed = ParsedNotificationRules::new("LFXX", "O/R", DEFAULT_FIELD_ID);
        parsed.rules.push(NotificationRule::new(RuleType::Customs, NotificationType::OnRequest));
        assert!(parsed.is_on_request());

        parsed.rules.push(hours_rule(2));
        assert!(!parsed.is_on_request());
    }

    #[test]
    fn summary_joins_rule_descriptions() {
        let mut parsed = ParsedNotificationRules::new("EDXX", "", DEFAULT_FIELD_ID);
        assert_eq!(parsed.get_summary(), "No notification rules parsed");

        let mut weekend = hours_rule(48);
        weekend.weekday_start = Some(5);
        weekend.weekday_end = Some(6);
        let mut business = NotificationRule::new(RuleType::Ppr, NotificationType::BusinessDay);
        business.specific_time = Some("1500".to_string());

        parsed.rules = vec![hours_rule(24), weekend, business];
        assert_eq!(parsed.get_summary(), "PPR 24h; weekends: PPR 48h; Last business day before 1500");
    }

    #[test]
    fn summary_without_renderable_rules() {
        let mut parsed = ParsedNotificationRules::new("EDXX", "", DEFAULT_FIELD_ID);
        parsed.rules.push(NotificationRule::new(RuleType::Customs, NotificationType::AsAdHours));
        assert_eq!(parsed.get_summary(), "See detailed rules");
    }

    #[test]
    fn enums_serialize_snake_case() {
        let rule = NotificationRule::new(RuleType::Ppr, NotificationType::BusinessDay);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["rule_type"], "ppr");
        assert_eq!(json["notification_type"], "business_day");
        assert_eq!(json["extraction_method"], "regex");
    }
}
