//! Helpers shared by rule productions.

use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::{Captures, Match};
use std::collections::HashMap;

/// A day token resolves either to one weekday or to a fixed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayToken {
    Day(Weekday),
    Span(Weekday, Weekday),
}

/// Day names as written in AIP text (lowercased).
static DAY_TOKENS: Lazy<HashMap<&'static str, DayToken>> = Lazy::new(|| {
    HashMap::from([
        ("mon", DayToken::Day(Weekday::Mon)),
        ("monday", DayToken::Day(Weekday::Mon)),
        ("tue", DayToken::Day(Weekday::Tue)),
        ("tuesday", DayToken::Day(Weekday::Tue)),
        ("wed", DayToken::Day(Weekday::Wed)),
        ("wednesday", DayToken::Day(Weekday::Wed)),
        ("thu", DayToken::Day(Weekday::Thu)),
        ("thursday", DayToken::Day(Weekday::Thu)),
        ("fri", DayToken::Day(Weekday::Fri)),
        ("friday", DayToken::Day(Weekday::Fri)),
        ("sat", DayToken::Day(Weekday::Sat)),
        ("saturday", DayToken::Day(Weekday::Sat)),
        ("sun", DayToken::Day(Weekday::Sun)),
        ("sunday", DayToken::Day(Weekday::Sun)),
        ("weekday", DayToken::Span(Weekday::Mon, Weekday::Fri)),
        ("weekdays", DayToken::Span(Weekday::Mon, Weekday::Fri)),
        ("week-end", DayToken::Span(Weekday::Sat, Weekday::Sun)),
        ("weekend", DayToken::Span(Weekday::Sat, Weekday::Sun)),
    ])
});

/// Weekday span parsed from a single day token. Days are 0 = Monday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DaySpan {
    pub start: Option<u8>,
    pub end: Option<u8>,
    pub includes_holidays: bool,
}

fn day_index(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// Parse a day token ("SAT", "weekend", "HOL", "SUN and HOL").
///
/// Any "hol"/"holiday(s)" part sets `includes_holidays` and is stripped before
/// the name lookup. Unknown names give an empty span.
pub(crate) fn parse_day(token: &str) -> DaySpan {
    let lower = token.trim().to_lowercase();
    let includes_holidays = lower.contains("hol");
    let name = regex!(r"\s*(?:and\s+)?hol(?:idays?)?").replace_all(&lower, "");

    match DAY_TOKENS.get(name.trim()) {
        Some(DayToken::Day(day)) => DaySpan { start: Some(day_index(*day)), end: None, includes_holidays },
        Some(DayToken::Span(start, end)) => {
            DaySpan { start: Some(day_index(*start)), end: Some(day_index(*end)), includes_holidays }
        }
        None => DaySpan { start: None, end: None, includes_holidays },
    }
}

/// First capture group among `groups` that participated in the match.
pub(crate) fn first_group<'t>(caps: &Captures<'t>, groups: &[usize]) -> Option<Match<'t>> {
    groups.iter().find_map(|&i| caps.get(i))
}

/// Map a full-width digit (U+FF10..U+FF19) to its ASCII form.
fn fold_digit(c: char) -> char {
    match c {
        '\u{ff10}'..='\u{ff19}' => char::from(b'0' + (c as u32 - 0xff10) as u8),
        _ => c,
    }
}

/// Parse a captured hour count. Full-width digits are folded to ASCII; values
/// that do not fit saturate to `u32::MAX` so the rule still scores as the
/// longest notice.
pub(crate) fn parse_hours(m: Match<'_>) -> Option<u32> {
    let digits: String = m.as_str().chars().map(fold_digit).collect();
    match digits.parse::<u32>() {
        Ok(hours) => Some(hours),
        Err(err) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            tracing::warn!(value = m.as_str(), %err, "hour count out of range, saturating");
            Some(u32::MAX)
        }
        Err(err) => {
            tracing::warn!(value = m.as_str(), %err, "hour count is not a number, skipping match");
            None
        }
    }
}
