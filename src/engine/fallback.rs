//! Fallback extraction capability.
//!
//! When none of the regex rules produce anything, a parser configured with
//! `Options::use_fallback` hands the text to a `RuleExtractor`. Real
//! implementations would call out to a language model; the crate itself only
//! ships `NoFallback`, which keeps parsing a pure function.

use crate::NotificationRule;

/// Extracts notification rules from text the regex rules could not handle.
///
/// Implementations should return an empty vector rather than fail; the parser
/// turns "nothing found" into a parse warning.
pub trait RuleExtractor: Send + Sync {
    fn extract(&self, icao: &str, text: &str) -> Vec<NotificationRule>;
}

/// Extractor that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl RuleExtractor for NoFallback {
    fn extract(&self, _icao: &str, _text: &str) -> Vec<NotificationRule> {
        Vec::new()
    }
}

impl<F> RuleExtractor for F
where
    F: Fn(&str, &str) -> Vec<NotificationRule> + Send + Sync,
{
    fn extract(&self, icao: &str, text: &str) -> Vec<NotificationRule> {
        self(icao, text)
    }
}
