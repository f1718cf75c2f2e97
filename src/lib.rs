use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod api;
pub mod batch;
mod engine;
mod error;
mod model;
mod rules;
mod score;

pub use api::{
    NotificationParser, Options, ParseDetails, ParseResultVerbose, StageSummary, parse, parse_batch, parse_verbose_with,
    parse_with, score,
};
pub use engine::{NoFallback, RuleExtractor};
pub use error::{Error, Result};
pub use model::{
    DEFAULT_FIELD_ID, ExtractionMethod, NotificationRule, NotificationType, ParsedNotificationRules, RuleType,
};
pub use score::{HassleLevel, HassleScore};

// --- Internal types ---------------------------------------------------------

/// Extraction stage a rule belongs to. Stages run in declaration order.
///
/// ```text
/// ShortCircuit ── first hit wins, nothing else runs
///      │ (no hit)
///      v
/// Weekday ──(nothing found)──> Hours
///      │                         │
///      └───────────┬─────────────┘
///                  v
///             BusinessDay (always, additive)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ShortCircuit,
    Weekday,
    Hours,
    BusinessDay,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::ShortCircuit, Stage::Weekday, Stage::Hours, Stage::BusinessDay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ShortCircuit => "short-circuit",
            Stage::Weekday => "weekday",
            Stage::Hours => "hours",
            Stage::BusinessDay => "business-day",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Stage::ShortCircuit => 0,
            Stage::Weekday => 1,
            Stage::Hours => 2,
            Stage::BusinessDay => 3,
        }
    }
}

pub(crate) type Production = Box<dyn Fn(&Captures<'_>) -> Option<NotificationRule> + Send + Sync>;

/// An extraction rule: a name, the stage it runs in, one regex and a
/// `production` turning a match into a `NotificationRule`.
///
/// The engine stamps `raw_text` and `confidence` onto whatever the production
/// returns, so productions only fill in the semantic fields.
pub(crate) struct Rule {
    pub name: &'static str,
    pub stage: Stage,
    pub pattern: &'static Regex,
    /// The rule is skipped when any of these match the text.
    pub suppressed_by: Vec<&'static Regex>,
    pub confidence: f64,
    pub production: Production,
    /// Bucket mask - rule only activates if input has all of these buckets.
    pub buckets: u32,
    /// Ordering within a stage (higher = evaluated first).
    pub priority: u16,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("stage", &self.stage)
            .field("pattern", &self.pattern.as_str())
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .field("priority", &self.priority)
            .finish()
    }
}
