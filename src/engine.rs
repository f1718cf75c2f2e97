//! Extraction engine.
//!
//! This module is the entry point for turning raw AIP text into
//! `NotificationRule`s. It is split into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (all)  ──┐
//!               │  CompiledRules::new           (compiled_rules.rs)
//!               └───────────────┬──────────────
//!                               │
//! text ── TriggerInfo::scan ────┼─ select active rules (buckets)
//!         (trigger.rs)          │
//!                               v
//!                     Parser::run (parser.rs)
//!                       - short-circuit stage (first hit wins)
//!                       - weekday, else hours (dedup.rs)
//!                       - business day
//!                       - schengen + operating hours annotation
//!                               │
//!                               v
//!                     Vec<NotificationRule>
//! ```
//!
//! The regex fallback capability (`fallback.rs`) sits outside the staged run:
//! `api.rs` consults it only when the run produced nothing.
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: indexes `Rule`s by stage and priority.
//! - `trigger.rs`: scans the raw text for coarse buckets used to skip rules.
//! - `parser.rs`: evaluates the stages in order and applies annotations.
//! - `dedup.rs`: keys for collapsing repeated hours rules.
//! - `metrics.rs`: per-stage timing and counts for verbose runs.
//! - `fallback.rs`: the injectable extractor used when regexes find nothing.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/fallback.rs"]
mod fallback;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/trigger.rs"]
mod trigger;

pub use compiled_rules::{BucketMask, CompiledRules};
pub use fallback::{NoFallback, RuleExtractor};
pub use parser::Parser;
