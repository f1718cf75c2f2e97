//! Staged extraction parser.
//!
//! This module is the operational core of the engine:
//!
//! - Select the rules that are plausible for the text (bucket gating; see
//!   `compiled_rules.rs` and `trigger.rs`).
//! - Evaluate the stages in order, stamping `raw_text` and `confidence` onto
//!   every produced rule.
//! - Deduplicate general-hours rules (see `dedup.rs`).
//! - Annotate the result with Schengen scope and operating hours.
//!
//! ## Stage structure
//!
//! ```text
//! (0) trigger scan       -> buckets
//! (1) short-circuit      -> H24 > O/R > as AD hours; first hit ends the run
//! (2) weekday            -> every match, additive
//! (3) hours              -> only when (2) found nothing; dedup by hours
//! (4) business day       -> every match, additive
//! (5) annotate           -> schengen scope, operating window
//! ```
//!
//! Output is deterministic: the same text always yields the same rules in the
//! same order.

use super::compiled_rules::{CompiledRules, RuleId};
use super::dedup::dedup_first;
use super::metrics::{RunMetrics, RunResult, StageMetrics};
use super::trigger::TriggerInfo;
use crate::rules::annotations;
use crate::{NotificationRule, Rule, Stage};
use regex::Captures;
use std::time::Instant;

/// Parser orchestrates applying `Rule`s against one text.
///
/// Usage: create with `Parser::new_compiled(text, &compiled)` then call `run()`.
#[derive(Debug)]
pub struct Parser<'a> {
    /// Trimmed input text.
    text: &'a str,
    trigger: TriggerInfo,
    compiled: &'a CompiledRules<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new `Parser` for `text` using pre-compiled rules.
    pub fn new_compiled(text: &'a str, compiled: &'a CompiledRules<'a>) -> Self {
        let text = text.trim();
        let trigger = TriggerInfo::scan(text);
        tracing::trace!(buckets = ?trigger.buckets, "trigger scan");
        Parser { text, trigger, compiled }
    }

    fn active(&self, stage: Stage) -> Vec<&'a Rule> {
        let compiled: &'a CompiledRules<'a> = self.compiled;
        compiled.active_in(stage, self.trigger.buckets).into_iter().map(|id: RuleId| compiled.rules[id]).collect()
    }

    /// Names of the rules that survive bucket gating, in evaluation order.
    pub(crate) fn active_rule_names(&self) -> Vec<&'static str> {
        Stage::ALL.iter().flat_map(|&stage| self.active(stage)).map(|r| r.name).collect()
    }

    /// Run the rule's production and stamp provenance onto the result.
    fn produce(&self, rule: &Rule, caps: &Captures<'_>, raw_text: &str) -> Option<NotificationRule> {
        match (rule.production)(caps) {
            Some(mut produced) => {
                produced.raw_text = raw_text.to_string();
                produced.confidence = rule.confidence;
                tracing::trace!(rule = rule.name, raw_text, "rule produced");
                Some(produced)
            }
            None => {
                tracing::trace!(rule = rule.name, raw_text, "production returned nothing");
                None
            }
        }
    }

    /// Evaluate the short-circuit stage. Returns the single rule and the name
    /// of the rule that produced it.
    fn short_circuit(&self, metrics: &mut StageMetrics) -> Option<(NotificationRule, &'static str)> {
        for rule in self.active(Stage::ShortCircuit) {
            metrics.rules_considered += 1;
            let Some(caps) = rule.pattern.captures(self.text) else {
                continue;
            };
            metrics.matches += 1;
            if rule.suppressed_by.iter().any(|re| re.is_match(self.text)) {
                tracing::trace!(rule = rule.name, "suppressed");
                continue;
            }
            if let Some(produced) = self.produce(rule, &caps, self.text) {
                return Some((produced, rule.name));
            }
        }
        None
    }

    /// Evaluate an additive stage: every match of every active rule.
    fn collect(&self, stage: Stage, metrics: &mut StageMetrics) -> Vec<NotificationRule> {
        let mut out = Vec::new();
        for rule in self.active(stage) {
            metrics.rules_considered += 1;
            if rule.suppressed_by.iter().any(|re| re.is_match(self.text)) {
                continue;
            }
            for caps in rule.pattern.captures_iter(self.text) {
                metrics.matches += 1;
                let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                if let Some(produced) = self.produce(rule, &caps, raw) {
                    out.push(produced);
                }
            }
        }
        out
    }

    fn timed<T>(stage: Stage, stages: &mut Vec<StageMetrics>, f: impl FnOnce(&mut StageMetrics) -> T) -> T {
        let start = Instant::now();
        let mut metrics = StageMetrics::new(stage);
        let out = f(&mut metrics);
        metrics.duration = start.elapsed();
        stages.push(metrics);
        out
    }

    /// Run every stage and return the rules together with timing details.
    pub fn run_with_metrics(self) -> RunResult {
        let total_start = Instant::now();
        let mut stages: Vec<StageMetrics> = Vec::new();
        let mut rules: Vec<NotificationRule> = Vec::new();

        let short = Self::timed(Stage::ShortCircuit, &mut stages, |m| {
            let hit = self.short_circuit(m);
            m.produced = usize::from(hit.is_some());
            hit
        });

        let short_circuit = match short {
            Some((rule, name)) => {
                rules.push(rule);
                Some(name)
            }
            None => {
                let weekday = Self::timed(Stage::Weekday, &mut stages, |m| {
                    let found = self.collect(Stage::Weekday, m);
                    m.produced = found.len();
                    found
                });
                rules.extend(weekday);

                if rules.is_empty() {
                    let hours = Self::timed(Stage::Hours, &mut stages, |m| {
                        let found = dedup_first(self.collect(Stage::Hours, m));
                        m.produced = found.len();
                        found
                    });
                    rules.extend(hours);
                }

                let business = Self::timed(Stage::BusinessDay, &mut stages, |m| {
                    let found = self.collect(Stage::BusinessDay, m);
                    m.produced = found.len();
                    found
                });
                rules.extend(business);
                None
            }
        };

        let annotate_start = Instant::now();
        annotations::annotate_schengen(self.text, self.trigger.buckets, &mut rules);
        annotations::annotate_operating_hours(self.text, &mut rules);
        let annotate = annotate_start.elapsed();

        RunResult { rules, short_circuit, metrics: RunMetrics { total: total_start.elapsed(), stages, annotate } }
    }

    /// Run every stage and return only the extracted rules.
    pub fn run(self) -> Vec<NotificationRule> {
        self.run_with_metrics().rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationType;

    fn run(text: &str) -> RunResult {
        let rules = crate::rules::get();
        let compiled = CompiledRules::new(&rules);
        Parser::new_compiled(text, &compiled).run_with_metrics()
    }

    #[test]
    fn short_circuit_stops_the_run() {
        let res = run("H24, PPR 24 HR");
        assert_eq!(res.short_circuit, Some("h24"));
        assert_eq!(res.rules.len(), 1);
        assert_eq!(res.rules[0].notification_type, NotificationType::H24);
        assert_eq!(res.metrics.stages.len(), 1);
    }

    #[test]
    fn on_request_is_suppressed_by_hours() {
        let res = run("O/R, PPR 24 HR");
        assert_eq!(res.short_circuit, None);
        assert_eq!(res.rules.len(), 1);
        assert_eq!(res.rules[0].hours_notice, Some(24));
    }

    #[test]
    fn hours_stage_skipped_when_weekday_rules_found() {
        let res = run("SAT-SUN, PPR 48 HR");
        let stages: Vec<Stage> = res.metrics.stages.iter().map(|m| m.stage).collect();
        assert_eq!(stages, vec![Stage::ShortCircuit, Stage::Weekday, Stage::BusinessDay]);
    }

    #[test]
    fn raw_text_is_the_matched_substring() {
        let res = run("Customs: PPR 24 HR via handling agent");
        assert_eq!(res.rules.len(), 1);
        assert_eq!(res.rules[0].raw_text, "PPR 24 HR");
        assert!((res.rules[0].confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn plain_run_matches_metered_run() {
        let rules = crate::rules::get();
        let compiled = CompiledRules::new(&rules);
        let text = "MON-FRI: PPR 24 HR, SAT-SUN: PPR 48 HR";
        assert_eq!(Parser::new_compiled(text, &compiled).run(), run(text).rules);
    }

    #[test]
    fn active_rule_names_respect_gating() {
        let rules = crate::rules::get();
        let compiled = CompiledRules::new(&rules);
        let parser = Parser::new_compiled("contact tower for details", &compiled);
        assert!(parser.active_rule_names().is_empty());
    }
}
