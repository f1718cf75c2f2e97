use crate::engine::{self, CompiledRules, NoFallback, RuleExtractor};
use crate::model::{DEFAULT_FIELD_ID, ExtractionMethod, ParsedNotificationRules};
use crate::score::HassleScore;
use crate::{Rule, Stage};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);
static DEFAULT_COMPILED: Lazy<CompiledRules<'static>> = Lazy::new(|| CompiledRules::new(&DEFAULT_RULES));
static DEFAULT_PARSER: Lazy<NotificationParser> = Lazy::new(NotificationParser::new);

const WARN_EMPTY: &str = "Empty text";
const WARN_NO_REGEX_MATCH: &str = "Could not parse notification rules with regex patterns";
const WARN_NO_FALLBACK_MATCH: &str = "Could not parse with regex or LLM";

/// Options that affect parsing.
#[derive(Debug, Clone)]
pub struct Options {
    /// AIP field id the text was taken from; recorded on the result.
    pub field_id: u32,
    /// Consult the parser's fallback extractor when no regex rule matches.
    pub use_fallback: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { field_id: DEFAULT_FIELD_ID, use_fallback: false }
    }
}

/// Per-stage trace entry in [`ParseDetails`].
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub stage: Stage,
    pub duration: Duration,
    pub rules_considered: usize,
    pub matches: usize,
    pub produced: usize,
}

/// Additional details returned by [`parse_verbose_with`].
///
/// Compact on purpose: enough to see which rules ran and why a text produced
/// what it did, without dumping regex internals.
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent in the staged rule run, annotation included.
    pub extract: Duration,
    /// Names of rules that survived bucket gating.
    pub active_rules: Vec<String>,
    /// Short-circuit rule that ended extraction, if any.
    pub short_circuit: Option<String>,
    pub stages: Vec<StageSummary>,
    /// Time spent on Schengen / operating-hours annotation.
    pub annotate: Duration,
    /// Whether the fallback extractor was consulted.
    pub fallback_used: bool,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub parsed: ParsedNotificationRules,
    pub details: ParseDetails,
}

/// Parses AIP notification text into rules.
///
/// Holds the compiled rule table and an optional fallback extractor. Parsing
/// never fails: problems are reported through `parse_warnings`.
pub struct NotificationParser {
    compiled: &'static CompiledRules<'static>,
    fallback: Box<dyn RuleExtractor>,
}

impl std::fmt::Debug for NotificationParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationParser")
            .field("rules", &self.compiled.rules.len())
            .field("fallback", &"<extractor>")
            .finish()
    }
}

impl Default for NotificationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationParser {
    /// Parser over the default rule table, with no fallback.
    pub fn new() -> Self {
        NotificationParser { compiled: &DEFAULT_COMPILED, fallback: Box::new(NoFallback) }
    }

    /// Use `extractor` when regex extraction finds nothing and
    /// `Options::use_fallback` is set.
    pub fn with_fallback(mut self, extractor: impl RuleExtractor + 'static) -> Self {
        self.fallback = Box::new(extractor);
        self
    }

    /// Parse `text` for aerodrome `icao`.
    pub fn parse(&self, icao: &str, text: &str, options: &Options) -> ParsedNotificationRules {
        let mut parsed = ParsedNotificationRules::new(icao, text, options.field_id);
        if text.trim().is_empty() {
            parsed.parse_warnings.push(WARN_EMPTY.to_string());
            return parsed;
        }

        parsed.rules = engine::Parser::new_compiled(text, self.compiled).run();
        self.finish(&mut parsed, text, options);
        parsed
    }

    /// Parse every `(icao, text)` pair. Output index matches input index.
    pub fn parse_batch<I, S>(&self, pairs: I, options: &Options) -> Vec<ParsedNotificationRules>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        pairs.into_iter().map(|(icao, text)| self.parse(icao.as_ref(), text.as_ref(), options)).collect()
    }

    /// Parse and also return stage-by-stage details.
    pub fn parse_verbose(&self, icao: &str, text: &str, options: &Options) -> ParseResultVerbose {
        let start = Instant::now();
        let mut parsed = ParsedNotificationRules::new(icao, text, options.field_id);

        if text.trim().is_empty() {
            parsed.parse_warnings.push(WARN_EMPTY.to_string());
            let details = ParseDetails {
                total: start.elapsed(),
                extract: Duration::ZERO,
                active_rules: Vec::new(),
                short_circuit: None,
                stages: Vec::new(),
                annotate: Duration::ZERO,
                fallback_used: false,
            };
            return ParseResultVerbose { parsed, details };
        }

        let parser = engine::Parser::new_compiled(text, self.compiled);
        let active_rules = parser.active_rule_names().into_iter().map(str::to_string).collect();
        let run = parser.run_with_metrics();
        parsed.rules = run.rules;
        let fallback_used = self.finish(&mut parsed, text, options);

        let details = ParseDetails {
            total: start.elapsed(),
            extract: run.metrics.total,
            active_rules,
            short_circuit: run.short_circuit.map(str::to_string),
            stages: run
                .metrics
                .stages
                .iter()
                .map(|m| StageSummary {
                    stage: m.stage,
                    duration: m.duration,
                    rules_considered: m.rules_considered,
                    matches: m.matches,
                    produced: m.produced,
                })
                .collect(),
            annotate: run.metrics.annotate,
            fallback_used,
        };

        ParseResultVerbose { parsed, details }
    }

    /// Consult the fallback when the regex run found nothing and record
    /// warnings. Returns whether the fallback was used.
    fn finish(&self, parsed: &mut ParsedNotificationRules, text: &str, options: &Options) -> bool {
        let mut fallback_used = false;
        if parsed.rules.is_empty() {
            if options.use_fallback {
                fallback_used = true;
                let mut found = self.fallback.extract(&parsed.icao, text.trim());
                for rule in found.iter_mut() {
                    rule.extraction_method = ExtractionMethod::Llm;
                }
                if found.is_empty() {
                    parsed.parse_warnings.push(WARN_NO_FALLBACK_MATCH.to_string());
                }
                parsed.rules = found;
            } else {
                parsed.parse_warnings.push(WARN_NO_REGEX_MATCH.to_string());
            }
        }

        if parsed.rules.is_empty() {
            tracing::debug!(icao = %parsed.icao, warnings = ?parsed.parse_warnings, "no notification rules extracted");
        } else {
            tracing::debug!(
                icao = %parsed.icao,
                rules = parsed.rules.len(),
                fallback_used,
                "parsed notification rules"
            );
        }
        fallback_used
    }
}

/// Parse `text` with the default parser and field id 302.
///
/// # Example
/// ```
/// use ga_notify::{NotificationType, parse};
///
/// let out = parse("LFXX", "PPR 24 HR");
/// assert_eq!(out.rules[0].notification_type, NotificationType::Hours);
/// assert_eq!(out.max_hours_notice(), Some(24));
/// ```
pub fn parse(icao: &str, text: &str) -> ParsedNotificationRules {
    parse_with(icao, text, &Options::default())
}

/// Parse `text` with the default parser and the provided `options`.
pub fn parse_with(icao: &str, text: &str, options: &Options) -> ParsedNotificationRules {
    DEFAULT_PARSER.parse(icao, text, options)
}

/// Parse every `(icao, text)` pair with the default parser.
pub fn parse_batch<I, S>(pairs: I, options: &Options) -> Vec<ParsedNotificationRules>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    DEFAULT_PARSER.parse_batch(pairs, options)
}

/// Parse `text` and return extra (compact) debug details.
pub fn parse_verbose_with(icao: &str, text: &str, options: &Options) -> ParseResultVerbose {
    DEFAULT_PARSER.parse_verbose(icao, text, options)
}

/// Parse and score in one call.
pub fn score(icao: &str, text: &str) -> HassleScore {
    HassleScore::from_parsed_rules(&parse(icao, text))
}
