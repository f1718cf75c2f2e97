use ga_notify::{HassleLevel, HassleScore, NotificationRule, ParseResultVerbose, ParsedNotificationRules};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

fn level_color(level: HassleLevel) -> &'static str {
    match level {
        HassleLevel::None | HassleLevel::Low => ansi::GREEN,
        HassleLevel::Moderate => ansi::YELLOW,
        HassleLevel::High | HassleLevel::VeryHigh => ansi::RED,
        HassleLevel::NotAvailable => ansi::GRAY,
    }
}

/// One line per aerodrome: ICAO, level, score and summary.
pub fn print_line(parsed: &ParsedNotificationRules, score: &HassleScore, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "{}  {}  {}  {}",
        palette.bold(&parsed.icao),
        palette.paint(format!("{:<11}", score.level.as_str()), level_color(score.level)),
        palette.paint(format!("{:.2}", score.score), ansi::CYAN),
        score.summary,
    );
}

pub fn print_run(res: &ParseResultVerbose, score: &HassleScore, color: bool) {
    let palette = ansi::Palette::new(color);
    let parsed = &res.parsed;
    let details = &res.details;
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Parsing {}: \"{}\"", parsed.icao, parsed.raw_text.trim()), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    if details.stages.is_empty() {
        println!("{}", palette.dim("  No stages ran"));
    }
    for stage in &details.stages {
        println!(
            "  {} {}  {}",
            palette.paint(format!("{}:", stage.stage.as_str()), ansi::BLUE),
            if stage.produced > 0 {
                palette.paint(format!("✓ {} rules", stage.produced), ansi::GREEN)
            } else {
                palette.dim(format!("✗ {} rules", stage.produced))
            },
            palette.dim(format!("considered {} │ matches {}", stage.rules_considered, stage.matches)),
        );
    }
    if let Some(name) = &details.short_circuit {
        println!("  {} {}", palette.dim("short-circuited by"), palette.paint(name, ansi::CYAN));
    }
    if !details.active_rules.is_empty() {
        println!("  {} {}", palette.dim("active:"), palette.dim(details.active_rules.join(", ")));
    }

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if parsed.rules.is_empty() {
        println!("{}", palette.dim("  No rules produced"));
        for warning in &parsed.parse_warnings {
            println!("  {} {}", palette.paint("!", ansi::YELLOW), warning);
        }
        if details.fallback_used {
            println!("  {}", palette.dim("fallback extractor was consulted"));
        }
    } else {
        print_rules(&parsed.rules, &palette);
    }

    println!("\n{}", palette.paint("━━━ Hassle ━━━", ansi::GRAY));
    println!(
        "  {} {}  {}",
        palette.bold(palette.paint(score.level.as_str(), level_color(score.level))),
        palette.paint(format!("{:.2}", score.score), ansi::CYAN),
        score.summary,
    );

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Extract: {}  │  Annotate: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.extract), ansi::CYAN),
        palette.dim(format!("{:?}", details.annotate)),
    );
    println!();
}

fn print_rules(rules: &[NotificationRule], palette: &ansi::Palette) {
    for (idx, rule) in rules.iter().enumerate() {
        let headline = rule.describe().unwrap_or_else(|| format!("{:?}", rule.notification_type));
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(headline, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("\"{}\"", rule.raw_text), ansi::YELLOW),
        );

        let mut extras = vec![format!("{:?}", rule.rule_type), format!("confidence {:.2}", rule.confidence)];
        if rule.includes_holidays {
            extras.push("incl. holidays".to_string());
        }
        if rule.schengen_only {
            extras.push("schengen only".to_string());
        }
        if rule.non_schengen_only {
            extras.push("non-schengen only".to_string());
        }
        if let (Some(start), Some(end)) = (&rule.hours_start, &rule.hours_end) {
            extras.push(format!("open {start}-{end}"));
        }
        println!("      {}", palette.dim(extras.join(" │ ")));
    }
}
