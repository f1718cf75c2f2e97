mod debug_report;

use clap::Parser;
use ga_notify::{DEFAULT_FIELD_ID, Error, HassleScore, Options, ParseResultVerbose, batch, parse_verbose_with};
use serde::Serialize;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parse AIP customs/immigration notification text and score the hassle.
///
/// Exit codes: 0 success, 1 internal or I/O error, 2 invalid arguments or
/// missing input.
#[derive(Parser, Debug)]
#[command(name = "ga-notify", version)]
struct Cli {
    /// ICAO code recorded on the result.
    #[arg(long, default_value = "ZZZZ")]
    icao: String,

    /// AIP field id the text was taken from.
    #[arg(long, env = "GA_NOTIFY_FIELD_ID", default_value_t = DEFAULT_FIELD_ID)]
    field_id: u32,

    /// Parse every ICAO<TAB>text line (or JSON array of {icao, text}) in FILE.
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    batch: Option<PathBuf>,

    /// Print the parse result and score as pretty JSON.
    #[arg(long)]
    json: bool,

    /// Print a stage-by-stage debug report.
    #[arg(short, long, conflicts_with = "json")]
    verbose: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, overrides_with = "color")]
    no_color: bool,

    /// Notification text. Read from stdin when omitted.
    #[arg(trailing_var_arg = true, value_name = "TEXT")]
    text: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    parsed: &'a ga_notify::ParsedNotificationRules,
    score: &'a HassleScore,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::EmptyInput) => {
            eprintln!("error: no input provided (pass TEXT, pipe it on stdin or use --batch)");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> ga_notify::Result<()> {
    let options = Options { field_id: cli.field_id, ..Options::default() };
    let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };

    let inputs: Vec<(String, String)> = match &cli.batch {
        Some(path) => batch::load_pairs(path)?.into_iter().map(|p| (p.icao, p.text)).collect(),
        None => {
            let text = if cli.text.is_empty() { read_stdin()? } else { cli.text.join(" ") };
            if text.trim().is_empty() {
                return Err(Error::EmptyInput);
            }
            vec![(cli.icao.clone(), text)]
        }
    };
    if inputs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let results: Vec<(ParseResultVerbose, HassleScore)> = inputs
        .iter()
        .map(|(icao, text)| {
            let res = parse_verbose_with(icao, text, &options);
            let score = HassleScore::from_parsed_rules(&res.parsed);
            (res, score)
        })
        .collect();

    if cli.json {
        let reports: Vec<Report<'_>> =
            results.iter().map(|(res, score)| Report { parsed: &res.parsed, score }).collect();
        let mut out = io::stdout().lock();
        if cli.batch.is_some() {
            serde_json::to_writer_pretty(&mut out, &reports)?;
        } else {
            serde_json::to_writer_pretty(&mut out, &reports[0])?;
        }
        writeln!(out)?;
        return Ok(());
    }

    for (res, score) in &results {
        if cli.verbose {
            debug_report::print_run(res, score, color);
        } else {
            debug_report::print_line(&res.parsed, score, color);
        }
    }
    Ok(())
}

fn read_stdin() -> ga_notify::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
