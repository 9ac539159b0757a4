//! mindscreen-cli
//!
//! Command implementations behind the `mindscreen` binary. Each command
//! takes its input as text and returns the JSON it would print, so the
//! binary only does argument parsing and I/O.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::{debug, info};

use mindscreen_core::models::stats::{AssessmentHistory, CommunityStats};
use mindscreen_core::models::survey::SurveyResult;
use mindscreen_instruments::config::ScoringConfig;
use mindscreen_instruments::intake::{self, IntakePolicy, SurveySubmission};
use mindscreen_instruments::response::ResponseSet;
use mindscreen_instruments::scoring::{Item, ScaleId};
use mindscreen_instruments::{RESPONSE_OPTIONS, all_instruments, require_instrument, score_with};

#[derive(Debug, Parser)]
#[command(name = "mindscreen", version, about = "Score mental-health screening questionnaires")]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a response set or a full submission.
    Score(ScoreArgs),
    /// Aggregate stored survey results.
    Stats(StatsArgs),
    /// List the supported questionnaires, or show one in full.
    Instruments(InstrumentsArgs),
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// JSON file to read, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Reject submissions with missing or out-of-range answers.
    #[arg(long)]
    pub strict: bool,

    /// Print the full stored record and realtime event, not only the assessment.
    #[arg(long)]
    pub record: bool,

    /// Scoring config override (JSON).
    #[arg(long, env = "MINDSCREEN_SCORING_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// JSON array of stored survey results, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Show one user's assessment history instead of community totals.
    #[arg(long)]
    pub user: Option<i64>,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct InstrumentsArgs {
    /// Show items and options of this instrument (e.g. `phq`).
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
    pub items: usize,
    pub max_score: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    pub id: String,
    pub name: String,
    pub scale: ScaleId,
    pub max_score: u32,
    pub options: Vec<&'static str>,
    pub items: Vec<Item>,
}

pub fn load_config(path: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::standard());
    };
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read scoring config at {}: {e}", path.display()))?;
    let config = ScoringConfig::from_json(&contents)
        .wrap_err_with(|| format!("invalid scoring config at {}", path.display()))?;
    info!(path = %path.display(), "loaded scoring config");
    Ok(config)
}

/// Accepts either a bare response object or a submission with a
/// `responses` field.
pub fn parse_submission(input: &str) -> Result<SurveySubmission> {
    let json: serde_json::Value = serde_json::from_str(input).wrap_err("input is not JSON")?;
    if json.get("responses").is_some_and(|r| r.is_object()) {
        debug!("reading full submission");
        return Ok(serde_json::from_value(json)?);
    }
    let responses: ResponseSet =
        serde_json::from_value(json).wrap_err("expected a JSON object of answers")?;
    Ok(SurveySubmission {
        responses,
        ..Default::default()
    })
}

pub fn run_score(input: &str, args: &ScoreArgs, config: &ScoringConfig) -> Result<String> {
    let submission = parse_submission(input)?;
    let policy = if args.strict {
        IntakePolicy::Strict
    } else {
        IntakePolicy::Lenient
    };

    if args.record {
        let assessed = intake::assess(submission, config, policy)?;
        return to_json(&assessed, args.pretty);
    }
    if policy == IntakePolicy::Strict {
        let assessed = intake::assess(submission, config, policy)?;
        return to_json(&assessed.assessment, args.pretty);
    }
    to_json(&score_with(&submission.responses, config), args.pretty)
}

pub fn run_stats(input: &str, args: &StatsArgs) -> Result<String> {
    let results =
        SurveyResult::parse_many(input).wrap_err("expected a JSON array of survey results")?;
    match args.user {
        Some(user_id) => to_json(&AssessmentHistory::for_user(&results, user_id), args.pretty),
        None => to_json(&CommunityStats::from_results(&results), args.pretty),
    }
}

pub fn run_instruments(args: &InstrumentsArgs) -> Result<String> {
    if let Some(id) = &args.id {
        let instrument = require_instrument(id)?;
        let range = instrument.option_range();
        let detail = InstrumentDetail {
            id: instrument.id().to_string(),
            name: instrument.name().to_string(),
            scale: instrument.scale(),
            max_score: instrument.max_score(),
            options: (range.min..=range.max)
                .filter_map(|v| RESPONSE_OPTIONS.get(usize::try_from(v).ok()?).copied())
                .collect(),
            items: instrument.items().to_vec(),
        };
        return to_json(&detail, true);
    }

    let summaries: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            items: i.items().len(),
            max_score: i.max_score(),
        })
        .collect();
    to_json(&summaries, true)
}

pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).wrap_err("failed to read stdin");
    }
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}
