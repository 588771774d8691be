use crate::engine::tenure::YearMonth;
use crate::profiles::DEFAULT_PROFILES_PATH;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "talent-intel",
    version,
    about = "Candidate evidence fusion: ranked skill confidence and career summaries"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the skill and career report for one candidate
    Report(ReportCommand),
    /// Build reports for every loaded profile
    Batch(BatchCommand),
    /// Print tenure facts, experience span and level for one candidate
    Facts(FactsCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Profile JSON file, or a directory of JSON files
    #[arg(long, default_value = DEFAULT_PROFILES_PATH)]
    pub profiles: PathBuf,

    /// Month that open-ended roles run up to (YYYY-MM); defaults to the current month
    #[arg(long)]
    pub as_of: Option<YearMonth>,

    /// Config file used in place of ./talent.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportCommand {
    pub candidate_id: String,
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Also write <id>_report.json into this directory
    #[arg(long)]
    pub outdir: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchCommand {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Write one <id>_report.json per profile instead of printing a JSON array
    #[arg(long)]
    pub outdir: Option<PathBuf>,
}

#[derive(Args)]
pub struct FactsCommand {
    pub candidate_id: String,
    #[command(flatten)]
    pub source: SourceArgs,
}
