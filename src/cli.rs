use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "grantfit",
    version,
    about = "Grant eligibility assessment for EU and national programmes in Bosnia and Herzegovina"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding grantfit.toml and the catalog files it lists
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Assess as of this date (YYYY-MM-DD or RFC 3339) instead of now
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess a profile against one grant
    Assess(AssessCommand),
    /// Assess a profile against every grant, best first
    Batch(BatchCommand),
    /// List HIGH and MEDIUM matches
    Matches(MatchesCommand),
    /// Summary report over all grants
    Report(ReportCommand),
    /// List the grants in the catalog
    Grants,
    /// Validate every catalog entry
    Lint,
}

#[derive(Args)]
pub struct AssessCommand {
    pub profile: PathBuf,
    #[arg(long)]
    pub grant: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub profile: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct MatchesCommand {
    pub profile: PathBuf,
    /// Defaults to `[assessment] best_matches_limit`, or 5
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ReportCommand {
    pub profile: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
