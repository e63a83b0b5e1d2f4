use std::path::PathBuf;

use cadence_core::types::RepeatType;
use cadence_recur::ShortMonth;
use clap::{Parser, Subcommand, ValueEnum};

/// Expand recurrence rules and edit single occurrences of a series.
#[derive(Debug, Parser)]
#[command(name = "cadence", version, about = "Recurrence rule expansion")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace). Overrides the configured level.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the occurrence dates of a rule.
    Generate(GenerateArgs),
    /// Expand a recurring event (JSON file) into one record per occurrence.
    Expand(EventArgs),
    /// Print the repeat description of an event (JSON file).
    Describe(EventArgs),
    /// Detach one occurrence of a recurring event into a standalone record.
    Detach(DetachArgs),
    /// Remove one record, by id, from a list of events (JSON file).
    Delete(DeleteArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// First occurrence, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// daily, weekly, monthly or yearly.
    #[arg(long)]
    pub repeat_type: RepeatType,

    /// Number of periods between occurrences.
    #[arg(long, default_value_t = 1)]
    pub interval: u32,

    /// Last possible occurrence (inclusive), YYYY-MM-DD.
    #[arg(long)]
    pub end_date: String,

    /// Handling of anchor days missing from shorter months.
    #[arg(long, value_enum, default_value_t = ShortMonthArg::Auto)]
    pub short_month: ShortMonthArg,

    /// Print a JSON array instead of one date per line.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShortMonthArg {
    Auto,
    Skip,
    Clamp,
}

impl From<ShortMonthArg> for ShortMonth {
    fn from(arg: ShortMonthArg) -> Self {
        match arg {
            ShortMonthArg::Auto => Self::Auto,
            ShortMonthArg::Skip => Self::Skip,
            ShortMonthArg::Clamp => Self::Clamp,
        }
    }
}

/// Arguments for subcommands that take a single event.
#[derive(Debug, clap::Args)]
pub struct EventArgs {
    /// Path to the event JSON file.
    pub event: PathBuf,
}

/// Arguments for the `detach` subcommand.
#[derive(Debug, clap::Args)]
pub struct DetachArgs {
    /// Path to the event JSON file.
    pub event: PathBuf,

    /// Date of the occurrence to detach, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,
}

/// Arguments for the `delete` subcommand.
#[derive(Debug, clap::Args)]
pub struct DeleteArgs {
    /// Path to a JSON array of events.
    pub events: PathBuf,

    /// Id of the record to remove.
    #[arg(long)]
    pub id: String,
}
