//! CLI interface using clap
//!
//! Provides the command-line interface for HotelCheck

mod commands;

pub use commands::*;

use crate::issue::{Severity, Status, StatusGroup};
use clap::{Parser, Subcommand};

/// HotelCheck - Hotel inspection checklist and issue tracking tool
#[derive(Parser, Debug)]
#[command(name = "hotelcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the workspace (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    pub path: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a HotelCheck workspace
    Init(InitArgs),

    /// Print the inspection checklist
    Catalog(CatalogArgs),

    /// Show one checklist item with its context and issues
    Show(ShowArgs),

    /// Report an issue against a checklist item
    Report(ReportArgs),

    /// List reported issues
    Issues(IssuesArgs),

    /// Change the status of an issue
    SetStatus(SetStatusArgs),

    /// Show workspace statistics
    Stats(StatsArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force re-initialization
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Only print one category
    #[arg(short, long)]
    pub category: Option<u32>,

    /// Print item descriptions, not just counts
    #[arg(short, long)]
    pub items: bool,
}

/// Arguments for show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Checklist item id (e.g. 1001)
    pub item_id: u32,
}

/// Arguments for report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Checklist item id the issue is reported against
    pub item_id: u32,

    /// Short summary of the issue
    #[arg(short, long)]
    pub title: String,

    /// Longer description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Severity (low, medium, high, critical)
    #[arg(short, long, default_value = "medium")]
    pub severity: Severity,

    /// Who is reporting (falls back to default_reporter from config)
    #[arg(short, long)]
    pub reporter: Option<String>,

    /// Who to assign the issue to
    #[arg(short, long)]
    pub assign: Option<String>,
}

/// Arguments for issues command
#[derive(Parser, Debug)]
pub struct IssuesArgs {
    /// Only issues for one checklist item
    #[arg(short, long)]
    pub item: Option<u32>,

    /// Status group filter (all, open, in-progress, resolved)
    #[arg(short, long, default_value = "all")]
    pub group: StatusGroup,
}

/// Arguments for set-status command
#[derive(Parser, Debug)]
pub struct SetStatusArgs {
    /// Issue id to transition
    pub issue_id: String,

    /// Target status (open, in-progress, resolved, closed)
    pub status: Status,
}

/// Arguments for stats command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Break totals down per category
    #[arg(short, long)]
    pub categories: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
