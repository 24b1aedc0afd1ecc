//! HotelCheck - Hotel inspection checklist tool
//!
//! Walk the inspection checklist, report issues against checklist
//! items, and track them to resolution.

use anyhow::Result;
use clap::Parser;
use hotelcheck::cli::{catalog, init, issues, report, set_status, show, stats, Cli, Commands};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Get workspace path
    let path = Path::new(&cli.path);

    // Execute command
    match cli.command {
        Commands::Init(args) => {
            init(path, args.force)?;
        }

        Commands::Catalog(args) => {
            catalog(path, args.category, args.items, cli.format)?;
        }

        Commands::Show(args) => {
            show(path, args.item_id, cli.format)?;
        }

        Commands::Report(args) => {
            report(
                path,
                args.item_id,
                &args.title,
                args.description.as_deref(),
                args.severity,
                args.reporter.as_deref(),
                args.assign.as_deref(),
                cli.format,
            )?;
        }

        Commands::Issues(args) => {
            issues(path, args.item, args.group, cli.format)?;
        }

        Commands::SetStatus(args) => {
            set_status(path, &args.issue_id, args.status, cli.format)?;
        }

        Commands::Stats(args) => {
            stats(path, args.categories, cli.format)?;
        }
    }

    Ok(())
}
