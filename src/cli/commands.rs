//! Command implementations

use crate::catalog::ChecklistCategory;
use crate::issue::{filter_by_group, Issue, IssueDraft, Severity, Status, StatusGroup};
use crate::storage::Database;
use crate::tracker::{IssueStore, IssueTracker};
use crate::workspace::Workspace;
use anyhow::Result;
use std::path::Path;

use super::OutputFormat;

/// Initialize a HotelCheck workspace
pub fn init(path: &Path, force: bool) -> Result<()> {
    let workspace = Workspace::open(path)?;

    if workspace.is_initialized() && !force {
        anyhow::bail!("HotelCheck already initialized. Use --force to re-initialize.");
    }

    workspace.init_data_dir()?;

    let db_path = workspace.db_path();
    let _db = Database::open(&db_path)?;

    workspace.config().save(workspace.root())?;

    // Fail fast on a broken catalog override before anyone reports.
    let catalog = workspace.load_catalog()?;

    println!("✓ Initialized HotelCheck in {:?}", workspace.root());
    println!("  Database: {:?}", db_path);
    println!("  Config: {:?}", workspace.data_dir().join("config.toml"));
    println!(
        "  Checklist: {} categories, {} items",
        catalog.category_count(),
        catalog.item_count()
    );

    Ok(())
}

/// Print the inspection checklist
pub fn catalog(
    path: &Path,
    category: Option<u32>,
    with_items: bool,
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::open(path)?;
    let catalog = workspace.load_catalog()?;

    let selected: Vec<&ChecklistCategory> = catalog
        .categories()
        .iter()
        .filter(|c| category.map_or(true, |id| c.category_id == id))
        .collect();

    if selected.is_empty() {
        anyhow::bail!("No such category: {}", category.unwrap_or_default());
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!("Inspection Checklist");
    println!("====================\n");

    for cat in selected {
        let item_count: usize = cat.sections.iter().map(|s| s.items.len()).sum();
        println!(
            "[{}] {} ({} items)",
            cat.category_id, cat.category_name, item_count
        );

        for section in &cat.sections {
            println!("  [{}] {}", section.section_id, section.section_name);

            if with_items {
                for item in &section.items {
                    println!("    {} - {}", item.item_id, item.description);
                }
            }
        }
        println!();
    }

    Ok(())
}

/// Show one checklist item with its context and reported issues
pub fn show(path: &Path, item_id: u32, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::open(path)?;
    let catalog = workspace.load_catalog()?;

    let Some(ctx) = catalog.find_item(item_id) else {
        anyhow::bail!("No checklist item with id {}", item_id);
    };

    let issues = if workspace.is_initialized() {
        let db = Database::open(workspace.db_path())?;
        db.list_by_item(item_id)?
    } else {
        Vec::new()
    };

    if format == OutputFormat::Json {
        let view = serde_json::json!({
            "item": ctx.item,
            "section": { "sectionId": ctx.section.section_id, "sectionName": ctx.section.section_name },
            "category": { "categoryId": ctx.category.category_id, "categoryName": ctx.category.category_name },
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Item {}", ctx.item.item_id);
    println!("========\n");
    println!("{}", ctx.item.description);
    println!();
    println!(
        "Category: [{}] {}",
        ctx.category.category_id, ctx.category.category_name
    );
    println!(
        "Section:  [{}] {}",
        ctx.section.section_id, ctx.section.section_name
    );

    if issues.is_empty() {
        println!("\nNo issues reported for this item.");
    } else {
        println!("\nIssues ({}):", issues.len());
        println!("--------\n");
        print_issues_text(&issues);
    }

    Ok(())
}

/// Report a new issue against a checklist item
pub fn report(
    path: &Path,
    item_id: u32,
    title: &str,
    description: Option<&str>,
    severity: Severity,
    reporter: Option<&str>,
    assign: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::open(path)?;
    let catalog = workspace.load_catalog()?;

    // The tracker itself doesn't enforce referential integrity, so the
    // CLI checks the item exists before anything is stored.
    if catalog.find_item(item_id).is_none() {
        anyhow::bail!("No checklist item with id {}", item_id);
    }

    let reported_by = reporter
        .map(str::to_string)
        .or_else(|| workspace.config().default_reporter.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No reporter given. Pass --reporter or set default_reporter in config.")
        })?;

    let mut tracker = IssueTracker::new(open_db(&workspace)?);
    let issue = tracker.report(IssueDraft {
        item_id,
        title: title.to_string(),
        description: description.map(str::to_string),
        severity,
        reported_by,
        assigned_to: assign.map(str::to_string),
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issue)?),
        OutputFormat::Text => {
            println!("✓ Reported issue {}", issue.id);
            println!("  Item: {}", issue.item_id);
            println!("  Severity: {}", issue.severity);
            println!("  Status: {}", issue.status);
        }
    }

    Ok(())
}

/// List reported issues, optionally filtered by item and status group
pub fn issues(
    path: &Path,
    item: Option<u32>,
    group: StatusGroup,
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::open(path)?;
    let db = open_db(&workspace)?;

    let all = match item {
        Some(item_id) => db.list_by_item(item_id)?,
        None => db.list_all()?,
    };
    let filtered = filter_by_group(&all, group);

    match format {
        OutputFormat::Json => print_issues_json(&filtered)?,
        OutputFormat::Text => {
            if filtered.is_empty() {
                println!("No issues found.");
            } else {
                print_issues_text(&filtered);
            }
        }
    }

    Ok(())
}

/// Change the status of an issue
pub fn set_status(path: &Path, issue_id: &str, status: Status, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::open(path)?;
    let mut tracker = IssueTracker::new(open_db(&workspace)?);

    let Some(issue) = tracker.set_status(issue_id, status)? else {
        anyhow::bail!("Issue not found: {}", issue_id);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issue)?),
        OutputFormat::Text => {
            println!("✓ Issue {} is now {}", issue.id, issue.status);
            if let Some(resolved_at) = issue.resolved_at {
                println!("  Resolved at: {}", resolved_at.format("%Y-%m-%d %H:%M UTC"));
            }
        }
    }

    Ok(())
}

/// Show workspace statistics
pub fn stats(path: &Path, per_category: bool, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::open(path)?;
    let catalog = workspace.load_catalog()?;
    let db = open_db(&workspace)?;
    let stats = db.stats()?;

    if format == OutputFormat::Json {
        let view = serde_json::json!({
            "catalog": {
                "categories": catalog.category_count(),
                "sections": catalog.section_count(),
                "items": catalog.item_count(),
            },
            "issues": stats,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("HotelCheck Status");
    println!("=================\n");

    println!("Workspace: {:?}", workspace.root());
    println!(
        "Checklist: {} categories, {} sections, {} items",
        catalog.category_count(),
        catalog.section_count(),
        catalog.item_count()
    );
    println!("\nIssues: {}", stats.total);
    println!("  open:        {}", stats.open);
    println!("  in-progress: {}", stats.in_progress);
    println!("  resolved:    {}", stats.resolved);
    println!("  closed:      {}", stats.closed);

    if per_category {
        println!("\nPer category:");
        for cat in catalog.categories() {
            let count: usize = cat
                .sections
                .iter()
                .flat_map(|s| &s.items)
                .map(|item| db.list_by_item(item.item_id).map(|v| v.len()))
                .sum::<Result<usize>>()?;
            println!("  [{}] {}: {}", cat.category_id, cat.category_name, count);
        }
    }

    Ok(())
}

/// Open the workspace database, failing if `init` hasn't been run
fn open_db(workspace: &Workspace) -> Result<Database> {
    if !workspace.is_initialized() {
        anyhow::bail!("HotelCheck not initialized. Run 'hotelcheck init' first.");
    }
    Database::open(workspace.db_path())
}

/// Print issues in JSON format
pub fn print_issues_json(issues: &[Issue]) -> Result<()> {
    let json = serde_json::to_string_pretty(issues)?;
    println!("{}", json);
    Ok(())
}

/// Print issues in text format
pub fn print_issues_text(issues: &[Issue]) {
    for issue in issues {
        let severity_icon = match issue.severity {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
        };

        println!(
            "{} [{}] {} ({})",
            severity_icon, issue.severity, issue.title, issue.status
        );
        println!("   ID: {}", issue.id);
        println!("   Item: {}", issue.item_id);
        println!("   Reported by: {}", issue.reported_by);
        if let Some(ref assigned) = issue.assigned_to {
            println!("   Assigned to: {}", assigned);
        }
        println!(
            "   Created: {}",
            issue.created_at.format("%Y-%m-%d %H:%M UTC")
        );
        if let Some(resolved_at) = issue.resolved_at {
            println!("   Resolved: {}", resolved_at.format("%Y-%m-%d %H:%M UTC"));
        }
        if let Some(ref description) = issue.description {
            println!("   {}", description);
        }
        println!();
    }
}
