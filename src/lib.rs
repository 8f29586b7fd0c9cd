// src/lib.rs

pub mod calendar;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod export;
pub mod logging;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{Plan, load_and_validate, parse_start};
use crate::dag::{DependencyGraph, Scheduler};
use crate::errors::PlanError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading and validation
/// - graph construction
/// - the forward scheduler
/// - rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let plan_path = PathBuf::from(&args.plan);
    let plan = load_and_validate(&plan_path)?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let start = resolve_start(args.start.as_deref(), &plan)?;
    info!(%start, tasks = plan.task_count(), "scheduling plan");

    let graph = DependencyGraph::build(&plan.tasks);
    let schedule = Scheduler::new(start).schedule(graph);

    if args.strict && !schedule.is_complete() {
        return Err(PlanError::UnresolvedTasks(schedule.unresolved.clone()).into());
    }

    match args.format {
        OutputFormat::Markwhen => print!("{}", schedule.export_text),
        OutputFormat::Json => println!("{}", export::render_json(&schedule, start)?),
    }

    Ok(())
}

/// Start instant: `--start`, then `[config].start`, then local now
/// (truncated to the minute).
fn resolve_start(flag: Option<&str>, plan: &Plan) -> Result<NaiveDateTime> {
    if let Some(s) = flag {
        return Ok(parse_start(s)?);
    }
    if let Some(start) = plan.start {
        return Ok(start);
    }
    let now = Local::now().naive_local();
    Ok(now
        .date()
        .and_hms_opt(now.hour(), now.minute(), 0)
        .unwrap_or(now))
}

/// Dry-run output: print tasks and dependency edges.
fn print_dry_run(plan: &Plan) {
    println!("plandag dry-run");
    if let Some(start) = plan.start {
        println!("  config.start = {start}");
    }
    println!();

    let graph = DependencyGraph::build(&plan.tasks);

    println!(
        "tasks ({}, {} authors, {} edges):",
        plan.task_count(),
        plan.tasks.author_count(),
        graph.edge_count()
    );
    for group in plan.tasks.iter() {
        println!("  author {}", group.author);
        for task in &group.tasks {
            println!(
                "    - {} [{}] {}h  {}",
                task.id,
                task.section_label(),
                task.duration_in_hour,
                task.name
            );
            let preds = graph.predecessors(&task.id);
            if !preds.is_empty() {
                println!("        after: {:?}", preds);
            }
        }
    }

    debug!("dry-run complete (nothing scheduled)");
}
