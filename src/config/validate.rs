// src/config/validate.rs

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::DAY_START;
use crate::dag::{AuthorGroups, Task};
use crate::errors::{PlanError, Result};

/// Run semantic validation against the task lists of a plan.
///
/// This checks:
/// - there is at least one task
/// - task ids are unique across all authors
/// - every `wait` id refers to an existing task
/// - no task waits for itself
///
/// It does **not** reject dependency cycles; the scheduler reports those
/// as unresolved tasks.
pub fn validate_tasks(tasks: &AuthorGroups<Task>) -> Result<()> {
    ensure_has_tasks(tasks)?;
    let ids = ensure_unique_ids(tasks)?;
    validate_waits(tasks, &ids)?;
    Ok(())
}

fn ensure_has_tasks(tasks: &AuthorGroups<Task>) -> Result<()> {
    if tasks.is_empty() {
        return Err(PlanError::Config(
            "plan must contain at least one task".to_string(),
        ));
    }
    Ok(())
}

fn ensure_unique_ids(tasks: &AuthorGroups<Task>) -> Result<HashSet<&str>> {
    let mut seen = HashSet::new();
    for task in tasks.items() {
        if !seen.insert(task.id.as_str()) {
            return Err(PlanError::DuplicateTaskId(task.id.clone()));
        }
    }
    Ok(seen)
}

fn validate_waits(tasks: &AuthorGroups<Task>, ids: &HashSet<&str>) -> Result<()> {
    for task in tasks.items() {
        for dep in &task.wait_task_ids {
            if dep == &task.id {
                return Err(PlanError::Config(format!(
                    "task '{}' cannot wait for itself",
                    task.id
                )));
            }
            if !ids.contains(dep.as_str()) {
                return Err(PlanError::UnknownDependency {
                    task: task.id.clone(),
                    dep: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Parse a start instant.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`, or a bare
/// date (meaning 09:00 that day).
pub fn parse_start(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(DAY_START))
        })
        .ok_or_else(|| PlanError::InvalidStart(s.to_string()))
}
