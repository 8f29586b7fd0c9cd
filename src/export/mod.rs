// src/export/mod.rs

//! Text projections of a computed schedule.
//!
//! - [`render_markwhen`] folds scheduled tasks into per-author, per-feature
//!   sections in markwhen timeline syntax, with one color tag per author.
//! - [`render_json`] emits the same data as a JSON report.

pub mod palette;

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dag::{AuthorGroups, Schedule, ScheduledTask};

pub use palette::color_for;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One feature section of one author, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub label: &'a str,
    pub tasks: Vec<&'a ScheduledTask>,
}

/// Split an author's tasks into feature sections, preserving task order.
pub fn sections(tasks: &[ScheduledTask]) -> Vec<Section<'_>> {
    let mut out: Vec<Section<'_>> = Vec::new();
    for task in tasks {
        let label = task.task.section_label();
        match out.iter_mut().find(|s| s.label == label) {
            Some(section) => section.tasks.push(task),
            None => out.push(Section {
                label,
                tasks: vec![task],
            }),
        }
    }
    out
}

/// Markwhen tag for an author: ASCII alphanumerics, `-` and `_` only.
pub fn author_tag(author: &str, ordinal: usize) -> String {
    let tag: String = author
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if tag.trim_matches('_').is_empty() {
        format!("author{}", ordinal + 1)
    } else {
        tag
    }
}

/// Render scheduled tasks as a markwhen document.
///
/// Output is deterministic: authors in group order, sections in
/// first-appearance order, tasks in list order. Unresolved task ids are
/// appended as comments.
pub fn render_markwhen(groups: &AuthorGroups<ScheduledTask>, unresolved: &[String]) -> String {
    let mut out = String::new();

    let tags: Vec<String> = groups
        .authors()
        .enumerate()
        .map(|(i, author)| author_tag(author, i))
        .collect();

    for (i, tag) in tags.iter().enumerate() {
        let _ = writeln!(out, "#{tag}: {}", color_for(i));
    }

    for (group, tag) in groups.iter().zip(&tags) {
        for section in sections(&group.tasks) {
            let _ = writeln!(out);
            let _ = writeln!(out, "section {} #{tag}", section.label.trim());
            for task in section.tasks {
                let _ = writeln!(
                    out,
                    "{}/{}: {}",
                    task.start_date.format(DATE_FORMAT),
                    task.end_date.format(DATE_FORMAT),
                    task.task.name.trim()
                );
            }
            let _ = writeln!(out, "endSection");
        }
    }

    if !unresolved.is_empty() {
        let _ = writeln!(out);
        for id in unresolved {
            let _ = writeln!(out, "// unresolved: {id}");
        }
    }

    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    start: NaiveDateTime,
    project_end: Option<NaiveDateTime>,
    authors: &'a AuthorGroups<ScheduledTask>,
    unresolved: &'a [String],
}

/// Render a schedule as a pretty-printed JSON report.
pub fn render_json(schedule: &Schedule, start: NaiveDateTime) -> serde_json::Result<String> {
    let report = JsonReport {
        start,
        project_end: schedule.project_end(),
        authors: &schedule.by_author,
        unresolved: &schedule.unresolved,
    };
    serde_json::to_string_pretty(&report)
}
