// src/config/text.rs

//! Free-text task lists.
//!
//! One task per line; an optional `(5h)` marker (ASCII or full-width
//! parentheses, decimal hours allowed) gives the duration and is stripped
//! from the name. Blank lines are skipped; lines without a marker get
//! zero hours.

use regex::Regex;

use crate::dag::Task;
use crate::errors::Result;

const DURATION_PATTERN: &str = r"[(（]\s*(\d+(?:\.\d+)?)\s*[hH]\s*[)）]";

/// Compiled line parser; build once and reuse across authors.
#[derive(Debug, Clone)]
pub struct TaskTextParser {
    duration: Regex,
}

impl TaskTextParser {
    pub fn new() -> Result<Self> {
        let duration = Regex::new(DURATION_PATTERN).map_err(anyhow::Error::from)?;
        Ok(Self { duration })
    }

    /// Duration in hours and the cleaned name for one line, or `None` for
    /// a blank line.
    pub fn parse_line(&self, line: &str) -> Option<(String, f64)> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let hours = self
            .duration
            .captures(trimmed)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0);

        let name = self.duration.replace_all(trimmed, "").trim().to_string();
        Some((name, hours))
    }

    /// Parse `text` into tasks owned by `author`.
    ///
    /// Ids are `<author>-<n>` starting at `first_index`.
    pub fn parse(&self, author: &str, feature: &str, text: &str, first_index: usize) -> Vec<Task> {
        text.lines()
            .filter_map(|line| self.parse_line(line))
            .enumerate()
            .map(|(i, (name, hours))| {
                Task::new(format!("{author}-{}", first_index + i), name, author, hours)
                    .with_feature(feature)
            })
            .collect()
    }
}

/// Convenience wrapper around [`TaskTextParser::parse`].
pub fn parse_task_text(
    author: &str,
    feature: &str,
    text: &str,
    first_index: usize,
) -> Result<Vec<Task>> {
    Ok(TaskTextParser::new()?.parse(author, feature, text, first_index))
}
