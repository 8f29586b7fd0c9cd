// src/config/model.rs

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::warn;

use crate::config::text::TaskTextParser;
use crate::config::validate::{parse_start, validate_tasks};
use crate::dag::{AuthorGroups, Task};
use crate::errors::PlanError;

/// Plan file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// start = "2026-10-19T09:00:00"
///
/// [[author]]
/// name = "sk"
/// feature = "X"
/// text = """
/// Do X1(5h)
/// Do X2(10h)
/// """
///
/// [[author.task]]
/// id = "x3"
/// name = "Do X3"
/// hours = 12
/// wait = ["yh-1"]
/// ```
///
/// All sections are optional at parse time; [`Plan::try_from`] enforces
/// that the result contains at least one task.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlanFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// `[[author]]` entries, in file order.
    #[serde(default, rename = "author")]
    pub authors: Vec<AuthorConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// Instant the first tasks start at. If `None`, the caller supplies
    /// "now".
    #[serde(default)]
    pub start: Option<String>,
}

/// `[[author]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorConfig {
    pub name: String,

    /// Default feature label for this author's tasks.
    #[serde(default)]
    pub feature: String,

    /// Free-text task list, one task per line with an optional `(Nh)`
    /// duration marker. Parsed tasks come before any `[[author.task]]`.
    #[serde(default)]
    pub text: Option<String>,

    /// Structured `[[author.task]]` entries.
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskConfig>,
}

/// `[[author.task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Explicit id; defaults to `<author>-<n>` (1-based position in the
    /// author's list).
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub hours: f64,

    /// Ids of tasks (any author) that must finish before this one starts.
    #[serde(default)]
    pub wait: Vec<String>,

    /// Overrides the author's feature.
    #[serde(default)]
    pub feature: Option<String>,
}

/// Validated plan: ordered author task lists plus an optional start instant.
#[derive(Debug, Clone)]
pub struct Plan {
    pub start: Option<NaiveDateTime>,
    pub tasks: AuthorGroups<Task>,
}

impl Plan {
    /// Parse and validate a plan from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, PlanError> {
        let raw: RawPlanFile = toml::from_str(contents)?;
        Self::try_from(raw)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl TryFrom<RawPlanFile> for Plan {
    type Error = PlanError;

    fn try_from(raw: RawPlanFile) -> Result<Self, Self::Error> {
        let start = raw.config.start.as_deref().map(parse_start).transpose()?;

        let parser = TaskTextParser::new()?;
        let mut tasks = AuthorGroups::new();

        for author in &raw.authors {
            let name = author.name.trim();
            if name.is_empty() {
                return Err(PlanError::Config(
                    "every [[author]] needs a non-empty `name`".to_string(),
                ));
            }

            // An author may appear in several [[author]] entries; numbering
            // continues across them.
            let offset = tasks.get(name).map_or(0, |existing: &[Task]| existing.len());

            let mut list = match author.text.as_deref() {
                Some(text) => parser.parse(name, &author.feature, text, offset + 1),
                None => Vec::new(),
            };

            for tc in &author.tasks {
                let position = offset + list.len() + 1;
                list.push(task_from_config(name, &author.feature, tc, position));
            }

            for task in list {
                tasks.push(name, task);
            }
        }

        validate_tasks(&tasks)?;

        Ok(Self { start, tasks })
    }
}

fn task_from_config(author: &str, feature: &str, tc: &TaskConfig, position: usize) -> Task {
    let id = tc
        .id
        .clone()
        .unwrap_or_else(|| format!("{author}-{position}"));

    let hours = if tc.hours.is_finite() && tc.hours >= 0.0 {
        tc.hours
    } else {
        warn!(
            task = %id,
            hours = tc.hours,
            "malformed duration; treating as 0 hours"
        );
        0.0
    };

    Task {
        id,
        name: tc.name.clone(),
        author: author.to_string(),
        feature: tc.feature.clone().unwrap_or_else(|| feature.to_string()),
        duration_in_hour: hours,
        wait_task_ids: tc.wait.clone(),
    }
}
