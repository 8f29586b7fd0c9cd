// src/dag/task.rs

//! Task records and the ordered author grouping they travel in.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Opaque task identifier.
pub type TaskId = String;

/// A unit of work owned by one author.
///
/// Tasks are read-only inputs to the scheduler; they are produced by the
/// config layer (or by callers building plans in code).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub author: String,
    /// Grouping label for export; may be empty.
    pub feature: String,
    pub duration_in_hour: f64,
    /// Ids this task must wait for, owned by any author.
    pub wait_task_ids: Vec<TaskId>,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        author: impl Into<String>,
        duration_in_hour: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
            feature: String::new(),
            duration_in_hour,
            wait_task_ids: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = feature.into();
        self
    }

    pub fn waiting_for(mut self, id: impl Into<TaskId>) -> Self {
        self.wait_task_ids.push(id.into());
        self
    }

    /// Duration actually scheduled: NaN, infinite and negative values count
    /// as zero hours.
    pub fn effective_hours(&self) -> f64 {
        if self.duration_in_hour.is_finite() && self.duration_in_hour > 0.0 {
            self.duration_in_hour
        } else {
            0.0
        }
    }

    /// Feature label used for grouping, falling back to the author.
    pub fn section_label(&self) -> &str {
        if self.feature.trim().is_empty() {
            &self.author
        } else {
            &self.feature
        }
    }
}

/// A task with its computed start and end instants.
///
/// Only the scheduler constructs these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledTask {
    #[serde(flatten)]
    pub task: Task,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

impl ScheduledTask {
    pub(crate) fn new(task: Task, start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            task,
            start_date,
            end_date,
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }
}

/// Anything that belongs to exactly one author.
pub trait Authored {
    fn author(&self) -> &str;
}

impl Authored for Task {
    fn author(&self) -> &str {
        &self.author
    }
}

impl Authored for ScheduledTask {
    fn author(&self) -> &str {
        &self.task.author
    }
}

/// One author's ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorGroup<T> {
    pub author: String,
    pub tasks: Vec<T>,
}

/// Ordered mapping author -> ordered items.
///
/// Authors keep first-appearance order and each list keeps insertion order;
/// for input tasks that order defines the sequential dependency chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AuthorGroups<T> {
    groups: Vec<AuthorGroup<T>>,
}

impl<T> Default for AuthorGroups<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> AuthorGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to `author`'s list, creating the list on first use.
    pub fn push(&mut self, author: &str, item: T) {
        match self.groups.iter_mut().find(|g| g.author == author) {
            Some(group) => group.tasks.push(item),
            None => self.groups.push(AuthorGroup {
                author: author.to_string(),
                tasks: vec![item],
            }),
        }
    }

    pub fn get(&self, author: &str) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|g| g.author == author)
            .map(|g| g.tasks.as_slice())
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.author.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuthorGroup<T>> {
        self.groups.iter()
    }

    /// All items, author by author.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.groups.iter().flat_map(|g| g.tasks.iter())
    }

    pub fn author_count(&self) -> usize {
        self.groups.len()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Authored> FromIterator<T> for AuthorGroups<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut groups = Self::new();
        for item in iter {
            let author = item.author().to_string();
            groups.push(&author, item);
        }
        groups
    }
}
