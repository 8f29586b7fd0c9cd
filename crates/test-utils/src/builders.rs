#![allow(dead_code)]

use plandag::dag::{AuthorGroups, DependencyGraph, Task};

/// Builder for author-ordered task lists to simplify test setup.
///
/// Tasks are appended to their author's list in call order, which is the
/// order the sequential dependency chain follows.
pub struct PlanBuilder {
    tasks: AuthorGroups<Task>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self {
            tasks: AuthorGroups::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        let author = task.author.clone();
        self.tasks.push(&author, task);
        self
    }

    /// Append `(id, hours)` pairs as a chain owned by `author`.
    pub fn with_chain(mut self, author: &str, items: &[(&str, f64)]) -> Self {
        for (id, hours) in items {
            self.tasks
                .push(author, TaskBuilder::new(id, author).hours(*hours).build());
        }
        self
    }

    pub fn build(self) -> AuthorGroups<Task> {
        self.tasks
    }

    pub fn graph(self) -> DependencyGraph {
        DependencyGraph::build(&self.tasks)
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str, author: &str) -> Self {
        Self {
            task: Task::new(id, format!("task {id}"), author, 0.0),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.task.duration_in_hour = hours;
        self
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.task.feature = feature.to_string();
        self
    }

    pub fn wait(mut self, id: &str) -> Self {
        self.task.wait_task_ids.push(id.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}
