// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::dag::task::{AuthorGroups, Task, TaskId};

/// Directed "must finish before" graph over tasks.
///
/// Nodes carry the [`Task`] as payload and are keyed by task id. Edges come
/// from two independent rules:
/// - each author's list is a chain (task `i` -> task `i + 1`)
/// - every id in `wait_task_ids` points at the waiting task
///
/// Both node and edge insertion are idempotent. Cycles are not rejected
/// here; the scheduler reports them.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<Task, ()>,
    index: HashMap<TaskId, NodeIndex>,
    /// `(waiting task, missing id)` pairs skipped while adding explicit edges.
    dangling: Vec<(TaskId, TaskId)>,
}

impl DependencyGraph {
    /// Build the graph from author-ordered task lists.
    pub fn build(groups: &AuthorGroups<Task>) -> Self {
        let mut dag = Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            dangling: Vec::new(),
        };

        for task in groups.items() {
            dag.merge_node(task);
        }

        // Sequential edges: every author's list is itself a chain.
        for group in groups.iter() {
            for pair in group.tasks.windows(2) {
                dag.merge_edge(&pair[0].id, &pair[1].id);
            }
        }

        // Explicit edges from `wait_task_ids`.
        for task in groups.items() {
            for wait_id in &task.wait_task_ids {
                if dag.index.contains_key(wait_id) {
                    dag.merge_edge(wait_id, &task.id);
                } else {
                    warn!(
                        task = %task.id,
                        wait = %wait_id,
                        "task waits for an unknown id; dependency ignored"
                    );
                    dag.dangling.push((task.id.clone(), wait_id.clone()));
                }
            }
        }

        debug!(
            nodes = dag.graph.node_count(),
            edges = dag.graph.edge_count(),
            "dependency graph built"
        );
        dag
    }

    /// Insert a node unless one with the same id exists (first payload wins).
    fn merge_node(&mut self, task: &Task) -> NodeIndex {
        if let Some(&idx) = self.index.get(&task.id) {
            debug!(task = %task.id, "task id already present; keeping first payload");
            return idx;
        }
        let idx = self.graph.add_node(task.clone());
        self.index.insert(task.id.clone(), idx);
        idx
    }

    fn merge_edge(&mut self, from: &str, to: &str) {
        if let (Some(&a), Some(&b)) = (self.index.get(from), self.index.get(to)) {
            self.graph.update_edge(a, b, ());
        }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Task ids in insertion order.
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.graph
            .node_indices()
            .map(move |idx| self.graph[idx].id.as_str())
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Direct predecessors of a task, in insertion order.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, Direction::Incoming)
    }

    /// Direct successors of a task, in insertion order.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, Direction::Outgoing)
    }

    /// Tasks with no predecessors, in insertion order.
    pub fn roots(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.graph[idx].id.as_str())
            .collect()
    }

    pub fn dangling(&self) -> &[(TaskId, TaskId)] {
        &self.dangling
    }

    /// Regroup the node payloads by author, preserving insertion order.
    pub fn author_groups(&self) -> AuthorGroups<Task> {
        self.tasks().cloned().collect()
    }

    pub(crate) fn inner(&self) -> &DiGraph<Task, ()> {
        &self.graph
    }

    fn neighbours(&self, id: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut found: Vec<NodeIndex> = self.graph.neighbors_directed(idx, dir).collect();
        found.sort_unstable();
        found.dedup();
        found
            .into_iter()
            .map(|n| self.graph[n].id.as_str())
            .collect()
    }
}
