// src/dag/scheduler.rs

use std::collections::HashMap;

use chrono::NaiveDateTime;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, info, warn};

use crate::calendar;
use crate::dag::graph::DependencyGraph;
use crate::dag::task::{AuthorGroups, ScheduledTask, Task, TaskId};
use crate::export;

/// Outcome of one forward pass over a [`DependencyGraph`].
#[derive(Debug, Clone)]
pub struct Schedule {
    /// The graph the pass ran over, kept for downstream visualisation.
    pub graph: DependencyGraph,
    /// Resolved tasks keyed by id.
    pub tasks: HashMap<TaskId, ScheduledTask>,
    /// Resolved tasks regrouped by author, in input order.
    pub by_author: AuthorGroups<ScheduledTask>,
    /// Tasks that never became ready because they sit on, or downstream of,
    /// a dependency cycle. Insertion order.
    pub unresolved: Vec<TaskId>,
    /// Number of wavefronts processed.
    pub wavefronts: usize,
    /// Markwhen rendering of `by_author`.
    pub export_text: String,
}

impl Schedule {
    pub fn get(&self, id: &str) -> Option<&ScheduledTask> {
        self.tasks.get(id)
    }

    /// `true` if every task in the graph was scheduled.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Latest end instant over all resolved tasks.
    pub fn project_end(&self) -> Option<NaiveDateTime> {
        self.tasks.values().map(|t| t.end_date).max()
    }
}

/// Forward scheduler: assigns start/end instants by wavefront propagation.
///
/// A task starts when its latest predecessor ends (or at `now` when it has
/// none) and ends after its duration has been folded onto the working
/// calendar.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    now: NaiveDateTime,
}

impl Scheduler {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Run one forward pass over `graph`.
    ///
    /// Kahn-style layering: the first wavefront is every task without
    /// predecessors; a task joins the next wavefront once all of its
    /// predecessors are resolved. Tasks whose remaining in-degree never
    /// reaches zero are reported in [`Schedule::unresolved`].
    pub fn schedule(&self, graph: DependencyGraph) -> Schedule {
        let inner = graph.inner();

        let mut in_degree: HashMap<NodeIndex, usize> = inner
            .node_indices()
            .map(|idx| (idx, incoming(inner, idx).len()))
            .collect();

        let mut wavefront: Vec<NodeIndex> = inner
            .node_indices()
            .filter(|idx| in_degree[idx] == 0)
            .collect();

        let mut resolved: HashMap<NodeIndex, ScheduledTask> = HashMap::new();
        let mut wavefronts = 0;

        while !wavefront.is_empty() {
            wavefronts += 1;
            debug!(
                wavefront = wavefronts,
                size = wavefront.len(),
                "scheduling wavefront"
            );

            let mut next = Vec::new();
            for idx in wavefront {
                let task = &inner[idx];

                let start = incoming(inner, idx)
                    .iter()
                    .filter_map(|pred| resolved.get(pred).map(|s| s.end_date))
                    .max()
                    .unwrap_or(self.now);
                let end = calendar::advance(start, task.effective_hours());

                debug!(
                    task = %task.id,
                    %start,
                    %end,
                    hours = task.effective_hours(),
                    "task scheduled"
                );
                resolved.insert(idx, ScheduledTask::new(task.clone(), start, end));

                for succ in outgoing(inner, idx) {
                    if let Some(remaining) = in_degree.get_mut(&succ) {
                        *remaining = remaining.saturating_sub(1);
                        if *remaining == 0 && !resolved.contains_key(&succ) {
                            next.push(succ);
                        }
                    }
                }
            }
            wavefront = next;
        }

        let unresolved: Vec<TaskId> = inner
            .node_indices()
            .filter(|idx| !resolved.contains_key(idx))
            .map(|idx| inner[idx].id.clone())
            .collect();

        if !unresolved.is_empty() {
            warn!(
                ?unresolved,
                "dependency cycle: tasks could not be scheduled"
            );
        }

        // Node order is author-list order, so regrouping keeps each
        // author's sequence intact.
        let by_author: AuthorGroups<ScheduledTask> = inner
            .node_indices()
            .filter_map(|idx| resolved.get(&idx).cloned())
            .collect();

        let tasks: HashMap<TaskId, ScheduledTask> = resolved
            .into_values()
            .map(|s| (s.task.id.clone(), s))
            .collect();

        let export_text = export::render_markwhen(&by_author, &unresolved);

        info!(
            scheduled = tasks.len(),
            unresolved = unresolved.len(),
            wavefronts,
            "schedule computed"
        );

        Schedule {
            graph,
            tasks,
            by_author,
            unresolved,
            wavefronts,
            export_text,
        }
    }
}

/// Schedule `graph` starting at `now`.
pub fn schedule(graph: DependencyGraph, now: NaiveDateTime) -> Schedule {
    Scheduler::new(now).schedule(graph)
}

/// Distinct predecessors of a node.
fn incoming(graph: &DiGraph<Task, ()>, idx: NodeIndex) -> Vec<NodeIndex> {
    neighbours(graph, idx, Direction::Incoming)
}

fn outgoing(graph: &DiGraph<Task, ()>, idx: NodeIndex) -> Vec<NodeIndex> {
    neighbours(graph, idx, Direction::Outgoing)
}

fn neighbours(graph: &DiGraph<Task, ()>, idx: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
    let mut found: Vec<NodeIndex> = graph.neighbors_directed(idx, dir).collect();
    found.sort_unstable();
    found.dedup();
    found
}
