// src/dag/mod.rs

//! Task dependency graph and forward scheduling.
//!
//! - [`task`] defines the input [`Task`], the scheduled form and the
//!   ordered per-author grouping both travel in.
//! - [`graph`] builds the "must finish before" graph from author order and
//!   explicit waits.
//! - [`scheduler`] walks that graph wavefront by wavefront and assigns
//!   start/end instants on the working calendar.

pub mod graph;
pub mod scheduler;
pub mod task;

pub use graph::DependencyGraph;
pub use scheduler::{Schedule, Scheduler, schedule};
pub use task::{AuthorGroup, AuthorGroups, Authored, ScheduledTask, Task, TaskId};
