// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("task '{task}' waits for unknown task '{dep}'")]
    UnknownDependency { task: String, dep: String },

    #[error("duplicate task id '{0}'")]
    DuplicateTaskId(String),

    #[error("invalid start instant '{0}' (expected YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD HH:MM)")]
    InvalidStart(String),

    #[error("{} task(s) could not be scheduled (dependency cycle): {}", .0.len(), .0.join(", "))]
    UnresolvedTasks(Vec<String>),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
