// src/config/mod.rs

//! Plan file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Parse free-text task lists (`text.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate ids, waits and the start instant (`validate.rs`).

pub mod loader;
pub mod model;
pub mod text;
pub mod validate;

pub use loader::{default_plan_path, load_and_validate, load_from_path, parse_plan_str};
pub use model::{AuthorConfig, ConfigSection, Plan, RawPlanFile, TaskConfig};
pub use text::{TaskTextParser, parse_task_text};
pub use validate::{parse_start, validate_tasks};
