// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::model::{Plan, RawPlanFile};

/// Load a plan file from a given path and return the raw `RawPlanFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading plan file at {:?}", path))?;

    parse_plan_str(&contents).with_context(|| format!("parsing TOML plan from {:?}", path))
}

/// Deserialize a plan from TOML text.
pub fn parse_plan_str(contents: &str) -> Result<RawPlanFile> {
    let raw: RawPlanFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a plan file from path and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Parses `text` task lists and assigns default ids.
/// - Checks for duplicate ids, unknown or self `wait` references and a
///   well-formed `[config].start`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Plan> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let plan = Plan::try_from(raw).with_context(|| format!("validating plan {:?}", path))?;
    Ok(plan)
}

/// Default plan path: `Plan.toml` in the current working directory.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Plan.toml")
}
