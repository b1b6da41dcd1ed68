//! cs-project: cable schedule file format and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_schedule};

use std::path::Path;

pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn upgrade_and_check(schedule: ScheduleFile) -> ScheduleResult<ScheduleFile> {
    let schedule = migrate_to_latest(schedule)?;
    validate_schedule(&schedule)?;
    Ok(schedule)
}

pub fn from_yaml_str(content: &str) -> ScheduleResult<ScheduleFile> {
    upgrade_and_check(serde_yaml::from_str(content)?)
}

pub fn from_json_str(content: &str) -> ScheduleResult<ScheduleFile> {
    upgrade_and_check(serde_json::from_str(content)?)
}

pub fn load_yaml(path: &Path) -> ScheduleResult<ScheduleFile> {
    from_yaml_str(&std::fs::read_to_string(path)?)
}

pub fn load_json(path: &Path) -> ScheduleResult<ScheduleFile> {
    from_json_str(&std::fs::read_to_string(path)?)
}

/// Write a schedule as YAML. Invalid schedules are refused before anything
/// touches the file.
pub fn save_yaml(path: &Path, schedule: &ScheduleFile) -> ScheduleResult<()> {
    validate_schedule(schedule)?;
    std::fs::write(path, serde_yaml::to_string(schedule)?)?;
    Ok(())
}

/// Write a schedule as pretty-printed JSON.
pub fn save_json(path: &Path, schedule: &ScheduleFile) -> ScheduleResult<()> {
    validate_schedule(schedule)?;
    std::fs::write(path, serde_json::to_string_pretty(schedule)?)?;
    Ok(())
}
