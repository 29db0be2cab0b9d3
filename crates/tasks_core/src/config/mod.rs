use std::path::PathBuf;

const DB_PATH_ENV_VAR: &str = "TASKS_DB_PATH";
const SCRATCH_PATH_ENV_VAR: &str = "TASKS_SCRATCH_PATH";
const SYNC_URL_ENV_VAR: &str = "TASKS_SYNC_URL";
const EDITOR_ENV_VAR: &str = "EDITOR";

const DEFAULT_DB_PATH: &str = "./tasks.db";
const DEFAULT_SCRATCH_PATH: &str = "./tmpTask.task";
const DEFAULT_SYNC_URL: &str = "http://localhost:8080/sync";
const DEFAULT_EDITOR: &str = "vi";

/// Database file used by this invocation. Lives in the working directory
/// unless overridden.
pub fn db_path() -> PathBuf {
    PathBuf::from(resolve(env_value(DB_PATH_ENV_VAR).as_deref(), DEFAULT_DB_PATH))
}

/// Scratch file staged for interactive edits. Overwritten on each edit and
/// not cleaned up afterward.
pub fn scratch_path() -> PathBuf {
    PathBuf::from(resolve(
        env_value(SCRATCH_PATH_ENV_VAR).as_deref(),
        DEFAULT_SCRATCH_PATH,
    ))
}

pub fn sync_url() -> String {
    resolve(env_value(SYNC_URL_ENV_VAR).as_deref(), DEFAULT_SYNC_URL)
}

pub fn editor_command() -> String {
    resolve(env_value(EDITOR_ENV_VAR).as_deref(), DEFAULT_EDITOR)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn resolve(value: Option<&str>, default: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
