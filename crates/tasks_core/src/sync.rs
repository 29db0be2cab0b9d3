use crate::error::AppError;
use crate::model::Task;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::macros::format_description;

/// Bumped whenever the envelope layout changes.
pub const SYNC_SCHEMA_VERSION: u32 = 1;

pub const CONTENT_TYPE: &str = "application/x-postcard";

/// A task as it crosses the wire: same fields as [`Task`], with the
/// timestamp collapsed to epoch seconds (the store keeps second precision,
/// so nothing is lost).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub description: String,
    pub done: bool,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnvelope {
    pub schema_version: u32,
    pub tasks: Vec<TaskRecord>,
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Result<Self, AppError> {
        Ok(Self {
            id: task.id.clone(),
            description: task.description.clone(),
            done: task.done,
            created_at: created_at_epoch(&task.created_at)?,
        })
    }
}

impl TaskEnvelope {
    pub fn from_tasks(tasks: &[Task]) -> Result<Self, AppError> {
        let mut records = Vec::with_capacity(tasks.len());
        for task in tasks {
            records.push(TaskRecord::from_task(task)?);
        }

        Ok(Self {
            schema_version: SYNC_SCHEMA_VERSION,
            tasks: records,
        })
    }
}

// SQLite CURRENT_TIMESTAMP text is UTC.
fn created_at_epoch(value: &str) -> Result<i64, AppError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let parsed = PrimitiveDateTime::parse(value, format).map_err(|_| {
        AppError::invalid_data(format!("created_at is not a store timestamp: {value}"))
    })?;
    Ok(parsed.assume_utc().unix_timestamp())
}

pub fn encode(envelope: &TaskEnvelope) -> Result<Vec<u8>, AppError> {
    postcard::to_allocvec(envelope).map_err(|err| AppError::invalid_data(err.to_string()))
}

pub fn decode(bytes: &[u8]) -> Result<TaskEnvelope, AppError> {
    postcard::from_bytes(bytes).map_err(|err| AppError::invalid_data(err.to_string()))
}

/// Single blocking POST; the response body comes back as opaque text. No
/// timeout handling — an unreachable endpoint blocks the invocation.
pub fn push(url: &str, body: &[u8]) -> Result<String, AppError> {
    let response = ureq::post(url)
        .set("Content-Type", CONTENT_TYPE)
        .send_bytes(body)
        .map_err(|err| AppError::transport(err.to_string()))?;

    response
        .into_string()
        .map_err(|err| AppError::transport(err.to_string()))
}
