use serde::{Deserialize, Serialize};

/// A single to-do item. `created_at` is assigned by the database at insert
/// time and carries SQLite's `YYYY-MM-DD HH:MM:SS` UTC text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub done: bool,
    pub created_at: String,
}
