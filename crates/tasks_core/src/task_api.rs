use crate::error::AppError;
use crate::model::Task;
use crate::storage::Store;
use rusqlite::params;
use std::path::Path;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, description, done, created_at FROM tasks";

// created_at has second precision, so rowid breaks same-second ties in
// insertion order. Every listing shares this order.
const LISTING_ORDER: &str = "ORDER BY created_at ASC, rowid ASC";

/// Translates domain operations into queries against the storage adapter.
/// Positions are 1-based ranks within the incomplete listing, recomputed on
/// every call, never stored.
pub struct TaskRepository {
    store: Store,
}

impl TaskRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Ok(Self::new(Store::open(path)?))
    }

    pub fn add(&mut self, description: &str) -> Result<(), AppError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("task text is required"));
        }

        let id = Uuid::new_v4().to_string();
        self.store.execute_write(
            "INSERT INTO tasks (id, description, done) VALUES (?1, ?2, ?3)",
            params![id, trimmed, false],
        )?;

        Ok(())
    }

    pub fn list_incomplete(&self) -> Result<Vec<Task>, AppError> {
        self.select("WHERE done = 0")
    }

    pub fn list_completed(&self) -> Result<Vec<Task>, AppError> {
        self.select("WHERE done = 1")
    }

    pub fn list_all(&self) -> Result<Vec<Task>, AppError> {
        self.select("")
    }

    /// Resolve a 1-based position in the incomplete listing to its task.
    /// Re-queries and re-ranks the full incomplete set on each call.
    pub fn find_by_position(&self, position: i64) -> Result<Task, AppError> {
        if position <= 0 {
            return Err(AppError::index_out_of_bounds(format!(
                "no task at position {position}"
            )));
        }

        let mut tasks = self.list_incomplete()?;
        let index = (position - 1) as usize;
        if index >= tasks.len() {
            return Err(AppError::index_out_of_bounds(format!(
                "no task at position {position}"
            )));
        }

        Ok(tasks.swap_remove(index))
    }

    /// One-way transition; an unknown id updates zero rows and succeeds.
    pub fn mark_done(&mut self, id: &str) -> Result<(), AppError> {
        self.store
            .execute_write("UPDATE tasks SET done = 1 WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.store
            .execute_write("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub fn update_description(&mut self, id: &str, description: &str) -> Result<(), AppError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("description is required"));
        }

        self.store.execute_write(
            "UPDATE tasks SET description = ?1 WHERE id = ?2",
            params![trimmed, id],
        )?;
        Ok(())
    }

    fn select(&self, where_clause: &str) -> Result<Vec<Task>, AppError> {
        let sql = if where_clause.is_empty() {
            format!("{SELECT_COLUMNS} {LISTING_ORDER}")
        } else {
            format!("{SELECT_COLUMNS} {where_clause} {LISTING_ORDER}")
        };

        self.store.query_rows(&sql, [], |row| {
            Ok(Task {
                id: row.get(0)?,
                description: row.get(1)?,
                done: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
    }
}
