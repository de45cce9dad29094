//! Task store owning the collection and its persistence.
//!
//! # Responsibility
//! - Own create/toggle/archive primitives over the task collection.
//! - Persist the full collection on every mutation.
//! - Recover to an empty collection when persisted data is malformed.
//!
//! # Invariants
//! - Stored titles are never empty.
//! - Tags are normalized before a task is stored.
//! - The newest-created task sits first in insertion order.

use crate::model::task::{Priority, Task, TaskId, TaskStatus};
use crate::store::backend::{StorageBackend, StorageError};
use crate::tags::normalize_tags;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by mutating store operations.
///
/// Read-time deserialization failures are recovered internally and never
/// reach callers; only transport and serialization failures surface here.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Submitted form values for one new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Display title; rejected when it trims to empty.
    pub title: String,
    /// Free-form notes.
    pub details: String,
    /// Urgency weight, fixed once created.
    pub priority: Priority,
    /// Raw comma-separated tag input, normalized on create.
    pub raw_tags: String,
    /// Optional deadline in epoch milliseconds.
    pub due_date: Option<i64>,
}

/// Exclusive owner of the task collection.
pub struct TaskStore<S: StorageBackend> {
    backend: S,
    tasks: Vec<Task>,
}

impl<S: StorageBackend> TaskStore<S> {
    /// Loads the persisted collection through the backend, or starts empty.
    ///
    /// Malformed persisted data is recovered as an empty collection and
    /// reported through a diagnostic log line only; no error reaches the
    /// caller for that case.
    pub fn load(backend: S) -> StoreResult<Self> {
        let tasks = match backend.read()? {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str::<Vec<Task>>(&payload) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=recovered error_code=malformed_payload error={err}"
                    );
                    Vec::new()
                }
            },
        };

        info!(
            "event=store_load module=store status=ok count={}",
            tasks.len()
        );
        Ok(Self { backend, tasks })
    }

    /// Read-only snapshot of the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Creates a task from submitted form values and persists the collection.
    ///
    /// A title that trims to empty is a silent no-op returning `Ok(None)`;
    /// the collection is left untouched.
    pub fn create(&mut self, draft: &TaskDraft) -> StoreResult<Option<TaskId>> {
        let title = draft.title.trim();
        if title.is_empty() {
            info!("event=task_create module=store status=rejected reason=empty_title");
            return Ok(None);
        }

        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            details: draft.details.clone(),
            priority: draft.priority,
            tags: normalize_tags(&draft.raw_tags),
            status: TaskStatus::Active,
            created_at: now_epoch_ms(),
            due_date: draft.due_date,
        };
        let id = task.id;

        // Newest-created first, so full ranking ties keep creation order.
        self.tasks.insert(0, task);
        self.persist()?;
        info!("event=task_create module=store status=ok id={id}");
        Ok(Some(id))
    }

    /// Flips a task between active and completed; unknown ids are a no-op.
    pub fn toggle_status(&mut self, id: TaskId) -> StoreResult<()> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(());
        };
        task.toggle_status();
        self.persist()
    }

    /// Permanently removes a task; unknown ids are a no-op, so a second call
    /// with the same id changes nothing.
    pub fn archive(&mut self, id: TaskId) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.tasks).map_err(StoreError::Serialize)?;
        self.backend.write(&payload)?;
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
