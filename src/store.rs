//! The storage contract the UI shell consumes.
//!
//! Every operation is async so an implementation backed by genuinely
//! asynchronous I/O can be substituted without changing callers; the
//! bundled implementations complete promptly. Callers are expected to
//! serialize mutations per entity kind (single-writer assumption) —
//! `update` and cascade `delete` are read-modify-write cycles that are
//! not atomic across concurrent callers.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    ApplicationPatch, Interview, InterviewPatch, JobApplication, NewApplication, NewInterview,
    NewNote, NewTask, Note, NotePatch, Task, TaskPatch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Application,
    Task,
    Interview,
    Note,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Application => "application",
            EntityKind::Task => "task",
            EntityKind::Interview => "interview",
            EntityKind::Note => "note",
        })
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The id named by an update has no stored record of that kind.
    /// Recoverable; a failed update leaves no persisted change.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("storage I/O failure")]
    Io(#[from] std::io::Error),

    /// A persisted collection no longer parses. Not recovered from;
    /// surfaced at the first read that hits it.
    #[error("corrupted collection data")]
    Corrupt(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Identity accessors shared by all four entity kinds, so store
/// implementations can run their by-id scans generically.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

impl Record for JobApplication {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Interview {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Durable CRUD over the four collections, with cascade delete from
/// applications to their dependents.
///
/// `list` and `get` never fail in the domain sense: an absent id is
/// `Ok(None)` and an empty collection is an empty vec. `delete` is
/// idempotent. Only `update` on a missing id yields [`StoreError::NotFound`].
#[async_trait]
pub trait Store: Send + Sync {
    // Applications
    async fn list_applications(&self) -> StoreResult<Vec<JobApplication>>;
    async fn get_application(&self, id: &str) -> StoreResult<Option<JobApplication>>;
    async fn create_application(&self, fields: NewApplication) -> StoreResult<JobApplication>;
    async fn update_application(
        &self,
        id: &str,
        patch: ApplicationPatch,
    ) -> StoreResult<JobApplication>;
    /// Also removes every task, interview, and note referencing `id`.
    async fn delete_application(&self, id: &str) -> StoreResult<()>;

    // Tasks
    async fn list_tasks(&self, application_id: &str) -> StoreResult<Vec<Task>>;
    async fn create_task(&self, fields: NewTask) -> StoreResult<Task>;
    async fn update_task(&self, id: &str, patch: TaskPatch) -> StoreResult<Task>;
    async fn delete_task(&self, id: &str) -> StoreResult<()>;

    // Interviews
    async fn list_interviews(&self, application_id: &str) -> StoreResult<Vec<Interview>>;
    async fn create_interview(&self, fields: NewInterview) -> StoreResult<Interview>;
    async fn update_interview(&self, id: &str, patch: InterviewPatch) -> StoreResult<Interview>;
    async fn delete_interview(&self, id: &str) -> StoreResult<()>;

    // Notes
    async fn list_notes(&self, application_id: &str) -> StoreResult<Vec<Note>>;
    async fn create_note(&self, fields: NewNote) -> StoreResult<Note>;
    async fn update_note(&self, id: &str, patch: NotePatch) -> StoreResult<Note>;
    async fn delete_note(&self, id: &str) -> StoreResult<()>;
}
