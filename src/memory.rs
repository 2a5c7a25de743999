//! In-memory store with the same contract as [`LocalStore`].
//!
//! Exists so tests and embedders can inject a store with no filesystem
//! footprint; semantics (insertion order, cascade, NotFound) are identical.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{
    ApplicationPatch, Interview, InterviewPatch, JobApplication, NewApplication, NewInterview,
    NewNote, NewTask, Note, NotePatch, Task, TaskPatch,
};
use crate::store::{EntityKind, Record, Store, StoreError, StoreResult};

#[derive(Default)]
struct Collections {
    applications: Vec<JobApplication>,
    tasks: Vec<Task>,
    interviews: Vec<Interview>,
    notes: Vec<Note>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn update_in<T: Record>(
    records: &mut [T],
    kind: EntityKind,
    id: &str,
    apply: impl FnOnce(&mut T),
) -> StoreResult<T> {
    let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
        return Err(StoreError::NotFound {
            kind,
            id: id.to_string(),
        });
    };
    apply(record);
    Ok(record.clone())
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_applications(&self) -> StoreResult<Vec<JobApplication>> {
        Ok(self.inner.lock().await.applications.clone())
    }

    async fn get_application(&self, id: &str) -> StoreResult<Option<JobApplication>> {
        let inner = self.inner.lock().await;
        Ok(inner.applications.iter().find(|app| app.id == id).cloned())
    }

    async fn create_application(&self, fields: NewApplication) -> StoreResult<JobApplication> {
        let application = JobApplication::new(fields);
        let mut inner = self.inner.lock().await;
        inner.applications.push(application.clone());
        Ok(application)
    }

    async fn update_application(
        &self,
        id: &str,
        patch: ApplicationPatch,
    ) -> StoreResult<JobApplication> {
        let mut inner = self.inner.lock().await;
        update_in(&mut inner.applications, EntityKind::Application, id, |app| {
            app.apply(patch)
        })
    }

    async fn delete_application(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;
        inner.applications.retain(|app| app.id != id);
        inner.tasks.retain(|task| task.application_id != id);
        inner
            .interviews
            .retain(|interview| interview.application_id != id);
        inner.notes.retain(|note| note.application_id != id);
        Ok(())
    }

    async fn list_tasks(&self, application_id: &str) -> StoreResult<Vec<Task>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .tasks
            .iter()
            .filter(|task| task.application_id == application_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, fields: NewTask) -> StoreResult<Task> {
        let task = Task::new(fields);
        let mut inner = self.inner.lock().await;
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> StoreResult<Task> {
        let mut inner = self.inner.lock().await;
        update_in(&mut inner.tasks, EntityKind::Task, id, |task| {
            task.apply(patch)
        })
    }

    async fn delete_task(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;
        inner.tasks.retain(|task| task.id != id);
        Ok(())
    }

    async fn list_interviews(&self, application_id: &str) -> StoreResult<Vec<Interview>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .interviews
            .iter()
            .filter(|interview| interview.application_id == application_id)
            .cloned()
            .collect())
    }

    async fn create_interview(&self, fields: NewInterview) -> StoreResult<Interview> {
        let interview = Interview::new(fields);
        let mut inner = self.inner.lock().await;
        inner.interviews.push(interview.clone());
        Ok(interview)
    }

    async fn update_interview(&self, id: &str, patch: InterviewPatch) -> StoreResult<Interview> {
        let mut inner = self.inner.lock().await;
        update_in(&mut inner.interviews, EntityKind::Interview, id, |interview| {
            interview.apply(patch)
        })
    }

    async fn delete_interview(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;
        inner.interviews.retain(|interview| interview.id != id);
        Ok(())
    }

    async fn list_notes(&self, application_id: &str) -> StoreResult<Vec<Note>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .notes
            .iter()
            .filter(|note| note.application_id == application_id)
            .cloned()
            .collect())
    }

    async fn create_note(&self, fields: NewNote) -> StoreResult<Note> {
        let note = Note::new(fields);
        let mut inner = self.inner.lock().await;
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &str, patch: NotePatch) -> StoreResult<Note> {
        let mut inner = self.inner.lock().await;
        update_in(&mut inner.notes, EntityKind::Note, id, |note| {
            note.apply(patch)
        })
    }

    async fn delete_note(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;
        inner.notes.retain(|note| note.id != id);
        Ok(())
    }
}
