//! Device-local store: one JSON array blob per entity kind.
//!
//! Each collection lives in its own file under the data directory and is
//! read and rewritten whole on every operation — a missing file is an
//! empty collection, and writes go through a temp-file rename so no
//! partial collection is ever observable. Queries are linear scans; there
//! is no indexing.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{
    ApplicationPatch, Interview, InterviewPatch, JobApplication, NewApplication, NewInterview,
    NewNote, NewTask, Note, NotePatch, Task, TaskPatch,
};
use crate::store::{EntityKind, Record, Store, StoreError, StoreResult};

const APPLICATIONS_FILE: &str = "applications.json";
const TASKS_FILE: &str = "tasks.json";
const INTERVIEWS_FILE: &str = "interviews.json";
const NOTES_FILE: &str = "notes.json";

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens the store at the platform data directory.
    pub fn open() -> StoreResult<Self> {
        Self::open_at(Self::default_dir())
    }

    /// Opens the store at an explicit directory, creating it if needed.
    /// Tests and alternate frontends inject their own location this way.
    pub fn open_at(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("local store at {}", dir.display());
        Ok(LocalStore { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn default_dir() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "tracker") {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".tracker")
        }
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Vec<T>> {
        let path = self.dir.join(file);
        match fs::read(&path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save<T: Serialize>(&self, file: &str, records: &[T]) -> StoreResult<()> {
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));
        fs::write(&tmp, serde_json::to_vec_pretty(records)?)?;
        fs::rename(&tmp, &path)?;
        debug!("wrote {} record(s) to {}", records.len(), file);
        Ok(())
    }

    fn append<T>(&self, file: &str, record: T) -> StoreResult<T>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let mut records: Vec<T> = self.load(file)?;
        records.push(record.clone());
        self.save(file, &records)?;
        Ok(record)
    }

    fn update_in<T>(
        &self,
        file: &str,
        kind: EntityKind,
        id: &str,
        apply: impl FnOnce(&mut T),
    ) -> StoreResult<T>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let mut records: Vec<T> = self.load(file)?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(StoreError::NotFound {
                kind,
                id: id.to_string(),
            });
        };
        apply(record);
        let updated = record.clone();
        self.save(file, &records)?;
        Ok(updated)
    }

    fn remove_from<T>(&self, file: &str, keep: impl Fn(&T) -> bool) -> StoreResult<()>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let mut records: Vec<T> = self.load(file)?;
        let before = records.len();
        records.retain(|r| keep(r));
        if records.len() != before {
            self.save(file, &records)?;
        }
        Ok(())
    }
}

#[async_trait]
impl Store for LocalStore {
    async fn list_applications(&self) -> StoreResult<Vec<JobApplication>> {
        self.load(APPLICATIONS_FILE)
    }

    async fn get_application(&self, id: &str) -> StoreResult<Option<JobApplication>> {
        let applications: Vec<JobApplication> = self.load(APPLICATIONS_FILE)?;
        Ok(applications.into_iter().find(|app| app.id == id))
    }

    async fn create_application(&self, fields: NewApplication) -> StoreResult<JobApplication> {
        self.append(APPLICATIONS_FILE, JobApplication::new(fields))
    }

    async fn update_application(
        &self,
        id: &str,
        patch: ApplicationPatch,
    ) -> StoreResult<JobApplication> {
        self.update_in(
            APPLICATIONS_FILE,
            EntityKind::Application,
            id,
            |app: &mut JobApplication| app.apply(patch),
        )
    }

    async fn delete_application(&self, id: &str) -> StoreResult<()> {
        self.remove_from(APPLICATIONS_FILE, |app: &JobApplication| app.id != id)?;
        // Cascade: dependents hold no back-references, so each collection
        // is swept by applicationId equality.
        self.remove_from(TASKS_FILE, |task: &Task| task.application_id != id)?;
        self.remove_from(INTERVIEWS_FILE, |interview: &Interview| {
            interview.application_id != id
        })?;
        self.remove_from(NOTES_FILE, |note: &Note| note.application_id != id)?;
        info!("deleted application {id} and its dependents");
        Ok(())
    }

    async fn list_tasks(&self, application_id: &str) -> StoreResult<Vec<Task>> {
        let tasks: Vec<Task> = self.load(TASKS_FILE)?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.application_id == application_id)
            .collect())
    }

    async fn create_task(&self, fields: NewTask) -> StoreResult<Task> {
        self.append(TASKS_FILE, Task::new(fields))
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> StoreResult<Task> {
        self.update_in(TASKS_FILE, EntityKind::Task, id, |task: &mut Task| {
            task.apply(patch)
        })
    }

    async fn delete_task(&self, id: &str) -> StoreResult<()> {
        self.remove_from(TASKS_FILE, |task: &Task| task.id != id)
    }

    async fn list_interviews(&self, application_id: &str) -> StoreResult<Vec<Interview>> {
        let interviews: Vec<Interview> = self.load(INTERVIEWS_FILE)?;
        Ok(interviews
            .into_iter()
            .filter(|interview| interview.application_id == application_id)
            .collect())
    }

    async fn create_interview(&self, fields: NewInterview) -> StoreResult<Interview> {
        self.append(INTERVIEWS_FILE, Interview::new(fields))
    }

    async fn update_interview(&self, id: &str, patch: InterviewPatch) -> StoreResult<Interview> {
        self.update_in(
            INTERVIEWS_FILE,
            EntityKind::Interview,
            id,
            |interview: &mut Interview| interview.apply(patch),
        )
    }

    async fn delete_interview(&self, id: &str) -> StoreResult<()> {
        self.remove_from(INTERVIEWS_FILE, |interview: &Interview| interview.id != id)
    }

    async fn list_notes(&self, application_id: &str) -> StoreResult<Vec<Note>> {
        let notes: Vec<Note> = self.load(NOTES_FILE)?;
        Ok(notes
            .into_iter()
            .filter(|note| note.application_id == application_id)
            .collect())
    }

    async fn create_note(&self, fields: NewNote) -> StoreResult<Note> {
        self.append(NOTES_FILE, Note::new(fields))
    }

    async fn update_note(&self, id: &str, patch: NotePatch) -> StoreResult<Note> {
        self.update_in(NOTES_FILE, EntityKind::Note, id, |note: &mut Note| {
            note.apply(patch)
        })
    }

    async fn delete_note(&self, id: &str) -> StoreResult<()> {
        self.remove_from(NOTES_FILE, |note: &Note| note.id != id)
    }
}
