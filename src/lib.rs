//! Candidate/application tracking core: the storage contract, its local
//! and in-memory implementations, and the pure view projections the UI
//! layer renders from.

pub mod local;
pub mod memory;
pub mod models;
pub mod store;
pub mod view;

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use models::{
    ApplicationPatch, ApplicationStatus, Interview, InterviewPatch, InterviewType, JobApplication,
    NewApplication, NewInterview, NewNote, NewTask, Note, NotePatch, Task, TaskPatch,
};
pub use store::{EntityKind, Store, StoreError, StoreResult};
pub use view::{
    SortDirection, SortField, SortSpec, SortState, filter_by_status, format_salary,
    sort_applications,
};
