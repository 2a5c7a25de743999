use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where an application currently sits in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Interviewing,
    Offer,
    Rejected,
    Withdrawn,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
            ApplicationStatus::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown status '{s}' (expected: applied, interviewing, offer, rejected, withdrawn, accepted)"
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewType {
    #[serde(rename = "phone screen")]
    PhoneScreen,
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "onsite")]
    Onsite,
    #[serde(rename = "behavioral")]
    Behavioral,
    #[serde(rename = "other")]
    Other,
}

impl InterviewType {
    pub fn as_str(self) -> &'static str {
        match self {
            InterviewType::PhoneScreen => "phone screen",
            InterviewType::Technical => "technical",
            InterviewType::Onsite => "onsite",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Other => "other",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone screen" | "phone-screen" | "phone" => Ok(InterviewType::PhoneScreen),
            "technical" => Ok(InterviewType::Technical),
            "onsite" => Ok(InterviewType::Onsite),
            "behavioral" => Ok(InterviewType::Behavioral),
            "other" => Ok(InterviewType::Other),
            _ => Err(format!(
                "unknown interview type '{s}' (expected: phone screen, technical, onsite, behavioral, other)"
            )),
        }
    }
}

/// One tracked application. Timestamps are RFC 3339 strings so they sort
/// lexicographically in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company_name: String,
    pub role_name: String,
    pub score: u8, // 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
    pub status: ApplicationStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub application_id: String,
    pub description: String,
    pub done: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub application_id: String,
    pub date_time: String,
    pub interview_type: InterviewType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub application_id: String,
    pub content: String,
    pub created_at: String,
}

/// Caller-supplied fields for `create`; id and timestamps are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub company_name: String,
    pub role_name: String,
    pub score: u8,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub application_id: String,
    pub description: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct NewInterview {
    pub application_id: String,
    pub date_time: String,
    pub interview_type: InterviewType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub application_id: String,
    pub content: String,
}

/// Partial update for `update`. `None` means "leave unchanged"; a patch
/// cannot clear an optional field back to absent.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub company_name: Option<String>,
    pub role_name: Option<String>,
    pub score: Option<u8>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub done: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct InterviewPatch {
    pub date_time: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub content: Option<String>,
}

/// Fresh collision-free identifier for a new record.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time as an RFC 3339 string with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl JobApplication {
    pub fn new(fields: NewApplication) -> Self {
        let timestamp = now_timestamp();
        JobApplication {
            id: new_id(),
            company_name: fields.company_name,
            role_name: fields.role_name,
            score: fields.score,
            salary_min: fields.salary_min,
            salary_max: fields.salary_max,
            status: fields.status,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// Merges the patch over this record. `updated_at` is refreshed even
    /// when the patch names no fields; `created_at` is never touched.
    pub fn apply(&mut self, patch: ApplicationPatch) {
        if let Some(company_name) = patch.company_name {
            self.company_name = company_name;
        }
        if let Some(role_name) = patch.role_name {
            self.role_name = role_name;
        }
        if let Some(score) = patch.score {
            self.score = score;
        }
        if let Some(salary_min) = patch.salary_min {
            self.salary_min = Some(salary_min);
        }
        if let Some(salary_max) = patch.salary_max {
            self.salary_max = Some(salary_max);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now_timestamp();
    }
}

impl Task {
    pub fn new(fields: NewTask) -> Self {
        Task {
            id: new_id(),
            application_id: fields.application_id,
            description: fields.description,
            done: fields.done,
            created_at: now_timestamp(),
        }
    }

    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }
}

impl Interview {
    pub fn new(fields: NewInterview) -> Self {
        Interview {
            id: new_id(),
            application_id: fields.application_id,
            date_time: fields.date_time,
            interview_type: fields.interview_type,
            notes: fields.notes,
        }
    }

    pub fn apply(&mut self, patch: InterviewPatch) {
        if let Some(date_time) = patch.date_time {
            self.date_time = date_time;
        }
        if let Some(interview_type) = patch.interview_type {
            self.interview_type = interview_type;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

impl Note {
    pub fn new(fields: NewNote) -> Self {
        Note {
            id: new_id(),
            application_id: fields.application_id,
            content: fields.content,
            created_at: now_timestamp(),
        }
    }

    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}
