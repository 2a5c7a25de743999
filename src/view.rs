//! Derived-view computation: status filtering, multi-field sorting, and the
//! header-toggle reducer. Everything here is pure and synchronous; callers
//! fetch applications from a [`crate::store::Store`] first.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{ApplicationStatus, JobApplication};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CompanyName,
    RoleName,
    Status,
    Score,
    SalaryMin,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::CompanyName => "company",
            SortField::RoleName => "role",
            SortField::Status => "status",
            SortField::Score => "score",
            SortField::SalaryMin => "salary",
            SortField::UpdatedAt => "updated",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(SortField::CompanyName),
            "role" => Ok(SortField::RoleName),
            "status" => Ok(SortField::Status),
            "score" => Ok(SortField::Score),
            "salary" => Ok(SortField::SalaryMin),
            "updated" => Ok(SortField::UpdatedAt),
            _ => Err(format!(
                "unknown sort field '{s}' (expected: company, role, status, score, salary, updated)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Subsequence of applications matching `status`, order preserved.
/// `None` means no filtering.
pub fn filter_by_status(
    applications: &[JobApplication],
    status: Option<ApplicationStatus>,
) -> Vec<JobApplication> {
    match status {
        Some(status) => applications
            .iter()
            .filter(|app| app.status == status)
            .cloned()
            .collect(),
        None => applications.to_vec(),
    }
}

/// Stable sort by the given spec; `None` is a pass-through that keeps the
/// input order.
pub fn sort_applications(
    applications: &[JobApplication],
    spec: Option<SortSpec>,
) -> Vec<JobApplication> {
    let mut sorted = applications.to_vec();
    let Some(spec) = spec else {
        return sorted;
    };
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, spec.field);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by(a: &JobApplication, b: &JobApplication, field: SortField) -> Ordering {
    match field {
        SortField::CompanyName => a.company_name.cmp(&b.company_name),
        SortField::RoleName => a.role_name.cmp(&b.role_name),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Score => a.score.cmp(&b.score),
        // Unspecified salaries sort as lowest.
        SortField::SalaryMin => a.salary_min.unwrap_or(0).cmp(&b.salary_min.unwrap_or(0)),
        // RFC 3339 strings sort lexicographically = chronologically.
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Sort state driven by repeated header selection.
///
/// Unsorted -> ascending(F) -> descending(F) -> Unsorted on the same field;
/// selecting a different field from any sorted state restarts at ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted(SortSpec),
}

impl SortState {
    pub fn toggle(self, field: SortField) -> SortState {
        match self {
            SortState::Sorted(spec) if spec.field == field => match spec.direction {
                SortDirection::Ascending => SortState::Sorted(SortSpec {
                    field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => SortState::Unsorted,
            },
            _ => SortState::Sorted(SortSpec {
                field,
                direction: SortDirection::Ascending,
            }),
        }
    }

    pub fn spec(self) -> Option<SortSpec> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted(spec) => Some(spec),
        }
    }
}

/// Salary band for table display, rounded to the nearest thousand.
pub fn format_salary(min: Option<i64>, max: Option<i64>) -> String {
    let band = |value: i64| (value + 500) / 1000;
    match (min, max) {
        (Some(min), Some(max)) => format!("${}k - ${}k", band(min), band(max)),
        (Some(min), None) => format!("${}k+", band(min)),
        (None, Some(max)) => format!("Up to ${}k", band(max)),
        (None, None) => "-".to_string(),
    }
}
