use tracker::models::{ApplicationStatus, JobApplication, new_id};
use tracker::view::{
    SortDirection, SortField, SortSpec, SortState, filter_by_status, sort_applications,
};

fn app(company: &str, score: u8) -> JobApplication {
    JobApplication {
        id: new_id(),
        company_name: company.to_string(),
        role_name: "Software Engineer".to_string(),
        score,
        salary_min: None,
        salary_max: None,
        status: ApplicationStatus::Applied,
        created_at: "2026-01-01T00:00:00.000Z".to_string(),
        updated_at: "2026-01-01T00:00:00.000Z".to_string(),
    }
}

fn companies(applications: &[JobApplication]) -> Vec<&str> {
    applications.iter().map(|a| a.company_name.as_str()).collect()
}

fn asc(field: SortField) -> Option<SortSpec> {
    Some(SortSpec {
        field,
        direction: SortDirection::Ascending,
    })
}

fn desc(field: SortField) -> Option<SortSpec> {
    Some(SortSpec {
        field,
        direction: SortDirection::Descending,
    })
}

#[test]
fn filter_returns_matching_subsequence_in_order() {
    let mut apps = vec![app("Acme Corp", 5), app("Beta LLC", 3), app("Zebra Inc", 2)];
    apps[0].status = ApplicationStatus::Interviewing;
    apps[2].status = ApplicationStatus::Interviewing;

    let filtered = filter_by_status(&apps, Some(ApplicationStatus::Interviewing));
    assert_eq!(companies(&filtered), ["Acme Corp", "Zebra Inc"]);

    assert!(filter_by_status(&apps, Some(ApplicationStatus::Offer)).is_empty());
}

#[test]
fn filter_none_returns_input_unchanged() {
    let apps = vec![app("Zebra Inc", 2), app("Acme Corp", 5)];
    assert_eq!(filter_by_status(&apps, None), apps);
}

#[test]
fn sort_by_company_name_ascending() {
    let apps = vec![app("Zebra Inc", 2), app("Acme Corp", 5), app("Beta LLC", 3)];
    let sorted = sort_applications(&apps, asc(SortField::CompanyName));
    assert_eq!(companies(&sorted), ["Acme Corp", "Beta LLC", "Zebra Inc"]);
}

#[test]
fn sort_by_score_ascending() {
    let apps = vec![app("Zebra Inc", 2), app("Acme Corp", 5), app("Beta LLC", 3)];
    let sorted = sort_applications(&apps, asc(SortField::Score));
    assert_eq!(companies(&sorted), ["Zebra Inc", "Beta LLC", "Acme Corp"]);
}

#[test]
fn descending_is_exact_reverse_of_ascending() {
    let apps = vec![app("Zebra Inc", 2), app("Acme Corp", 5), app("Beta LLC", 3)];

    let mut expected = sort_applications(&apps, asc(SortField::CompanyName));
    expected.reverse();
    assert_eq!(sort_applications(&apps, desc(SortField::CompanyName)), expected);

    let mut expected = sort_applications(&apps, asc(SortField::Score));
    expected.reverse();
    assert_eq!(sort_applications(&apps, desc(SortField::Score)), expected);
}

#[test]
fn sort_none_is_a_stable_pass_through() {
    let apps = vec![app("Zebra Inc", 2), app("Acme Corp", 5)];
    assert_eq!(sort_applications(&apps, None), apps);
}

#[test]
fn missing_salary_sorts_lowest_ascending() {
    let mut apps = vec![app("No Salary Co", 3), app("Acme Corp", 5), app("Beta LLC", 3)];
    apps[1].salary_min = Some(150_000);
    apps[1].salary_max = Some(180_000);
    apps[2].salary_min = Some(90_000);

    let sorted = sort_applications(&apps, asc(SortField::SalaryMin));
    assert_eq!(companies(&sorted), ["No Salary Co", "Beta LLC", "Acme Corp"]);
}

#[test]
fn sort_by_updated_at_is_chronological() {
    let mut apps = vec![app("Acme Corp", 5), app("Beta LLC", 3), app("Zebra Inc", 2)];
    apps[0].updated_at = "2026-03-10T09:00:00.000Z".to_string();
    apps[1].updated_at = "2026-01-02T18:30:00.000Z".to_string();
    apps[2].updated_at = "2026-02-20T12:00:00.000Z".to_string();

    let sorted = sort_applications(&apps, asc(SortField::UpdatedAt));
    assert_eq!(companies(&sorted), ["Beta LLC", "Zebra Inc", "Acme Corp"]);
}

#[test]
fn sort_by_status_compares_status_strings() {
    let mut apps = vec![app("Acme Corp", 5), app("Beta LLC", 3), app("Zebra Inc", 2)];
    apps[0].status = ApplicationStatus::Rejected;
    apps[1].status = ApplicationStatus::Accepted;
    apps[2].status = ApplicationStatus::Interviewing;

    let sorted = sort_applications(&apps, asc(SortField::Status));
    // "accepted" < "interviewing" < "rejected"
    assert_eq!(companies(&sorted), ["Beta LLC", "Zebra Inc", "Acme Corp"]);
}

#[test]
fn equal_keys_keep_relative_input_order() {
    let apps = vec![app("Zebra Inc", 3), app("Acme Corp", 3), app("Beta LLC", 3)];
    let sorted = sort_applications(&apps, asc(SortField::Score));
    assert_eq!(companies(&sorted), ["Zebra Inc", "Acme Corp", "Beta LLC"]);
}

#[test]
fn toggling_through_a_full_cycle_restores_input_order() {
    let apps = vec![app("Zebra Inc", 2), app("Acme Corp", 5), app("Beta LLC", 3)];

    let mut state = SortState::Unsorted;
    state = state.toggle(SortField::CompanyName);
    let first = sort_applications(&apps, state.spec());
    assert_eq!(companies(&first), ["Acme Corp", "Beta LLC", "Zebra Inc"]);

    state = state.toggle(SortField::CompanyName);
    let second = sort_applications(&apps, state.spec());
    assert_eq!(companies(&second), ["Zebra Inc", "Beta LLC", "Acme Corp"]);

    state = state.toggle(SortField::CompanyName);
    assert_eq!(state, SortState::Unsorted);
    assert_eq!(sort_applications(&apps, state.spec()), apps);
}
