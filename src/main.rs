use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use tracker::models::{
    ApplicationPatch, ApplicationStatus, InterviewType, NewApplication, NewInterview, NewNote,
    NewTask, TaskPatch,
};
use tracker::view::{
    SortDirection, SortField, SortSpec, filter_by_status, format_salary, sort_applications,
};
use tracker::{LocalStore, Store};

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Candidate tracker - record and review job applications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a job application
    Add {
        /// Company name
        company: String,

        /// Role name
        role: String,

        /// Personal score, 0-5
        #[arg(long, default_value = "0")]
        score: u8,

        /// Lower salary bound
        #[arg(long)]
        salary_min: Option<i64>,

        /// Upper salary bound
        #[arg(long)]
        salary_max: Option<i64>,

        /// Status (applied, interviewing, offer, rejected, withdrawn, accepted)
        #[arg(short, long, default_value = "applied")]
        status: String,
    },

    /// List applications
    List {
        /// Filter by status
        #[arg(short, long)]
        status: Option<String>,

        /// Sort by field (company, role, status, score, salary, updated)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Show an application with its tasks, interviews, and notes
    Show {
        /// Application ID
        id: String,
    },

    /// Update fields on an application
    Update {
        /// Application ID
        id: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        score: Option<u8>,

        #[arg(long)]
        salary_min: Option<i64>,

        #[arg(long)]
        salary_max: Option<i64>,

        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete an application and everything attached to it
    Delete {
        /// Application ID
        id: String,
    },

    /// Manage tasks on an application
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Manage interviews on an application
    Interview {
        #[command(subcommand)]
        command: InterviewCommands,
    },

    /// Manage notes on an application
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Add a task
    Add {
        /// Application ID
        application_id: String,

        /// What needs doing
        description: String,
    },

    /// List tasks for an application
    List {
        /// Application ID
        application_id: String,
    },

    /// Mark a task done
    Done {
        /// Task ID
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

#[derive(Subcommand)]
enum InterviewCommands {
    /// Add an interview
    Add {
        /// Application ID
        application_id: String,

        /// Date and time (ISO-8601, e.g. 2026-09-01T14:00:00Z)
        date_time: String,

        /// Kind (phone screen, technical, onsite, behavioral, other)
        #[arg(short, long, default_value = "other")]
        kind: String,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List interviews for an application
    List {
        /// Application ID
        application_id: String,
    },

    /// Delete an interview
    Delete {
        /// Interview ID
        id: String,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Add a note
    Add {
        /// Application ID
        application_id: String,

        /// Note content
        content: String,
    },

    /// List notes for an application
    List {
        /// Application ID
        application_id: String,
    },

    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
}

fn parse_status(s: &str) -> Result<ApplicationStatus> {
    s.parse().map_err(|e: String| anyhow!(e))
}

fn parse_sort_field(s: &str) -> Result<SortField> {
    s.parse().map_err(|e: String| anyhow!(e))
}

fn parse_interview_type(s: &str) -> Result<InterviewType> {
    s.parse().map_err(|e: String| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = LocalStore::open()?;

    match cli.command {
        Commands::Add {
            company,
            role,
            score,
            salary_min,
            salary_max,
            status,
        } => {
            let application = store
                .create_application(NewApplication {
                    company_name: company,
                    role_name: role,
                    score,
                    salary_min,
                    salary_max,
                    status: parse_status(&status)?,
                })
                .await?;
            println!(
                "Added application {} ({} - {})",
                application.id, application.company_name, application.role_name
            );
        }

        Commands::List { status, sort, desc } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let spec = sort
                .as_deref()
                .map(parse_sort_field)
                .transpose()?
                .map(|field| SortSpec {
                    field,
                    direction: if desc {
                        SortDirection::Descending
                    } else {
                        SortDirection::Ascending
                    },
                });

            let applications = store.list_applications().await?;
            let applications = sort_applications(&filter_by_status(&applications, status), spec);

            if applications.is_empty() {
                println!("No applications found.");
            } else {
                println!(
                    "{:<38} {:<20} {:<24} {:<13} {:<6} {:<16} {:<12}",
                    "ID", "COMPANY", "ROLE", "STATUS", "SCORE", "SALARY", "UPDATED"
                );
                println!("{}", "-".repeat(131));
                for app in applications {
                    println!(
                        "{:<38} {:<20} {:<24} {:<13} {:<6} {:<16} {:<12}",
                        app.id,
                        truncate(&app.company_name, 18),
                        truncate(&app.role_name, 22),
                        app.status,
                        app.score,
                        format_salary(app.salary_min, app.salary_max),
                        date_of(&app.updated_at),
                    );
                }
            }
        }

        Commands::Show { id } => match store.get_application(&id).await? {
            Some(app) => {
                println!("Application {}", app.id);
                println!("Company: {}", app.company_name);
                println!("Role: {}", app.role_name);
                println!("Status: {}", app.status);
                println!("Score: {}/5", app.score);
                if app.salary_min.is_some() || app.salary_max.is_some() {
                    println!("Salary: {}", format_salary(app.salary_min, app.salary_max));
                }
                println!("Created: {}", app.created_at);
                println!("Updated: {}", app.updated_at);

                let tasks = store.list_tasks(&app.id).await?;
                if !tasks.is_empty() {
                    println!("\nTasks ({}):", tasks.len());
                    for task in tasks {
                        let mark = if task.done { "x" } else { " " };
                        println!("  [{}] {} - {}", mark, task.id, task.description);
                    }
                }

                let interviews = store.list_interviews(&app.id).await?;
                if !interviews.is_empty() {
                    println!("\nInterviews ({}):", interviews.len());
                    for interview in interviews {
                        print!(
                            "  {} - {} ({})",
                            interview.id, interview.date_time, interview.interview_type
                        );
                        match interview.notes {
                            Some(notes) => println!(" - {notes}"),
                            None => println!(),
                        }
                    }
                }

                let notes = store.list_notes(&app.id).await?;
                if !notes.is_empty() {
                    println!("\nNotes ({}):", notes.len());
                    for note in notes {
                        println!("  {} - {}", note.id, note.content);
                    }
                }
            }
            None => {
                println!("Application {id} not found.");
            }
        },

        Commands::Update {
            id,
            company,
            role,
            score,
            salary_min,
            salary_max,
            status,
        } => {
            let patch = ApplicationPatch {
                company_name: company,
                role_name: role,
                score,
                salary_min,
                salary_max,
                status: status.as_deref().map(parse_status).transpose()?,
            };
            let application = store.update_application(&id, patch).await?;
            println!(
                "Updated application {} ({} - {}, {})",
                application.id, application.company_name, application.role_name, application.status
            );
        }

        Commands::Delete { id } => {
            store.delete_application(&id).await?;
            println!("Deleted application {id}.");
        }

        Commands::Task { command } => match command {
            TaskCommands::Add {
                application_id,
                description,
            } => {
                let task = store
                    .create_task(NewTask {
                        application_id,
                        description,
                        done: false,
                    })
                    .await?;
                println!("Added task {}", task.id);
            }

            TaskCommands::List { application_id } => {
                let tasks = store.list_tasks(&application_id).await?;
                if tasks.is_empty() {
                    println!("No tasks found.");
                } else {
                    for task in tasks {
                        let mark = if task.done { "x" } else { " " };
                        println!("[{}] {} - {}", mark, task.id, task.description);
                    }
                }
            }

            TaskCommands::Done { id } => {
                let task = store
                    .update_task(
                        &id,
                        TaskPatch {
                            done: Some(true),
                            ..Default::default()
                        },
                    )
                    .await?;
                println!("Marked task done: {}", task.description);
            }

            TaskCommands::Delete { id } => {
                store.delete_task(&id).await?;
                println!("Deleted task {id}.");
            }
        },

        Commands::Interview { command } => match command {
            InterviewCommands::Add {
                application_id,
                date_time,
                kind,
                notes,
            } => {
                let interview = store
                    .create_interview(NewInterview {
                        application_id,
                        date_time,
                        interview_type: parse_interview_type(&kind)?,
                        notes,
                    })
                    .await?;
                println!("Added interview {}", interview.id);
            }

            InterviewCommands::List { application_id } => {
                let interviews = store.list_interviews(&application_id).await?;
                if interviews.is_empty() {
                    println!("No interviews found.");
                } else {
                    for interview in interviews {
                        println!(
                            "{} - {} ({})",
                            interview.id, interview.date_time, interview.interview_type
                        );
                    }
                }
            }

            InterviewCommands::Delete { id } => {
                store.delete_interview(&id).await?;
                println!("Deleted interview {id}.");
            }
        },

        Commands::Note { command } => match command {
            NoteCommands::Add {
                application_id,
                content,
            } => {
                let note = store
                    .create_note(NewNote {
                        application_id,
                        content,
                    })
                    .await?;
                println!("Added note {}", note.id);
            }

            NoteCommands::List { application_id } => {
                let notes = store.list_notes(&application_id).await?;
                if notes.is_empty() {
                    println!("No notes found.");
                } else {
                    for note in notes {
                        println!("{} - {} ({})", note.id, note.content, note.created_at);
                    }
                }
            }

            NoteCommands::Delete { id } => {
                store.delete_note(&id).await?;
                println!("Deleted note {id}.");
            }
        },
    }

    Ok(())
}

/// Date part of an RFC 3339 timestamp, for table display.
fn date_of(ts: &str) -> &str {
    ts.get(..10).unwrap_or(ts)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::{date_of, truncate};

    #[test]
    fn truncate_shortens_long_values() {
        assert_eq!(truncate("Acme Corp", 18), "Acme Corp");
        assert_eq!(truncate("A Very Long Company Name Inc", 18), "A Very Long Com...");
    }

    #[test]
    fn truncate_respects_multibyte_characters() {
        let name = "é".repeat(19);
        assert_eq!(truncate(&name, 18), format!("{}...", "é".repeat(15)));
        assert_eq!(truncate("Crème Brûlée Café", 18), "Crème Brûlée Café");
    }

    #[test]
    fn date_of_takes_the_date_part() {
        assert_eq!(date_of("2026-08-24T12:00:00.000Z"), "2026-08-24");
        assert_eq!(date_of("short"), "short");
    }
}
