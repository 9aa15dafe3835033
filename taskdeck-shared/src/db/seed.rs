/// Sample data seeding
///
/// A fresh store gets a small set of example tasks so the UI has
/// something to show. The samples are attached to a designated demo
/// account — seeding never inserts ownerless rows, since those would be
/// invisible to every user-scoped query.
///
/// Seeding runs once: any existing task (including legacy rows) disables
/// it, so restarts and re-deploys do not duplicate the samples.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::models::task::{CreateTask, Task, TaskStatus};
use crate::models::user::{CreateUser, User};

/// Email of the demo account that owns the seeded tasks
pub const DEMO_EMAIL: &str = "demo@taskdeck.local";

const SAMPLE_TASKS: [(&str, &str, TaskStatus); 3] = [
    (
        "Design API endpoints",
        "Sketch the REST surface and response shapes",
        TaskStatus::Completed,
    ),
    (
        "Implement backend logic",
        "Wire the HTTP handlers to the task store",
        TaskStatus::InProgress,
    ),
    (
        "Build the web client",
        "Responsive UI for the task list and editor",
        TaskStatus::Pending,
    ),
];

/// Inserts the sample tasks if the tasks table is empty
///
/// The demo account is created on first use and reused if it already
/// exists (a previous seed may have been interrupted after the user
/// insert).
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if Task::count(pool).await? > 0 {
        debug!("Tasks present, skipping sample data");
        return Ok(());
    }

    let demo = match User::find_by_email(pool, DEMO_EMAIL).await? {
        Some(user) => user,
        None => {
            User::create(
                pool,
                CreateUser {
                    name: "Demo User".to_string(),
                    email: DEMO_EMAIL.to_string(),
                    phone: None,
                    password: "demo".to_string(),
                },
            )
            .await?
        }
    };

    for (title, description, status) in SAMPLE_TASKS {
        Task::create(
            pool,
            CreateTask {
                user_id: demo.id,
                title: title.to_string(),
                description: description.to_string(),
                status,
            },
        )
        .await?;
    }

    info!(
        owner = DEMO_EMAIL,
        count = SAMPLE_TASKS.len(),
        "Sample data inserted"
    );

    Ok(())
}
