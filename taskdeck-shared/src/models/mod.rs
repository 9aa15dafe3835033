/// Database models for TaskDeck
///
/// This module contains the database models and their CRUD operations.
///
/// # Models
///
/// - `user`: user accounts (signup/login identity)
/// - `task`: user-owned tasks with a three-state status
///
/// # Example
///
/// ```no_run
/// use taskdeck_shared::models::user::{CreateUser, User};
/// use taskdeck_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "Ada".to_string(),
///         email: "ada@example.com".to_string(),
///         phone: None,
///         password: "secret".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
