/// User model and database operations
///
/// This module provides the User model and the store operations behind the
/// signup and login endpoints.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL,
///     email TEXT NOT NULL UNIQUE,
///     phone TEXT,
///     password TEXT NOT NULL,
///     created_at DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
/// );
/// ```
///
/// The `password` column holds the credential verbatim — there is no
/// hashing in this store. The field is excluded from serialization so it
/// can never appear in a response body, and the server logs a prominent
/// warning at startup.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: i64,

    /// Display name
    pub name: String,

    /// Login identity; unique with exact-match comparison
    pub email: String,

    /// Optional contact number
    pub phone: Option<String>,

    /// Plain-text credential. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,

    /// When the account was created
    pub created_at: NaiveDateTime,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl User {
    /// Creates a new user and returns the persisted row
    ///
    /// # Errors
    ///
    /// A duplicate email violates the unique index and surfaces as a
    /// database error; callers that pre-check the email must still handle
    /// this, since a concurrent signup can win the race between the check
    /// and the insert.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone, password)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, phone, password, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.phone)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Counts accounts registered under an email address
    ///
    /// Always 0 or 1 while the unique index holds; exists so tests can
    /// assert a rejected duplicate signup really left no extra row behind.
    pub async fn count_by_email(pool: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_serialized() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            password: "hunter2".to_string(),
            created_at: NaiveDateTime::default(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hunter2"));
        assert!(json.contains("ada@example.com"));
    }

    // Store operations are covered in tests/user_store_tests.rs
}
