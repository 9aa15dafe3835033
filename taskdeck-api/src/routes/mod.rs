/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: liveness check
/// - `auth`: signup and login
/// - `tasks`: task CRUD with per-user ownership scoping

pub mod auth;
pub mod health;
pub mod tasks;
