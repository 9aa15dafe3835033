//! # TaskDeck Shared Library
//!
//! This crate contains the data layer shared by the TaskDeck binaries:
//! the SQLite connection pool, the versioned schema migrations, sample-data
//! seeding, and the database models with their CRUD operations.
//!
//! ## Module Organization
//!
//! - `db`: connection pool, migrations, and seeding
//! - `models`: database models (`User`, `Task`) and their operations

pub mod db;
pub mod models;

/// Current version of the TaskDeck shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
