/// Integration tests for sample-data seeding

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use taskdeck_shared::db::migrations::run_migrations;
use taskdeck_shared::db::seed::{seed_sample_data, DEMO_EMAIL};
use taskdeck_shared::models::task::Task;
use taskdeck_shared::models::user::User;

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool).await.expect("Migrations failed");
    pool
}

#[tokio::test]
async fn test_seed_creates_demo_user_and_owned_tasks() {
    let pool = setup_pool().await;

    seed_sample_data(&pool).await.expect("Seeding failed");

    let demo = User::find_by_email(&pool, DEMO_EMAIL)
        .await
        .unwrap()
        .expect("demo user should exist after seeding");

    // Every sample row is owned; none are orphaned
    let samples = Task::list_for_user(&pool, demo.id).await.unwrap();
    assert_eq!(samples.len(), 3);
    assert_eq!(Task::count(&pool).await.unwrap(), 3);
    assert!(samples.iter().all(|t| t.user_id == Some(demo.id)));

    let statuses: Vec<&str> = samples.iter().map(|t| t.status.as_str()).collect();
    for status in ["pending", "in-progress", "completed"] {
        assert!(statuses.contains(&status));
    }
}

#[tokio::test]
async fn test_seed_runs_only_once() {
    let pool = setup_pool().await;

    seed_sample_data(&pool).await.expect("First seed failed");
    seed_sample_data(&pool).await.expect("Second seed failed");

    assert_eq!(Task::count(&pool).await.unwrap(), 3);
    assert_eq!(User::count_by_email(&pool, DEMO_EMAIL).await.unwrap(), 1);
}

#[tokio::test]
async fn test_seed_skips_populated_store() {
    let pool = setup_pool().await;

    // Any pre-existing row, even a legacy ownerless one, disables seeding
    sqlx::query("INSERT INTO tasks (title, description, status) VALUES (?, ?, ?)")
        .bind("Existing task")
        .bind("")
        .bind("pending")
        .execute(&pool)
        .await
        .unwrap();

    seed_sample_data(&pool).await.expect("Seeding failed");

    assert_eq!(Task::count(&pool).await.unwrap(), 1);
    assert!(User::find_by_email(&pool, DEMO_EMAIL).await.unwrap().is_none());
}
