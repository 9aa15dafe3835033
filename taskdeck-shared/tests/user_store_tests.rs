/// Integration tests for the user store operations

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use taskdeck_shared::db::migrations::run_migrations;
use taskdeck_shared::models::user::{CreateUser, User};

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool).await.expect("Migrations failed");
    pool
}

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_user() {
    let pool = setup_pool().await;

    let created = User::create(&pool, new_user("a@x.com")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.email, "a@x.com");
    assert_eq!(created.phone.as_deref(), Some("555-0100"));

    let by_email = User::find_by_email(&pool, "a@x.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);

    let by_id = User::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "a@x.com");

    assert!(User::find_by_email(&pool, "missing@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_by_store() {
    let pool = setup_pool().await;

    User::create(&pool, new_user("dup@x.com")).await.unwrap();

    // Even without the handler's defensive pre-check, the unique index
    // must reject a second row for the same email.
    let err = User::create(&pool, new_user("dup@x.com"))
        .await
        .expect_err("duplicate insert should fail");
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }

    assert_eq!(User::count_by_email(&pool, "dup@x.com").await.unwrap(), 1);
}

#[tokio::test]
async fn test_email_comparison_is_exact_match() {
    let pool = setup_pool().await;

    User::create(&pool, new_user("Case@X.com")).await.unwrap();

    // Lookup does not fold case; a differently-cased email is a miss.
    assert!(User::find_by_email(&pool, "case@x.com")
        .await
        .unwrap()
        .is_none());
    assert!(User::find_by_email(&pool, "Case@X.com")
        .await
        .unwrap()
        .is_some());
}
