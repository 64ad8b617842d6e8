#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_server::AppState;

use folio_config::ApiConfig;

use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/folio-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        api: ApiConfig::default(),
    }
}

/// Insert a record directly, bypassing the API
pub async fn seed_record(pool: &SqlitePool, id: &str, title: &str) {
    let doc = json!({
        "id": 1,
        "title": title,
        "img": "https://example.com/img.png",
        "data_img": "https://example.com/data-img.png",
        "desc": "Seeded record",
        "link": "https://example.com",
        "git": "https://github.com/example/seeded",
    })
    .to_string();

    sqlx::query("INSERT INTO portfolio_projects (id, doc) VALUES (?, ?)")
        .bind(id)
        .bind(doc)
        .execute(pool)
        .await
        .expect("Failed to seed record");
}
