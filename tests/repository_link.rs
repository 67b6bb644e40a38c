//! PostgreSQL repository tests. Run with a database available:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_link -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use shorty::domain::entities::NewLink;
use shorty::domain::repositories::LinkRepository;
use shorty::error::AppError;
use shorty::infrastructure::persistence::PgLinkRepository;

async fn insert_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        short_code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test12", "https://example.com"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_code, "test12");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.clicks, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_duplicate_code(pool: PgPool) {
    insert_link(&pool, "dup123", "https://one.example").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let err = repo
        .create(new_link("dup123", "https://two.example"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Internal { .. }));
    assert_eq!(err.to_string(), "Short code already exists");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_by_code(pool: PgPool) {
    insert_link(&pool, "abc123", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();

    assert_eq!(link.unwrap().original_url, "https://example.com");
    assert!(repo.find_by_code("notfound").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_by_original_url_returns_oldest(pool: PgPool) {
    insert_link(&pool, "first1", "https://same.example").await;
    insert_link(&pool, "second", "https://same.example").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .find_by_original_url("https://same.example")
        .await
        .unwrap();

    assert_eq!(link.unwrap().short_code, "first1");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_recent_newest_first(pool: PgPool) {
    sqlx::query(
        "INSERT INTO urls (short_code, original_url, created_at) VALUES \
         ('old001', 'https://old.example', NOW() - INTERVAL '1 hour'), \
         ('new001', 'https://new.example', NOW())",
    )
    .execute(&pool)
    .await
    .unwrap();
    let repo = PgLinkRepository::new(Arc::new(pool));

    let links = repo.list_recent(100).await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].short_code, "new001");

    let limited = repo.list_recent(1).await.unwrap();
    assert_eq!(limited.len(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_increment_clicks(pool: PgPool) {
    insert_link(&pool, "click1", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.increment_clicks("click1").await.unwrap());
    assert!(repo.increment_clicks("click1").await.unwrap());
    assert!(!repo.increment_clicks("missing").await.unwrap());

    let link = repo.find_by_code("click1").await.unwrap().unwrap();
    assert_eq!(link.clicks, 2);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
