use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use postboard_core::domain::NewPost;
use postboard_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: i32, name: &str, body: &str, age_secs: i64) -> post::Model {
    post::Model {
        id,
        name: Some(name.to_owned()),
        post: Some(body.to_owned()),
        created_at: (Utc::now() - Duration::seconds(age_secs)).naive_utc(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_create_returns_inserted_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(1, "Alice", "Hello", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.create(NewPost::new("Alice", "Hello")).await.unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.name, "Alice");
    assert_eq!(post.post, "Hello");
    assert!(post.updated_at.is_none());
}

#[tokio::test]
async fn test_list_maps_rows_and_null_columns() {
    let mut anonymous = model(1, "", "", 10);
    anonymous.name = None;
    anonymous.post = None;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(2, "Bob", "Second", 0), anonymous]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].name, "Bob");
    assert_eq!(posts[1].name, "");
    assert_eq!(posts[1].post, "");
    assert!(posts[0].created_at >= posts[1].created_at);
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    repo.list().await.unwrap();

    let log = repo.into_inner().into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.contains(r#"ORDER BY "posts"."created_at" DESC, "posts"."id" DESC"#));
}

#[tokio::test]
async fn test_update_reports_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.update(1, "new text").await.unwrap());
    assert!(!repo.update(9999, "new text").await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_is_not_an_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(!repo.delete(9999).await.unwrap());
}
