//! Repository integration tests.
//!
//! `#[sqlx::test]` provisions an isolated database per test from DATABASE_URL
//! and applies ./migrations before the test body runs.

use sqlx::PgPool;
use uuid::Uuid;

use tasks_api::repos::task_repo;

#[sqlx::test]
async fn create_sets_defaults(pool: PgPool) {
    let row = task_repo::create(&pool, "u1", "Buy milk", None)
        .await
        .unwrap();

    assert_eq!(row.user_id, "u1");
    assert_eq!(row.title, "Buy milk");
    assert_eq!(row.description, None);
    assert!(!row.completed);
    assert_eq!(row.created_at, row.updated_at);
}

#[sqlx::test]
async fn list_is_owner_scoped_and_insertion_ordered(pool: PgPool) {
    let first = task_repo::create(&pool, "u1", "first", None).await.unwrap();
    let second = task_repo::create(&pool, "u1", "second", Some("notes"))
        .await
        .unwrap();

    let other = task_repo::list(&pool, "u2").await.unwrap();
    assert!(other.is_empty());

    let mine = task_repo::list(&pool, "u1").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].task_id, first.task_id);
    assert_eq!(mine[1].task_id, second.task_id);
}

#[sqlx::test]
async fn another_users_task_is_invisible(pool: PgPool) {
    let task = task_repo::create(&pool, "u1", "private", None).await.unwrap();

    // Every operation behaves as if the row did not exist.
    assert!(
        task_repo::get(&pool, "u2", task.task_id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        task_repo::update(&pool, "u2", task.task_id, Some("stolen"), None)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        task_repo::toggle_complete(&pool, "u2", task.task_id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(!task_repo::delete(&pool, "u2", task.task_id).await.unwrap());

    // And the owner still sees it, untouched.
    let mine = task_repo::get(&pool, "u1", task.task_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mine.title, "private");
    assert!(!mine.completed);
}

#[sqlx::test]
async fn toggle_is_an_involution(pool: PgPool) {
    let task = task_repo::create(&pool, "u1", "Buy milk", None).await.unwrap();

    let once = task_repo::toggle_complete(&pool, "u1", task.task_id)
        .await
        .unwrap()
        .unwrap();
    assert!(once.completed);
    assert!(once.updated_at > task.updated_at);
    assert_eq!(once.created_at, task.created_at);

    let twice = task_repo::toggle_complete(&pool, "u1", task.task_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!twice.completed);
    assert!(twice.updated_at > once.updated_at);
}

#[sqlx::test]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let task = task_repo::create(&pool, "u1", "original", Some("keep me"))
        .await
        .unwrap();

    let titled = task_repo::update(&pool, "u1", task.task_id, Some("renamed"), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(titled.title, "renamed");
    assert_eq!(titled.description.as_deref(), Some("keep me"));

    let described = task_repo::update(&pool, "u1", task.task_id, None, Some(Some("new notes")))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(described.title, "renamed");
    assert_eq!(described.description.as_deref(), Some("new notes"));
}

#[sqlx::test]
async fn update_with_no_fields_still_bumps_updated_at(pool: PgPool) {
    let task = task_repo::create(&pool, "u1", "untouched", None).await.unwrap();

    let bumped = task_repo::update(&pool, "u1", task.task_id, None, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(bumped.title, "untouched");
    assert_eq!(bumped.description, None);
    assert!(bumped.updated_at > task.updated_at);
}

#[sqlx::test]
async fn update_can_clear_description(pool: PgPool) {
    let task = task_repo::create(&pool, "u1", "t", Some("to be cleared"))
        .await
        .unwrap();

    let cleared = task_repo::update(&pool, "u1", task.task_id, None, Some(None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cleared.description, None);
}

#[sqlx::test]
async fn delete_is_permanent(pool: PgPool) {
    let task = task_repo::create(&pool, "u1", "doomed", None).await.unwrap();

    assert!(task_repo::delete(&pool, "u1", task.task_id).await.unwrap());
    assert!(
        task_repo::get(&pool, "u1", task.task_id)
            .await
            .unwrap()
            .is_none()
    );
    // A second delete finds nothing.
    assert!(!task_repo::delete(&pool, "u1", task.task_id).await.unwrap());
}

#[sqlx::test]
async fn get_unknown_id_is_none(pool: PgPool) {
    assert!(
        task_repo::get(&pool, "u1", Uuid::new_v4())
            .await
            .unwrap()
            .is_none()
    );
}
