/*
 * Responsibility
 * - tasks CRUD via SQLx against PgPool
 * - Every statement is scoped by "userId"; the owner argument always comes
 *   from the verified credential, never from the request body.
 * - "row not found" and "row owned by someone else" are indistinguishable
 *   here on purpose: both come back as None/false.
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    #[sqlx(rename = "taskId")]
    pub task_id: Uuid,

    #[sqlx(rename = "userId")]
    pub user_id: String,

    pub title: String,
    pub description: Option<String>,
    pub completed: bool,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn create(
    db: &PgPool,
    owner_id: &str,
    title: &str,
    description: Option<&str>,
) -> Result<TaskRow, RepoError> {
    // createdAt and updatedAt both come from the table defaults (now()),
    // so they are equal at creation.
    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        INSERT INTO tasks ("taskId", "userId", title, description)
        VALUES ($1, $2, $3, $4)
        RETURNING
            "taskId", "userId", title, description, completed, "createdAt", "updatedAt"
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(title)
    .bind(description)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn list(db: &PgPool, owner_id: &str) -> Result<Vec<TaskRow>, RepoError> {
    // Insertion order, taskId as tiebreak for same-instant rows.
    let rows = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT
            "taskId", "userId", title, description, completed, "createdAt", "updatedAt"
        FROM tasks
        WHERE "userId" = $1
        ORDER BY "createdAt", "taskId"
        "#,
    )
    .bind(owner_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, owner_id: &str, task_id: Uuid) -> Result<Option<TaskRow>, RepoError> {
    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT
            "taskId", "userId", title, description, completed, "createdAt", "updatedAt"
        FROM tasks
        WHERE "taskId" = $1 AND "userId" = $2
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    owner_id: &str,
    task_id: Uuid,
    title: Option<&str>,
    description: Option<Option<&str>>,
) -> Result<Option<TaskRow>, RepoError> {
    // description tri-state:
    // - Some(Some(v)) -> set to v
    // - Some(None)    -> set NULL
    // - None          -> do not update
    // "updatedAt" is bumped even when no field is provided.
    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        UPDATE tasks
        SET
            title = COALESCE($3, title),
            description = CASE
                WHEN $4 = false THEN description
                ELSE $5
            END,
            "updatedAt" = now()
        WHERE "taskId" = $1 AND "userId" = $2
        RETURNING
            "taskId", "userId", title, description, completed, "createdAt", "updatedAt"
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .bind(title)
    .bind(description.is_some()) // $4: flag to set description
    .bind(description.flatten()) // $5: new description value
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn toggle_complete(
    db: &PgPool,
    owner_id: &str,
    task_id: Uuid,
) -> Result<Option<TaskRow>, RepoError> {
    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        UPDATE tasks
        SET
            completed = NOT completed,
            "updatedAt" = now()
        WHERE "taskId" = $1 AND "userId" = $2
        RETURNING
            "taskId", "userId", title, description, completed, "createdAt", "updatedAt"
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, owner_id: &str, task_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE "taskId" = $1 AND "userId" = $2
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
