/*
 * Responsibility
 * - Task request/response DTOs
 * - Field validation with field-level error detail (title 1–255 chars,
 *   description <= 2000 chars)
 * - Note: owner_id is never part of a request body; ownership always comes
 *   from the verified credential.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::repos::task_repo::TaskRow;

pub const TITLE_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.is_empty() {
            return Err(AppError::validation("title", "must not be empty"));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(AppError::validation("title", "must be at most 255 chars"));
        }
        if let Some(description) = &self.description
            && description.chars().count() > DESCRIPTION_MAX_CHARS
        {
            return Err(AppError::validation(
                "description",
                "must be at most 2000 chars",
            ));
        }

        Ok(())
    }
}

// Keep "field present with null" distinct from "field missing": serde's derive
// collapses `null` into the outer None for Option<Option<T>>, so the inner
// Option has to be deserialized explicitly.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (clear the description)
    // - Some(Some(v)): set value
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            if title.is_empty() {
                return Err(AppError::validation("title", "must not be empty"));
            }
            if title.chars().count() > TITLE_MAX_CHARS {
                return Err(AppError::validation("title", "must be at most 255 chars"));
            }
        }
        if let Some(Some(description)) = &self.description
            && description.chars().count() > DESCRIPTION_MAX_CHARS
        {
            return Err(AppError::validation(
                "description",
                "must be at most 2000 chars",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TaskRow> for TaskResponse {
    fn from(row: TaskRow) -> Self {
        // userId is intentionally not echoed back; the caller already proved
        // who they are.
        Self {
            id: row.task_id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_empty_title_is_rejected() {
        let req = CreateTaskRequest {
            title: String::new(),
            description: None,
        };
        assert!(matches!(
            req.validate(),
            Err(AppError::Validation { field: "title", .. })
        ));
    }

    #[test]
    fn create_title_boundary() {
        let ok = CreateTaskRequest {
            title: "x".repeat(255),
            description: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateTaskRequest {
            title: "x".repeat(256),
            description: None,
        };
        assert!(matches!(
            too_long.validate(),
            Err(AppError::Validation { field: "title", .. })
        ));
    }

    #[test]
    fn create_description_boundary() {
        let ok = CreateTaskRequest {
            title: "t".into(),
            description: Some("d".repeat(2000)),
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateTaskRequest {
            title: "t".into(),
            description: Some("d".repeat(2001)),
        };
        assert!(matches!(
            too_long.validate(),
            Err(AppError::Validation {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn update_provided_empty_title_is_rejected() {
        let req = UpdateTaskRequest {
            title: Some(String::new()),
            description: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        let req = UpdateTaskRequest {
            title: None,
            description: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_description_is_tri_state() {
        let missing: UpdateTaskRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert!(missing.description.is_none());

        let null: UpdateTaskRequest = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(null.description, Some(None));

        let set: UpdateTaskRequest = serde_json::from_str(r#"{"description":"notes"}"#).unwrap();
        assert_eq!(set.description, Some(Some("notes".to_string())));
    }

    #[test]
    fn multibyte_titles_count_chars_not_bytes() {
        let req = CreateTaskRequest {
            title: "あ".repeat(255),
            description: None,
        };
        assert!(req.validate().is_ok());
    }
}
