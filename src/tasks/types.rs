// src/tasks/types.rs
// Type definitions for tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_EMPTY: &str = "Title cannot be empty";

/// A stored task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a task
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Result<Self> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::validation(TITLE_REQUIRED));
        }
        Ok(Self {
            title: title.to_string(),
            description,
        })
    }
}

/// Body of `POST /api/tasks` and of the add-task form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<CreateTaskRequest> for NewTask {
    type Error = TaskError;

    fn try_from(req: CreateTaskRequest) -> Result<Self> {
        let title = req
            .title
            .ok_or_else(|| TaskError::validation(TITLE_REQUIRED))?;
        // Forms submit an empty textarea as ""
        let description = req.description.filter(|d| !d.trim().is_empty());
        NewTask::new(title, description)
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err(TaskError::validation(TITLE_EMPTY)),
            _ => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// New title with surrounding whitespace removed
    pub fn trimmed_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim)
    }

    /// `Some(new)` when the description changes; a blank one clears it
    pub fn description_change(&self) -> Option<Option<String>> {
        self.description
            .as_ref()
            .map(|d| Some(d.clone()).filter(|d| !d.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        let created = Utc::now();
        Task {
            id: 1,
            title: "Original".to_string(),
            description: None,
            completed: false,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_new_task_trims_title() {
        let task = NewTask::new("  Write report  ", None).unwrap();
        assert_eq!(task.title, "Write report");
    }

    #[test]
    fn test_new_task_rejects_blank_title() {
        let err = NewTask::new("   ", None).unwrap_err();
        assert_eq!(err.to_string(), TITLE_REQUIRED);
    }

    #[test]
    fn test_request_without_title_is_rejected() {
        let req = CreateTaskRequest {
            title: None,
            description: Some("No title".to_string()),
        };
        let err = NewTask::try_from(req).unwrap_err();
        assert!(matches!(err, TaskError::Validation(ref m) if m == TITLE_REQUIRED));
    }

    #[test]
    fn test_request_drops_blank_description() {
        let req = CreateTaskRequest {
            title: Some("Groceries".to_string()),
            description: Some("".to_string()),
        };
        let task = NewTask::try_from(req).unwrap();
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_update_normalizes_fields() {
        let update = TaskUpdate {
            title: Some("  Tidy desk ".to_string()),
            description: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(update.trimmed_title(), Some("Tidy desk"));
        assert_eq!(update.description_change(), Some(None));
        assert!(!update.is_empty());

        let update = TaskUpdate {
            description: Some("by noon".to_string()),
            ..Default::default()
        };
        assert_eq!(update.trimmed_title(), None);
        assert_eq!(update.description_change(), Some(Some("by noon".to_string())));

        assert_eq!(TaskUpdate::default().description_change(), None);
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let update = TaskUpdate {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        assert!(TaskUpdate::default().validate().is_ok());
        assert!(TaskUpdate::default().is_empty());
    }

    #[test]
    fn test_task_json_shape() {
        let json = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(json["title"], "Original");
        assert_eq!(json["completed"], false);
        assert!(json["description"].is_null());
        assert!(json["created_at"].is_string());
    }
}
