use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationErrors;
use crate::validation::{Fields, Patch};

/// To-do entry. `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

/// Client-supplied part of a new task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update. Only fields present in the request body are touched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskPatch {
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub due_date: Patch<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Default::default() }
    }

    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::from_body(body)?;
        let title = fields.required_str("title");
        let description = fields.optional_str("description");
        let due_date = fields.optional_datetime("due_date");
        fields.finish()?;
        Ok(Self { title: title.unwrap_or_default(), description, due_date })
    }
}

impl TaskPatch {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::from_body(body)?;
        let patch = Self {
            title: fields.patch_required_str("title"),
            description: fields.patch_str("description"),
            due_date: fields.patch_datetime("due_date"),
        };
        fields.finish()?;
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset() && self.description.is_unset() && self.due_date.is_unset()
    }
}

impl Task {
    pub fn new(id: String, created_at: DateTime<Utc>, input: NewTask) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            created_at,
            completed: false,
        }
    }

    /// Merge the fields set in `patch`; identity, creation time and the
    /// completion flag are out of its reach.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Patch::Set(title) = patch.title {
            self.title = title;
        }
        patch.description.apply_to(&mut self.description);
        patch.due_date.apply_to(&mut self.due_date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Task {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        Task::new("t-1".into(), created, NewTask::new("A"))
    }

    #[test]
    fn new_task_requires_title() {
        let err = NewTask::from_json(&json!({"description": "no title"})).unwrap_err();
        assert_eq!(err.0[0].loc, vec!["body".to_string(), "title".to_string()]);

        let input = NewTask::from_json(&json!({"title": "Buy milk", "due_date": "2024-06-01T08:30:00"})).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.due_date, Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()));
    }

    #[test]
    fn created_task_starts_incomplete() {
        let task = sample();
        assert!(!task.completed);
        assert_eq!(task.description, None);
    }

    #[test]
    fn apply_leaves_unspecified_fields() {
        let mut task = sample();
        let patch = TaskPatch::from_json(&json!({"description": "B"})).unwrap();
        task.apply(patch);
        assert_eq!(task.title, "A");
        assert_eq!(task.description.as_deref(), Some("B"));
        assert_eq!(task.id, "t-1");
    }

    #[test]
    fn apply_clears_nullable_fields() {
        let mut task = sample();
        task.apply(TaskPatch::from_json(&json!({"description": "x", "due_date": "2024-02-01"})).unwrap());
        assert!(task.due_date.is_some());
        task.apply(TaskPatch::from_json(&json!({"description": null, "due_date": null})).unwrap());
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn patch_ignores_immutable_and_unknown_fields() {
        let mut task = sample();
        let before = task.clone();
        let patch = TaskPatch::from_json(&json!({"id": "other", "created_at": "2020-01-01", "completed": true})).unwrap();
        assert!(patch.is_empty());
        task.apply(patch);
        assert_eq!(task, before);
    }

    #[test]
    fn patch_rejects_bad_types() {
        let err = TaskPatch::from_json(&json!({"title": null, "due_date": "soon"})).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
