use serde::{Deserialize, Serialize};
use time::Date;

use crate::core::api::{error::ApiError, user::User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as returned by the server. The client never mutates one in place;
/// it holds them only as a re-fetchable snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "assignedTo", default)]
    pub assigned_to: Option<User>,
    #[serde(
        rename = "dueDate",
        default,
        deserialize_with = "due_date::deserialize"
    )]
    pub due_date: Option<Date>,
    pub status: TaskStatus,
    #[serde(skip)]
    pub(super) _guard: (),
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
    #[serde(
        rename = "dueDate",
        skip_serializing_if = "Option::is_none",
        serialize_with = "due_date::serialize"
    )]
    pub due_date: Option<Date>,
}

/// Partial update for an existing task. Unset fields are left out of the
/// request body and stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(
        rename = "dueDate",
        skip_serializing_if = "Option::is_none",
        serialize_with = "due_date::serialize"
    )]
    pub due_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Date-only rendering used everywhere a due date is shown.
pub fn format_due_date(date: Date) -> String {
    date.format(due_date::DATE_ONLY).unwrap_or_default()
}

pub trait TaskRepository {
    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>, ApiError>>;
    fn create_task(&self, task: &NewTask) -> impl Future<Output = Result<Task, ApiError>>;
    fn update_task(
        &self,
        id: &str,
        update: &TaskUpdate,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn delete_task(&self, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

/// Due dates are date-only values, but the server may hand back either a
/// plain `YYYY-MM-DD` string or a full RFC 3339 timestamp.
pub(crate) mod due_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::{
        Date, OffsetDateTime,
        format_description::{BorrowedFormatItem, well_known::Rfc3339},
        macros::format_description,
    };

    pub(crate) const DATE_ONLY: &[BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day]");

    pub(crate) fn parse(value: &str) -> Option<Date> {
        Date::parse(value, DATE_ONLY)
            .or_else(|_| OffsetDateTime::parse(value, &Rfc3339).map(|dt| dt.date()))
            .ok()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("unrecognized due date: {s}"))),
        }
    }

    pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => {
                let formatted = date
                    .format(DATE_ONLY)
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }
}
