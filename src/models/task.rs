use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Single task status. The wire format is the snake_case string
/// ("pending", "in_progress", "completed", "on_hold").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    OnHold,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::OnHold => "on_hold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            "on_hold" => Some(TaskStatus::OnHold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: TaskStatus,
    pub progress: i64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Raw row shape: timestamps are RFC 3339 text (lexicographic order is
/// chronological for UTC) and the nested sequences live in JSON columns.
#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub progress: i64,
    pub created_at: String,
    pub due_date: Option<String>,
    pub team_members: String,
    pub subtasks: String,
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            status: TaskStatus::parse(&row.status).unwrap_or(TaskStatus::Pending),
            progress: crate::stats::format_progress(row.progress),
            created_at: parse_timestamp(&row.created_at),
            due_date: row.due_date.as_deref().map(parse_timestamp),
            team_members: serde_json::from_str(&row.team_members).unwrap_or_default(),
            subtasks: serde_json::from_str(&row.subtasks).unwrap_or_default(),
        }
    }
}
