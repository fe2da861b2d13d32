use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::task::{Subtask, TaskStatus};
use crate::stats::CategoryCount;

// Create request: title is required but arrives as an Option so a missing
// field becomes a ValidationError instead of a bare deserialization failure.
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// Partial update: every field optional, omitted fields keep their value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
    pub progress: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub team_members: Option<Vec<String>>,
    pub subtasks: Option<Vec<Subtask>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatsResponse {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub active_tasks: usize,
    pub new_tasks: usize,
    pub average_progress: i64,
    pub category_stats: Vec<CategoryCount>,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub message: String,
}
