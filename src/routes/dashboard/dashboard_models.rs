use serde::{Deserialize, Serialize};

use crate::models::mentor::Mentor;
use crate::models::task::Task;
use crate::stats::ActivityPoint;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub running: usize,
    pub completion_rate: i64,
}

/// Everything the dashboard view needs in one response, so the client does
/// not issue N+1 calls. Derived on request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub task_stats: TaskStats,
    pub tasks: Vec<Task>,
    pub mentors: Vec<Mentor>,
    pub activity_data: Vec<ActivityPoint>,
    pub current_task: Option<Task>,
}
