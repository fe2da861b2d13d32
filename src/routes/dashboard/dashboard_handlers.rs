use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::dashboard_models::{DashboardSnapshot, TaskStats};
use crate::error::ApiError;
use crate::models::mentor::default_mentors;
use crate::models::task::{Task, TaskStatus};
use crate::routes::tasks::tasks_handlers::fetch_all_tasks;
use crate::stats;

/// How many records the snapshot carries in its upcoming-tasks slice.
const SNAPSHOT_TASK_LIMIT: usize = 10;

pub fn build_task_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let running = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    TaskStats {
        total,
        completed,
        running,
        completion_rate: stats::completion_rate(total, completed),
    }
}

/// Assemble a snapshot from a recency-ordered task collection.
pub fn build_snapshot(tasks: Vec<Task>, now: DateTime<Utc>) -> DashboardSnapshot {
    let task_stats = build_task_stats(&tasks);
    let activity_data = stats::activity_series(&tasks, now.date_naive());
    let current_task = stats::current_task(&tasks).cloned();
    let tasks = tasks.into_iter().take(SNAPSHOT_TASK_LIMIT).collect();
    DashboardSnapshot {
        task_stats,
        tasks,
        mentors: default_mentors(),
        activity_data,
        current_task,
    }
}

// GET /api/dashboard
//
// One aggregate response; a failed fetch is a single 500, there is no
// partial-success mode.
pub async fn dashboard_get(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let tasks = fetch_all_tasks(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(build_snapshot(tasks, Utc::now())))
}

// GET /api/dashboard/stats
pub async fn dashboard_stats(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let tasks = fetch_all_tasks(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(build_task_stats(&tasks)))
}
