use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::tasks_models::{
    CreateTaskRequest, DeleteTaskResponse, TaskStatsResponse, UpdateTaskRequest,
};
use crate::error::ApiError;
use crate::models::task::{Task, TaskRow, TaskStatus};
use crate::stats;

const SELECT_TASK: &str = "SELECT id, title, description, category, status, progress, \
     created_at, due_date, team_members, subtasks FROM tasks";

/// All tasks, most recently created first.
pub async fn fetch_all_tasks(pool: &SqlitePool) -> Result<Vec<Task>, ApiError> {
    let sql = format!("{} ORDER BY created_at DESC", SELECT_TASK);
    let rows = sqlx::query_as::<_, TaskRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Task::from).collect())
}

async fn fetch_task(pool: &SqlitePool, id: &str) -> Result<Option<Task>, ApiError> {
    let sql = format!("{} WHERE id = ?", SELECT_TASK);
    let row = sqlx::query_as::<_, TaskRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Task::from))
}

pub async fn insert_task(pool: &SqlitePool, task: &Task) -> Result<(), ApiError> {
    sqlx::query(
        "INSERT INTO tasks (id, title, description, category, status, progress, \
         created_at, due_date, team_members, subtasks) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.category)
    .bind(task.status.as_str())
    .bind(task.progress)
    .bind(task.created_at.to_rfc3339())
    .bind(task.due_date.map(|d| d.to_rfc3339()))
    .bind(serde_json::to_string(&task.team_members)?)
    .bind(serde_json::to_string(&task.subtasks)?)
    .execute(pool)
    .await?;
    Ok(())
}

async fn save_task(pool: &SqlitePool, task: &Task) -> Result<(), ApiError> {
    sqlx::query(
        "UPDATE tasks SET title = ?, description = ?, category = ?, status = ?, \
         progress = ?, due_date = ?, team_members = ?, subtasks = ? WHERE id = ?",
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.category)
    .bind(task.status.as_str())
    .bind(task.progress)
    .bind(task.due_date.map(|d| d.to_rfc3339()))
    .bind(serde_json::to_string(&task.team_members)?)
    .bind(serde_json::to_string(&task.subtasks)?)
    .bind(&task.id)
    .execute(pool)
    .await?;
    Ok(())
}

// GET /api/tasks
pub async fn list_tasks(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let tasks = fetch_all_tasks(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

// GET /api/tasks/{id}
pub async fn get_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let task = fetch_task(pool.get_ref(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", id)))?;
    Ok(HttpResponse::Ok().json(task))
}

// POST /api/tasks
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let title = request.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }

    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: request.description.clone(),
        category: None,
        status: TaskStatus::Pending,
        progress: 0,
        created_at: Utc::now(),
        due_date: None,
        team_members: Vec::new(),
        subtasks: Vec::new(),
    };
    insert_task(pool.get_ref(), &task).await?;
    info!("Created task {}", task.id);
    Ok(HttpResponse::Created().json(task))
}

// PUT /api/tasks/{id}
//
// Merge semantics: provided fields replace, omitted fields stay. Unknown
// ids are NotFound; id and created_at are immutable. Concurrent updates
// are last-write-wins, there is no version check.
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut task = fetch_task(pool.get_ref(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", id)))?;

    let update = request.into_inner();
    if let Some(title) = update.title {
        task.title = title;
    }
    if let Some(description) = update.description {
        task.description = Some(description);
    }
    if let Some(category) = update.category {
        task.category = Some(category);
    }
    if let Some(status) = update.status {
        task.status = status;
    }
    if let Some(progress) = update.progress {
        task.progress = stats::format_progress(progress);
    }
    if let Some(due_date) = update.due_date {
        task.due_date = Some(due_date);
    }
    if let Some(team_members) = update.team_members {
        task.team_members = team_members;
    }
    if let Some(subtasks) = update.subtasks {
        task.subtasks = subtasks;
    }

    save_task(pool.get_ref(), &task).await?;
    Ok(HttpResponse::Ok().json(task))
}

// DELETE /api/tasks/{id}
//
// Idempotent: deleting an id that is already gone is still a 200.
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await?;
    if result.rows_affected() == 0 {
        info!("Delete of unknown task {} treated as success", id);
    }
    Ok(HttpResponse::Ok().json(DeleteTaskResponse {
        message: "Task deleted".to_string(),
    }))
}

// GET /api/tasks/stats
pub async fn task_stats(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let tasks = fetch_all_tasks(pool.get_ref()).await?;
    let total_tasks = tasks.len();
    let completed_tasks = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();

    let response = TaskStatsResponse {
        total_tasks,
        completed_tasks,
        active_tasks: total_tasks - completed_tasks,
        new_tasks: stats::new_task_count(&tasks, Utc::now()),
        average_progress: stats::average_progress(&tasks),
        category_stats: stats::category_counts(&tasks),
    };
    Ok(HttpResponse::Ok().json(response))
}
