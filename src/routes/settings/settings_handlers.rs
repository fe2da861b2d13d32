use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use super::settings_models::{
    GetSettingsQuery, ResetSettingsRequest, SettingsResponse, UpdateSettingsRequest,
};
use crate::error::ApiError;
use crate::models::settings::{Settings, DEFAULT_USER_ID};

const SELECT_SETTINGS: &str = "SELECT user_id, language, timezone, time_format, message, \
     task_update, task_deadline, mentor_help, email_notifications, push_notifications, \
     sms_notifications, updated_at FROM settings";

async fn fetch_settings(pool: &SqlitePool, user_id: &str) -> Result<Option<Settings>, ApiError> {
    let sql = format!("{} WHERE user_id = ?", SELECT_SETTINGS);
    Ok(sqlx::query_as::<_, Settings>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?)
}

async fn upsert_settings(pool: &SqlitePool, settings: &Settings) -> Result<(), ApiError> {
    sqlx::query(
        "INSERT INTO settings (user_id, language, timezone, time_format, message, \
         task_update, task_deadline, mentor_help, email_notifications, \
         push_notifications, sms_notifications, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT(user_id) DO UPDATE SET \
            language = excluded.language, \
            timezone = excluded.timezone, \
            time_format = excluded.time_format, \
            message = excluded.message, \
            task_update = excluded.task_update, \
            task_deadline = excluded.task_deadline, \
            mentor_help = excluded.mentor_help, \
            email_notifications = excluded.email_notifications, \
            push_notifications = excluded.push_notifications, \
            sms_notifications = excluded.sms_notifications, \
            updated_at = excluded.updated_at",
    )
    .bind(&settings.user_id)
    .bind(&settings.language)
    .bind(&settings.timezone)
    .bind(&settings.time_format)
    .bind(settings.message)
    .bind(settings.task_update)
    .bind(settings.task_deadline)
    .bind(settings.mentor_help)
    .bind(settings.email_notifications)
    .bind(settings.push_notifications)
    .bind(settings.sms_notifications)
    .bind(settings.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

// GET /api/settings?userId=
//
// Upsert-on-read: a never-seen user id gets a defaults document created
// and returned, so absence is never an error here.
pub async fn get_settings(
    pool: web::Data<SqlitePool>,
    query: web::Query<GetSettingsQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = query
        .user_id
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    if let Some(settings) = fetch_settings(pool.get_ref(), &user_id).await? {
        return Ok(HttpResponse::Ok().json(settings));
    }

    let settings = Settings::with_defaults(&user_id);
    upsert_settings(pool.get_ref(), &settings).await?;
    info!("Created default settings for user {}", user_id);
    Ok(HttpResponse::Ok().json(settings))
}

// PUT /api/settings
//
// Full replace keyed by user id, upsert-on-write.
pub async fn update_settings(
    pool: web::Data<SqlitePool>,
    request: web::Json<UpdateSettingsRequest>,
) -> Result<HttpResponse, ApiError> {
    let update = request.into_inner();
    let user_id = update
        .user_id
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let mut settings = Settings::with_defaults(&user_id);
    if let Some(language) = update.language {
        settings.language = language;
    }
    if let Some(timezone) = update.timezone {
        settings.timezone = timezone;
    }
    if let Some(time_format) = update.time_format {
        settings.time_format = time_format;
    }
    if let Some(message) = update.message {
        settings.message = message;
    }
    if let Some(task_update) = update.task_update {
        settings.task_update = task_update;
    }
    if let Some(task_deadline) = update.task_deadline {
        settings.task_deadline = task_deadline;
    }
    if let Some(mentor_help) = update.mentor_help {
        settings.mentor_help = mentor_help;
    }
    if let Some(email_notifications) = update.email_notifications {
        settings.email_notifications = email_notifications;
    }
    if let Some(push_notifications) = update.push_notifications {
        settings.push_notifications = push_notifications;
    }
    if let Some(sms_notifications) = update.sms_notifications {
        settings.sms_notifications = sms_notifications;
    }
    settings.updated_at = Utc::now();

    upsert_settings(pool.get_ref(), &settings).await?;
    Ok(HttpResponse::Ok().json(SettingsResponse {
        success: true,
        message: "Settings updated successfully".to_string(),
        settings,
    }))
}

// POST /api/settings/reset
//
// Delete then recreate with defaults.
pub async fn reset_settings(
    pool: web::Data<SqlitePool>,
    request: web::Json<ResetSettingsRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = request
        .user_id
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    sqlx::query("DELETE FROM settings WHERE user_id = ?")
        .bind(&user_id)
        .execute(pool.get_ref())
        .await?;

    let settings = Settings::with_defaults(&user_id);
    upsert_settings(pool.get_ref(), &settings).await?;
    info!("Reset settings for user {}", user_id);
    Ok(HttpResponse::Ok().json(SettingsResponse {
        success: true,
        message: "Settings reset to default".to_string(),
        settings,
    }))
}
