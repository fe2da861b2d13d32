use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User id used when a request does not name one. There is no multi-tenant
/// auth in this system.
pub const DEFAULT_USER_ID: &str = "default-user";

/// Per-user preference document. Exactly one row exists per user id;
/// a missing row is repaired with defaults on first read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_id: String,
    pub language: String,
    pub timezone: String,
    pub time_format: String,
    pub message: bool,
    pub task_update: bool,
    pub task_deadline: bool,
    pub mentor_help: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub updated_at: DateTime<Utc>,
}

impl Settings {
    pub fn with_defaults(user_id: &str) -> Self {
        Settings {
            user_id: user_id.to_string(),
            language: "English (Default)".to_string(),
            timezone: "English (Default)".to_string(),
            time_format: "24 Hours".to_string(),
            message: true,
            task_update: true,
            task_deadline: true,
            mentor_help: false,
            email_notifications: true,
            push_notifications: true,
            sms_notifications: false,
            updated_at: Utc::now(),
        }
    }
}
