use serde::{Deserialize, Serialize};

use crate::models::settings::Settings;

#[derive(Deserialize)]
pub struct GetSettingsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

// Full-replace payload: omitted fields fall back to the documented
// defaults, so repeating the same request is idempotent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub user_id: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub time_format: Option<String>,
    pub message: Option<bool>,
    pub task_update: Option<bool>,
    pub task_deadline: Option<bool>,
    pub mentor_help: Option<bool>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
}

#[derive(Deserialize)]
pub struct ResetSettingsRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SettingsResponse {
    pub success: bool,
    pub message: String,
    pub settings: Settings,
}
