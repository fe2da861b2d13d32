//! Client-side data-fetch layer: a thin HTTP wrapper over the API plus a
//! polling feed that always holds a renderable dashboard snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::warn;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::config;
use crate::error::ApiError;
use crate::models::mentor::default_mentors;
use crate::models::settings::Settings;
use crate::models::task::Task;
use crate::routes::dashboard::dashboard_models::{DashboardSnapshot, TaskStats};
use crate::routes::settings::settings_models::SettingsResponse;
use crate::routes::tasks::tasks_models::TaskStatsResponse;
use crate::stats;

/// Full snapshot refresh cadence.
pub const DASHBOARD_POLL_INTERVAL: Duration = Duration::from_secs(30);
/// Cheaper task-list poll, only used to signal "data changed" to the UI.
pub const TASK_POLL_INTERVAL: Duration = Duration::from_secs(10);

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&config::api_base_url())
    }

    pub async fn dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let url = format!("{}/api/dashboard", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = format!("{}/api/tasks", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn task_stats(&self) -> Result<TaskStatsResponse, ApiError> {
        let url = format!("{}/api/tasks/stats", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn settings(&self, user_id: &str) -> Result<Settings, ApiError> {
        let url = format!("{}/api/settings", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn put_settings(&self, settings: &Settings) -> Result<SettingsResponse, ApiError> {
        let url = format!("{}/api/settings", self.base_url);
        let response = self
            .http
            .put(&url)
            .json(settings)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Snapshot shown before the first successful fetch. The numbers are the
/// original dashboard's demo figures, not derived from anything.
pub fn placeholder_snapshot(now: DateTime<Utc>) -> DashboardSnapshot {
    DashboardSnapshot {
        task_stats: TaskStats {
            total: 100,
            completed: 45,
            running: 65,
            completion_rate: 45,
        },
        tasks: Vec::new(),
        mentors: default_mentors(),
        activity_data: stats::activity_series(&[], now.date_naive()),
        current_task: None,
    }
}

struct FeedState {
    snapshot: DashboardSnapshot,
    last_updated: DateTime<Utc>,
    live: bool,
}

/// Single mutable slot holding the latest successful snapshot. A fetch
/// failure keeps the previous value so the UI never loses its display.
pub struct DashboardFeed {
    client: ApiClient,
    state: RwLock<FeedState>,
    changed: watch::Sender<u64>,
}

impl DashboardFeed {
    pub fn new(client: ApiClient) -> Arc<Self> {
        let (changed, _) = watch::channel(0);
        Arc::new(Self {
            client,
            state: RwLock::new(FeedState {
                snapshot: placeholder_snapshot(Utc::now()),
                last_updated: Utc::now(),
                live: false,
            }),
            changed,
        })
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.snapshot.clone()
    }

    pub async fn last_updated(&self) -> DateTime<Utc> {
        self.state.read().await.last_updated
    }

    /// Whether the slot holds real data rather than the placeholder.
    pub async fn is_live(&self) -> bool {
        self.state.read().await.live
    }

    /// Notifies whenever the feed thinks the UI should re-render.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    fn notify_changed(&self) {
        self.changed.send_modify(|generation| *generation += 1);
    }

    async fn fetch_snapshot(&self) {
        match self.client.dashboard().await {
            Ok(snapshot) => {
                let mut state = self.state.write().await;
                state.snapshot = snapshot;
                state.live = true;
            }
            Err(e) => warn!("Dashboard fetch failed, keeping last snapshot: {}", e),
        }
    }

    async fn poll_task_list(&self) {
        match self.client.tasks().await {
            Ok(_) => self.notify_changed(),
            Err(e) => warn!("Task list poll failed: {}", e),
        }
    }

    /// Manual refresh: re-issue both fetches and reset the last-updated
    /// timestamp regardless of outcome.
    pub async fn refresh(&self) {
        self.fetch_snapshot().await;
        self.poll_task_list().await;
        self.state.write().await.last_updated = Utc::now();
        self.notify_changed();
    }

    /// Start the two timers. Independent intervals; overlapping in-flight
    /// requests are neither cancelled nor coalesced.
    pub fn spawn_polling(self: Arc<Self>) -> (JoinHandle<()>, JoinHandle<()>) {
        let feed = Arc::clone(&self);
        let dashboard_loop = tokio::spawn(async move {
            let mut tick = tokio::time::interval(DASHBOARD_POLL_INTERVAL);
            loop {
                tick.tick().await;
                feed.fetch_snapshot().await;
                feed.state.write().await.last_updated = Utc::now();
                feed.notify_changed();
            }
        });

        let feed = self;
        let task_loop = tokio::spawn(async move {
            let mut tick = tokio::time::interval(TASK_POLL_INTERVAL);
            loop {
                tick.tick().await;
                feed.poll_task_list().await;
            }
        });

        (dashboard_loop, task_loop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_renderable() {
        let snapshot = placeholder_snapshot(Utc::now());
        assert_eq!(snapshot.activity_data.len(), 7);
        assert!(snapshot.activity_data.iter().all(|p| p.tasks == 0));
        assert_eq!(snapshot.mentors.len(), 2);
        assert!(snapshot.tasks.is_empty());
        assert!(snapshot.current_task.is_none());
        assert_eq!(snapshot.task_stats.completion_rate, 45);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_placeholder_and_resets_timestamp() {
        // Port 9 (discard) is not listening; both fetches fail fast.
        let feed = DashboardFeed::new(ApiClient::new("http://127.0.0.1:9"));
        let before = feed.last_updated().await;
        let mut rx = feed.subscribe();
        let initial = *rx.borrow_and_update();

        feed.refresh().await;

        assert!(!feed.is_live().await);
        assert_eq!(feed.snapshot().await.task_stats.total, 100);
        assert!(feed.last_updated().await >= before);
        assert!(*rx.borrow_and_update() > initial);
    }
}
