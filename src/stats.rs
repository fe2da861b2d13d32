//! Derivation logic shared by the task-stats and dashboard endpoints.
//!
//! Everything here is a pure function over a task slice so the endpoints
//! stay thin and the formulas stay testable.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::task::{Task, TaskStatus};

/// Weekday initials indexed from Sunday. Sunday/Saturday and
/// Tuesday/Thursday collide; single-letter labels accept that.
pub const DAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub day: String,
    pub tasks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// round(100 * completed / total), 0 for an empty collection.
pub fn completion_rate(total: usize, completed: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as i64
}

/// Clamp a progress value into [0, 100].
pub fn format_progress(progress: i64) -> i64 {
    progress.clamp(0, 100)
}

/// Mean progress rounded to the nearest integer, 0 for an empty collection.
pub fn average_progress(tasks: &[Task]) -> i64 {
    if tasks.is_empty() {
        return 0;
    }
    let sum: i64 = tasks.iter().map(|t| t.progress).sum();
    (sum as f64 / tasks.len() as f64).round() as i64
}

/// Tasks created within the trailing week, not yet completed.
pub fn new_task_count(tasks: &[Task], now: DateTime<Utc>) -> usize {
    let week_ago = now - Duration::days(7);
    tasks
        .iter()
        .filter(|t| {
            t.created_at >= week_ago
                && t.created_at < now
                && t.status != TaskStatus::Completed
        })
        .count()
}

/// Per-category task counts, most populated category first. Tasks without
/// a category are skipped. Ties break alphabetically so the order is stable.
pub fn category_counts(tasks: &[Task]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for task in tasks {
        if let Some(category) = task.category.as_deref() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }
    let mut stats: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    stats
}

/// Task counts for the 7 calendar days ending at `today`, oldest first.
/// A task belongs to a day when its creation date equals that calendar
/// date; this is a string-exact date match, not a 24-hour window.
pub fn activity_series(tasks: &[Task], today: NaiveDate) -> Vec<ActivityPoint> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = tasks
                .iter()
                .filter(|t| t.created_at.date_naive() == date)
                .count();
            ActivityPoint {
                day: DAY_LABELS[date.weekday().num_days_from_sunday() as usize].to_string(),
                tasks: count,
            }
        })
        .collect()
}

/// First in-progress task in the given order, if any.
pub fn current_task(tasks: &[Task]) -> Option<&Task> {
    tasks.iter().find(|t| t.status == TaskStatus::InProgress)
}
