//! Inserts a handful of sample tasks into the configured database.

use chrono::{Duration, Utc};
use dotenv::dotenv;
use uuid::Uuid;

use taskdash_backend::models::task::{Subtask, Task, TaskStatus};
use taskdash_backend::routes::tasks::tasks_handlers::insert_task;
use taskdash_backend::{config, db};

fn sample_task(
    title: &str,
    category: &str,
    status: TaskStatus,
    progress: i64,
    days_ago: i64,
    due_in_days: Option<i64>,
    team_members: Vec<&str>,
    description: &str,
) -> Task {
    let now = Utc::now();
    Task {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        status,
        progress,
        created_at: now - Duration::days(days_ago),
        due_date: due_in_days.map(|d| now + Duration::days(d)),
        team_members: team_members.into_iter().map(String::from).collect(),
        subtasks: Vec::new(),
    }
}

fn sample_tasks() -> Vec<Task> {
    let mut tasks = vec![
        sample_task(
            "Learn Figma Design Fundamentals",
            "Design",
            TaskStatus::InProgress,
            75,
            1,
            Some(2),
            vec![
                "https://images.unsplash.com/photo-1494790108755-2616b612d5c3?w=32&h=32",
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=32&h=32",
            ],
            "Master the fundamentals of Figma including components, auto-layout, and prototyping.",
        ),
        sample_task(
            "React TypeScript Development",
            "Development",
            TaskStatus::Pending,
            45,
            2,
            Some(5),
            vec!["https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=32&h=32"],
            "Build modern web applications using React with TypeScript.",
        ),
        sample_task(
            "Digital Marketing Strategy",
            "Marketing",
            TaskStatus::Completed,
            100,
            4,
            None,
            vec!["https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=32&h=32"],
            "Develop digital marketing strategies including SEO and content marketing.",
        ),
        sample_task(
            "Data Science with Python",
            "Data Science",
            TaskStatus::OnHold,
            30,
            6,
            Some(7),
            vec!["https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=32&h=32"],
            "Learn data science fundamentals using Python, pandas, and numpy.",
        ),
    ];

    tasks[0].subtasks = vec![
        Subtask {
            id: 1,
            title: "Understanding the tools in Figma".to_string(),
            completed: true,
        },
        Subtask {
            id: 2,
            title: "Understand the basics of making designs".to_string(),
            completed: true,
        },
        Subtask {
            id: 3,
            title: "Design a mobile application with figma".to_string(),
            completed: false,
        },
    ];
    tasks
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config = config::ServerConfig::from_env();
    let pool = db::connect(&config.database_url).await?;

    let tasks = sample_tasks();
    for task in &tasks {
        insert_task(&pool, task).await?;
        log::info!("Seeded task: {}", task.title);
    }
    println!("Seeded {} tasks into {}", tasks.len(), config.database_url);
    Ok(())
}
