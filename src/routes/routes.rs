use actix_web::web;

use super::dashboard::dashboard_handlers;
use super::settings::settings_handlers;
use super::tasks::tasks_handlers;

pub fn tasks_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tasks")
            // registered before /{id} so "stats" is not taken for an id
            .route("/stats", web::get().to(tasks_handlers::task_stats))
            .route("", web::get().to(tasks_handlers::list_tasks))
            .route("", web::post().to(tasks_handlers::create_task))
            .route("/{id}", web::get().to(tasks_handlers::get_task))
            .route("/{id}", web::put().to(tasks_handlers::update_task))
            .route("/{id}", web::delete().to(tasks_handlers::delete_task)),
    );
}

pub fn dashboard_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/dashboard")
            .route("", web::get().to(dashboard_handlers::dashboard_get))
            .route("/stats", web::get().to(dashboard_handlers::dashboard_stats)),
    );
}

pub fn settings_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/settings")
            .route("", web::get().to(settings_handlers::get_settings))
            .route("", web::put().to(settings_handlers::update_settings))
            .route("/reset", web::post().to(settings_handlers::reset_settings)),
    );
}
