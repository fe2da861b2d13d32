//! End-to-end tests over the HTTP surface, backed by an in-memory database.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use taskdash_backend::{db, routes};

async fn spawn_app() -> (
    SqlitePool,
    impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) {
    let pool = db::connect_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::routes::tasks_configure)
            .configure(routes::routes::dashboard_configure)
            .configure(routes::routes::settings_configure),
    )
    .await;
    (pool, app)
}

async fn create_task<S>(app: &S, title: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(json!({ "title": title }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn create_task_applies_server_side_defaults() {
    let (_pool, app) = spawn_app().await;

    let body = create_task(&app, "X").await;
    assert_eq!(body["progress"], 0);
    assert_eq!(body["status"], "pending");
    assert!(body["createdAt"].is_string());
    assert!(body["id"].is_string());
    assert!(body.get("category").is_none());
    assert_eq!(body["teamMembers"], json!([]));
}

#[actix_web::test]
async fn create_task_without_title_is_rejected() {
    let (_pool, app) = spawn_app().await;

    for payload in [json!({}), json!({ "title": "   " })] {
        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[actix_web::test]
async fn get_unknown_task_is_not_found() {
    let (_pool, app) = spawn_app().await;

    let req = test::TestRequest::get()
        .uri("/api/tasks/no-such-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("no-such-id"));
}

#[actix_web::test]
async fn update_merges_fields_and_clamps_progress() {
    let (_pool, app) = spawn_app().await;

    let created = create_task(&app, "Original title").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", id))
        .set_json(json!({
            "category": "Design",
            "status": "in_progress",
            "progress": 150
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Original title");
    assert_eq!(body["category"], "Design");
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["progress"], 100);
    assert_eq!(body["createdAt"], created["createdAt"]);

    // the merge is persisted, not just echoed
    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", id))
        .to_request();
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched["progress"], 100);
}

#[actix_web::test]
async fn update_unknown_task_is_not_found() {
    let (_pool, app) = spawn_app().await;

    let req = test::TestRequest::put()
        .uri("/api/tasks/ghost")
        .set_json(json!({ "title": "anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn delete_is_idempotent() {
    let (_pool, app) = spawn_app().await;

    let created = create_task(&app, "Disposable").await;
    let id = created["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/tasks/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Task deleted");
    }
}

#[actix_web::test]
async fn task_stats_reflect_the_collection() {
    let (_pool, app) = spawn_app().await;

    let first = create_task(&app, "First").await;
    create_task(&app, "Second").await;

    // complete the first with some progress on both
    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", first["id"].as_str().unwrap()))
        .set_json(json!({ "status": "completed", "progress": 100, "category": "Design" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get().uri("/api/tasks/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalTasks"], 2);
    assert_eq!(body["completedTasks"], 1);
    assert_eq!(body["activeTasks"], 1);
    // only the still-active recent task counts as new
    assert_eq!(body["newTasks"], 1);
    assert_eq!(body["averageProgress"], 50);
    assert_eq!(body["categoryStats"][0]["category"], "Design");
    assert_eq!(body["categoryStats"][0]["count"], 1);
}

#[actix_web::test]
async fn dashboard_snapshot_is_one_aggregate_response() {
    let (_pool, app) = spawn_app().await;

    let first = create_task(&app, "Running task").await;
    create_task(&app, "Waiting task").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", first["id"].as_str().unwrap()))
        .set_json(json!({ "status": "in_progress", "progress": 40 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get().uri("/api/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["taskStats"]["total"], 2);
    assert_eq!(body["taskStats"]["running"], 1);
    assert_eq!(body["taskStats"]["completed"], 0);
    assert_eq!(body["taskStats"]["completionRate"], 0);
    assert_eq!(body["activityData"].as_array().unwrap().len(), 7);
    // both tasks were created today, the last bucket
    assert_eq!(body["activityData"][6]["tasks"], 2);
    assert_eq!(body["currentTask"]["title"], "Running task");
    assert_eq!(body["mentors"].as_array().unwrap().len(), 2);
    assert!(body["tasks"].as_array().unwrap().len() <= 10);
}

#[actix_web::test]
async fn dashboard_stats_endpoint_returns_the_small_shape() {
    let (_pool, app) = spawn_app().await;

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["completionRate"], 0);
}

#[actix_web::test]
async fn settings_get_creates_defaults_and_is_idempotent() {
    let (_pool, app) = spawn_app().await;

    let req = test::TestRequest::get()
        .uri("/api/settings?userId=fresh-user")
        .to_request();
    let first: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(first["userId"], "fresh-user");
    assert_eq!(first["language"], "English (Default)");
    assert_eq!(first["timeFormat"], "24 Hours");
    assert_eq!(first["message"], true);
    assert_eq!(first["mentorHelp"], false);
    assert_eq!(first["smsNotifications"], false);

    let req = test::TestRequest::get()
        .uri("/api/settings?userId=fresh-user")
        .to_request();
    let second: Value = test::read_body_json(test::call_service(&app, req).await).await;

    // identical document apart from timestamp storage precision
    let strip = |mut v: Value| {
        v.as_object_mut().unwrap().remove("updatedAt");
        v
    };
    assert_eq!(strip(first), strip(second));
}

#[actix_web::test]
async fn settings_put_replaces_and_reset_restores_defaults() {
    let (_pool, app) = spawn_app().await;

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .set_json(json!({
            "userId": "u1",
            "language": "Japanese",
            "pushNotifications": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["settings"]["language"], "Japanese");
    assert_eq!(body["settings"]["pushNotifications"], false);

    let req = test::TestRequest::get()
        .uri("/api/settings?userId=u1")
        .to_request();
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched["language"], "Japanese");

    let req = test::TestRequest::post()
        .uri("/api/settings/reset")
        .set_json(json!({ "userId": "u1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["settings"]["language"], "English (Default)");
    assert_eq!(body["settings"]["pushNotifications"], true);
}

#[actix_web::test]
async fn settings_put_defaults_the_user_id() {
    let (_pool, app) = spawn_app().await;

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .set_json(json!({ "taskDeadline": false }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["settings"]["userId"], "default-user");
    assert_eq!(body["settings"]["taskDeadline"], false);
}
