use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

use taskdash_backend::{config, db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::ServerConfig::from_env();
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open task database");

    log::info!("Server running at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .route(
                "/",
                web::get().to(|| async { HttpResponse::Ok().body("Task Management API") }),
            )
            .configure(routes::routes::tasks_configure)
            .configure(routes::routes::dashboard_configure)
            .configure(routes::routes::settings_configure)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
