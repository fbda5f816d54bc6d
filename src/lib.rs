use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::course::{add_course, remove_course, save_course, show_course, show_courses};
use crate::routes::enrollment::{
    add_enrollment, remove_enrollment, save_enrollment, show_enrollment, show_enrollments,
};
use crate::routes::learner::{
    add_learner, remove_learner, save_learner, show_learner, show_learners,
};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(show_courses)
                    .service(show_course)
                    .service(add_course)
                    .service(save_course)
                    .service(remove_course)
                    .service(show_learners)
                    .service(show_learner)
                    .service(add_learner)
                    .service(save_learner)
                    .service(remove_learner)
                    .service(show_enrollments)
                    .service(show_enrollment)
                    .service(add_enrollment)
                    .service(save_enrollment)
                    .service(remove_enrollment),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
