pub mod application;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::cart_service::CartService;
pub use auth::Authenticator;
pub use config::Settings;
pub use db::{create_pool, DbPool};
pub use infrastructure::cart_repo::DieselCartRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        log::info!("applied migration {}", version);
    }
    Ok(())
}

/// Build and return an actix-web `Server` bound to `settings.host:settings.port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(pool: DbPool, settings: &Settings) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(CartService::new(
        Arc::new(DieselCartRepository::new(pool)),
        settings.add_policy,
    ));
    let authenticator = web::Data::new(Authenticator::new(&settings.jwt_secret));
    log::info!("add-to-cart policy: {:?}", service.policy());

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(authenticator.clone())
            .wrap(Logger::default())
            .configure(handlers::cart::routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
    })
    .bind((settings.host.clone(), settings.port))?
    .run())
}
