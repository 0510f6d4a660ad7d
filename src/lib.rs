pub mod application;
pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};
pub use handlers::AppService;

use application::store_service::StoreService;
use infrastructure::store_repo::DieselStoreRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type StartupError = Box<dyn std::error::Error + Send + Sync>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), StartupError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Open the database, bring its schema up to date and seed an empty catalog.
pub fn init_store(database_url: &str) -> Result<AppService, StartupError> {
    let pool = create_pool(database_url)?;
    run_migrations(&pool)?;

    let service = StoreService::new(DieselStoreRepository::new(pool));
    let seeded = service.seed_catalog()?;
    if seeded > 0 {
        log::info!("Seeded catalog with {} products", seeded);
    }
    Ok(service)
}

/// Register the REST API routes.
///
/// The API accepts cross-origin requests from any page, preflights included.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .route("/products", web::get().to(handlers::products::list_products))
            .route("/orders", web::post().to(handlers::orders::place_order)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: AppService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    let openapi = openapi::ApiDoc::openapi();
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
