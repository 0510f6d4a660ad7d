use dotenvy::dotenv;
use storefront::config::Config;
use storefront::{build_server, init_store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let service = init_store(&config.database_url).map_err(std::io::Error::other)?;
    log::info!("Using database {}", config.database_url);

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(service, &config.host, config.port)?.await
}
