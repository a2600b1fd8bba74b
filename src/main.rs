use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use scholarpass::config::Settings;
use scholarpass::core::Matcher;
use scholarpass::routes::{self, AppState};
use scholarpass::services::AccountStore;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the file can pick the log level
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    // Initialize logging, LOG_LEVEL / LOG_FORMAT win over the config file
    let logging = settings.logging.overridden(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.level))
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting ScholarPass recommendation service...");
    info!("Configuration loaded successfully");

    // Initialize account store
    let max_connections = settings.database.max_connections.unwrap_or(5);

    let accounts = AccountStore::new(&settings.database.url, max_connections)
        .await
        .map_err(|e| {
            error!("Failed to open account database {}: {}", settings.database.url, e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    info!("Account store initialized (max: {} connections)", max_connections);

    let matcher = Matcher::new(settings.matching.max_results);

    info!(
        "Matcher initialized with {} scholarships, showing up to {}",
        matcher.catalog().len(),
        matcher.max_results()
    );

    // Build application state
    let app_state = AppState {
        accounts: Arc::new(accounts),
        matcher,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::form_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
