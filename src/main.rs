use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use lume_users::config::Settings;
use lume_users::routes::{self, AppState};
use lume_users::services::{demo_profiles, DirectoryService, InMemoryProfileStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }

    info!("Starting Lume user service...");
    info!("Configuration loaded successfully");

    // Initialize profile store
    let store = if settings.directory.seed_demo_profiles {
        let profiles = demo_profiles();
        info!("Seeding {} demo profiles", profiles.len());
        InMemoryProfileStore::with_profiles(profiles)
    } else {
        InMemoryProfileStore::new()
    };

    let directory = DirectoryService::new(Arc::new(store), settings.pagination);

    match directory.profile_count() {
        Ok(count) => info!("Profile store initialized ({} profiles)", count),
        Err(e) => error!("Profile store unavailable at startup: {}", e),
    }

    let app_state = AppState { directory };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Health check: http://{}:{}/health", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    // actix handles SIGINT/SIGTERM with a graceful shutdown
    server.bind((host, port))?.run().await?;

    info!("Server stopped");
    Ok(())
}
