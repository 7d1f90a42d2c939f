//! K3 Server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, http::header, web};
use sea_orm_migration::MigratorTrait;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use k3_server_lib::api;
use k3_server_lib::config::{Config, UPLOADS_URL_PREFIX};
use k3_server_lib::db::DbPool;
use k3_server_lib::middleware;
use k3_server_lib::migration::Migrator;
use k3_server_lib::services;

/// Perform health check (for Docker healthcheck).
async fn health_check() -> bool {
    // Simple check - just verify we can load config
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        if health_check().await {
            std::process::exit(0);
        } else {
            std::process::exit(1);
        }
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, PG_PASSWORD must not match the development default");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  K3 Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
        info!("Using development defaults for the PostgreSQL connection");
    }

    // Create the upload directory before the first multipart request hits
    tokio::fs::create_dir_all(config.training_upload_dir())
        .await
        .expect("Failed to create upload directory");

    // Connect the single shared pool used by every domain
    let pool = DbPool::connect(&config)
        .await
        .expect("Failed to connect to database");
    info!(
        "Database connection established (pool size: {})",
        config.max_db_connections
    );

    // Run migrations
    Migrator::up(pool.connection(), None)
        .await
        .expect("Failed to run migrations");
    info!("Database migrations complete");

    // Prepare shared state
    let bind_address = config.bind_address();
    let upload_dir = config.upload_dir.clone();
    let is_development = config.is_development();

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    // Start HTTP server
    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if is_development {
            // Permissive CORS for the Vite/CRA dev servers
            Cors::default()
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://localhost:5173")
                .allowed_origin("http://127.0.0.1:3000")
                .allowed_origin("http://127.0.0.1:5173")
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                ])
                .max_age(3600)
        } else {
            // Restrictive CORS for production (same-origin only)
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                ])
                .max_age(3600)
        };

        App::new()
            // Add CORS middleware (must be before other middleware)
            .wrap(cors)
            // Add request logging middleware
            .wrap(middleware::RequestLogger)
            // Add shared state
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            // Signature payloads arrive base64-encoded inside JSON bodies
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024))
            // Configure API routes
            .service(
                web::scope("/api")
                    .configure(api::configure_system_routes)
                    .configure(api::configure_auth_routes)
                    .configure(api::configure_employee_routes)
                    .configure(api::configure_training_routes)
                    .configure(services::configure_upload_routes)
                    .configure(api::configure_attendance_routes)
                    .configure(api::configure_health_routes)
                    .configure(api::configure_safety_routes)
                    .configure(api::configure_activity_routes),
            )
            // Serve uploaded documentation images back as static files
            .service(Files::new(UPLOADS_URL_PREFIX, upload_dir.clone()))
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
    });

    // Set worker count
    server
        .workers(worker_count)
        .bind(&bind_address)?
        .run()
        .await
}
