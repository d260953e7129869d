use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobboard::{
  adapters::http::{
    ApiDependencies, AuthMiddleware, Repositories, RequestIdMiddleware, configure_api_routes,
  },
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresApplicationRepository, PostgresCompanyRepository, PostgresJobRepository,
      PostgresSessionRepository, PostgresUserRepository,
    },
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jobboard=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting job board API");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  tracing::info!(
    "Connecting to database (max {} connections)",
    config.database.max_connections
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  let deps = ApiDependencies::new(Repositories {
    users: Arc::new(PostgresUserRepository::new(db_pool.clone())),
    sessions: Arc::new(PostgresSessionRepository::new(db_pool.clone())),
    companies: Arc::new(PostgresCompanyRepository::new(db_pool.clone())),
    jobs: Arc::new(PostgresJobRepository::new(db_pool.clone())),
    applications: Arc::new(PostgresApplicationRepository::new(db_pool)),
  });

  let base_path = config.api.base_path.clone();
  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!(
    "Starting HTTP server on {}:{} (API under {})",
    server_host,
    server_port,
    base_path
  );

  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      // Every API route requires a session
      .service(
        web::scope(&base_path)
          .wrap(AuthMiddleware::new(deps.get_current_user.clone()))
          .configure(|cfg| configure_api_routes(cfg, &deps)),
      )
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
