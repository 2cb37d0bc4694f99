use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dairybill::{
  adapters::http::{
    RequestIdMiddleware, configure_bill_routes, configure_extractors, configure_health_route,
    configure_house_routes,
  },
  application::bill::{ListBillsUseCase, QuoteBillUseCase, SubmitBillUseCase},
  application::house::{
    CreateHouseUseCase, DeleteHouseUseCase, FindNeighboursUseCase, ListHousesUseCase,
    UpdateHouseUseCase,
  },
  domain::bill::BillService,
  domain::house::HouseService,
  infrastructure::{
    config::Config,
    persistence::postgres::{PostgresBillRepository, PostgresHouseRepository, run_migrations},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dairybill=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting dairy bill service");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  let database_target = config.database.display_target();
  tracing::info!("Connecting to database: {}", database_target);

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
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          database_target
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Schema must exist before the first request is accepted
  run_migrations(&db_pool).await.map_err(|e| {
    tracing::error!("Failed to run database migrations: {}", e);
    std::io::Error::other(format!("Migration error: {}", e))
  })?;

  // Repositories
  let house_repo = Arc::new(PostgresHouseRepository::new(db_pool.clone()));
  let bill_repo = Arc::new(PostgresBillRepository::new(db_pool));

  // Services
  let policy = config.ledger.policy();
  if policy.allow_negative_values {
    tracing::warn!("Negative bill values are accepted");
  }
  let house_service = Arc::new(HouseService::new(house_repo.clone()));
  let bill_service = Arc::new(BillService::new(bill_repo, house_repo, policy));

  // Use cases
  let list_houses_use_case = Arc::new(ListHousesUseCase::new(house_service.clone()));
  let create_house_use_case = Arc::new(CreateHouseUseCase::new(house_service.clone()));
  let update_house_use_case = Arc::new(UpdateHouseUseCase::new(house_service.clone()));
  let delete_house_use_case = Arc::new(DeleteHouseUseCase::new(house_service.clone()));
  let neighbours_use_case = Arc::new(FindNeighboursUseCase::new(house_service));

  let list_bills_use_case = Arc::new(ListBillsUseCase::new(bill_service.clone()));
  let submit_bill_use_case = Arc::new(SubmitBillUseCase::new(bill_service.clone()));
  let quote_bill_use_case = Arc::new(QuoteBillUseCase::new(bill_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(configure_extractors)
      .configure(|cfg| {
        configure_house_routes(
          cfg,
          list_houses_use_case.clone(),
          create_house_use_case.clone(),
          update_house_use_case.clone(),
          delete_house_use_case.clone(),
          neighbours_use_case.clone(),
        )
      })
      .configure(|cfg| {
        configure_bill_routes(
          cfg,
          list_bills_use_case.clone(),
          submit_bill_use_case.clone(),
          quote_bill_use_case.clone(),
        )
      })
      .configure(configure_health_route)
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
