use sqlx::PgPool;
use sqlx::migrate::MigrateError;

/// Creates `house_info` and `dairy_bills`.
///
/// Must complete before the HTTP listener is bound. sqlx records applied
/// versions, so running it again against an initialised database is a no-op.
/// Tables that exist without a recorded migration make it fail instead of
/// being adopted with whatever columns they have.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations").run(pool).await?;
  tracing::info!("Database migrations completed");
  Ok(())
}
