use super::value_objects::ValueObjectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HouseError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("House not found: {0}")]
  NotFound(i64),

  #[error("House '{0}' not found")]
  IdentifierNotFound(String),

  #[error("House '{0}' already exists")]
  IdentifierAlreadyExists(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
