use thiserror::Error;

use crate::domain::house::errors::HouseError;
use crate::domain::house::value_objects::ValueObjectError;

#[derive(Debug, Error)]
pub enum BillError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("House '{0}' not found")]
  HouseNotFound(String),

  #[error("House lookup failed: {0}")]
  House(#[from] HouseError),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
