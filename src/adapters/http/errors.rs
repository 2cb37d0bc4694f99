use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::bill::BillError;
use crate::domain::house::HouseError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Identifier already taken (409 Conflict)
  Conflict(String),

  /// Missing record (404 Not Found)
  NotFound(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let message = match self {
      ApiError::Validation(msg) | ApiError::Conflict(msg) | ApiError::NotFound(msg) => msg.clone(),
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        "An internal server error occurred".to_string()
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse { error: message })
  }
}

impl From<HouseError> for ApiError {
  fn from(error: HouseError) -> Self {
    match error {
      HouseError::Validation(err) => ApiError::Validation(err.to_string()),
      HouseError::NotFound(_) | HouseError::IdentifierNotFound(_) => {
        ApiError::NotFound(error.to_string())
      }
      HouseError::IdentifierAlreadyExists(_) => ApiError::Conflict(error.to_string()),
      HouseError::Database(err) => ApiError::Internal(format!("Database error: {}", err)),
    }
  }
}

impl From<BillError> for ApiError {
  fn from(error: BillError) -> Self {
    match error {
      BillError::Validation(err) => ApiError::Validation(err.to_string()),
      BillError::HouseNotFound(_) => ApiError::NotFound(error.to_string()),
      BillError::House(err) => ApiError::from(err),
      BillError::Database(err) => ApiError::Internal(format!("Database error: {}", err)),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}
