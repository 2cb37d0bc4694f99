use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest magnitude a NUMERIC(10,2) column can hold.
pub const MAX_NUMERIC: Decimal = dec!(99999999.99);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid house identifier: {0}")]
  InvalidIdentifier(String),
  #[error("Invalid rate: {0}")]
  InvalidRate(String),
  #[error("Invalid number for {field}: {reason}")]
  InvalidNumber { field: String, reason: String },
  #[error("Invalid date: {0}")]
  InvalidDate(String),
  #[error("{0} is required")]
  Missing(String),
}

/// Rounds to cents, midpoint away from zero. The result always carries
/// exactly two fractional digits.
pub fn round2(value: Decimal) -> Decimal {
  let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
  rounded.rescale(2);
  rounded
}

/// Parses a user supplied decimal.
///
/// Accepts plain (`"12.5"`) and scientific (`"1.25e1"`) notation. `NaN`,
/// infinities and anything outside the NUMERIC(10,2) range are rejected, so
/// every value that leaves this function is finite and storable.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, ValueObjectError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(ValueObjectError::Missing(field.to_string()));
  }

  let value = Decimal::from_str(trimmed)
    .or_else(|_| Decimal::from_scientific(trimmed))
    .map_err(|_| ValueObjectError::InvalidNumber {
      field: field.to_string(),
      reason: format!("'{}' is not a valid number", trimmed),
    })?;

  if value.abs() > MAX_NUMERIC {
    return Err(ValueObjectError::InvalidNumber {
      field: field.to_string(),
      reason: format!("must not exceed {} in magnitude", MAX_NUMERIC),
    });
  }

  Ok(value)
}

// House Identifier - human assigned code such as "A-101"
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HouseIdentifier(String);

impl HouseIdentifier {
  pub const MAX_LEN: usize = 50;

  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidIdentifier(
        "House identifier cannot be empty".to_string(),
      ));
    }
    if trimmed.chars().count() > Self::MAX_LEN {
      return Err(ValueObjectError::InvalidIdentifier(format!(
        "House identifier cannot exceed {} characters",
        Self::MAX_LEN
      )));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for HouseIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Rate - currency units per litre, stored with two decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value.is_sign_negative() && !value.is_zero() {
      return Err(ValueObjectError::InvalidRate(
        "Rate cannot be negative".to_string(),
      ));
    }
    if value > MAX_NUMERIC {
      return Err(ValueObjectError::InvalidRate(format!(
        "Rate cannot exceed {}",
        MAX_NUMERIC
      )));
    }
    Ok(Self(round2(value)))
  }

  pub fn parse(field: &str, raw: &str) -> Result<Self, ValueObjectError> {
    let value = parse_decimal(field, raw)?;
    Self::new(value).map_err(|err| match err {
      ValueObjectError::InvalidRate(reason) => ValueObjectError::InvalidRate(format!(
        "{}: {}",
        field, reason
      )),
      other => other,
    })
  }

  pub fn value(&self) -> Decimal {
    self.0
  }

  pub fn is_zero(&self) -> bool {
    self.0.is_zero()
  }
}

impl fmt::Display for Rate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.2}", self.0)
  }
}
