use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt;

use super::calculator::{derive_amount, derive_quantity};
use crate::domain::house::value_objects::{HouseIdentifier, Rate, ValueObjectError};

// House Reference - free-text house label captured on a bill. It need not
// match a registered house.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseReference(String);

impl HouseReference {
  pub const MAX_LEN: usize = 255;

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

  /// The registry identifier this label could name, if it is a valid one.
  pub fn registry_identifier(&self) -> Option<HouseIdentifier> {
    HouseIdentifier::new(self.0.clone()).ok()
  }
}

impl fmt::Display for HouseReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

pub const BILL_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_bill_date(raw: &str) -> Result<NaiveDate, ValueObjectError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(ValueObjectError::Missing("date".to_string()));
  }
  NaiveDate::parse_from_str(trimmed, BILL_DATE_FORMAT).map_err(|_| {
    ValueObjectError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", trimmed))
  })
}

/// Whether the ledger accepts negative quantities and amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerPolicy {
  pub allow_negative_values: bool,
}

impl LedgerPolicy {
  pub fn new(allow_negative_values: bool) -> Self {
    Self {
      allow_negative_values,
    }
  }

  pub fn check(&self, field: &str, value: Decimal) -> Result<Decimal, ValueObjectError> {
    if !self.allow_negative_values && value.is_sign_negative() && !value.is_zero() {
      return Err(ValueObjectError::InvalidNumber {
        field: field.to_string(),
        reason: "cannot be negative".to_string(),
      });
    }
    Ok(value)
  }
}

// Quantity/amount pair for one product as entered by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineInput {
  pub quantity: Option<Decimal>,
  pub amount: Option<Decimal>,
}

impl LineInput {
  pub fn new(quantity: Option<Decimal>, amount: Option<Decimal>) -> Self {
    Self { quantity, amount }
  }

  /// Fills in whichever side is missing from the house rate.
  ///
  /// Figures given by the caller are never overwritten. A side that is
  /// absent and cannot be derived (no rate, or an amount against a zero
  /// rate) is reported as missing.
  pub fn complete(
    self,
    quantity_field: &str,
    amount_field: &str,
    rate: Option<Rate>,
  ) -> Result<(Decimal, Decimal), ValueObjectError> {
    let missing = |field: &str| ValueObjectError::Missing(field.to_string());

    match (self.quantity, self.amount, rate) {
      (Some(q), Some(a), _) => Ok((q, a)),
      (Some(q), None, Some(r)) => Ok((q, derive_amount(q, r))),
      (None, Some(a), Some(r)) => derive_quantity(a, r)
        .map(|q| (q, a))
        .ok_or_else(|| missing(quantity_field)),
      (None, _, _) => Err(missing(quantity_field)),
      (Some(_), None, None) => Err(missing(amount_field)),
    }
  }
}
