//! Quantity/amount arithmetic for bills.
//!
//! Both directions round to cents, midpoint away from zero. Inputs are
//! expected to come through `parse_decimal`/`Rate`, which bound them to the
//! NUMERIC(10,2) range, so the products here cannot overflow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::house::value_objects::{Rate, round2};

/// `round2(quantity * rate)`
pub fn derive_amount(quantity: Decimal, rate: Rate) -> Decimal {
  round2(quantity * rate.value())
}

/// `round2(amount / rate)`, or `None` for a zero rate.
pub fn derive_quantity(amount: Decimal, rate: Rate) -> Option<Decimal> {
  if rate.is_zero() {
    return None;
  }
  Some(round2(amount / rate.value()))
}

/// The bill field an operator last edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillField {
  MilkQty,
  MilkAmount,
  CowMilkQty,
  CowMilkAmount,
}

impl BillField {
  pub fn is_quantity(&self) -> bool {
    matches!(self, BillField::MilkQty | BillField::CowMilkQty)
  }

  pub fn is_milk(&self) -> bool {
    matches!(self, BillField::MilkQty | BillField::MilkAmount)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      BillField::MilkQty => "milkQty",
      BillField::MilkAmount => "milkAmount",
      BillField::CowMilkQty => "cowMilkQty",
      BillField::CowMilkAmount => "cowMilkAmount",
    }
  }
}

/// Result of recalculating one product line from the edited field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recalculation {
  pub field: BillField,
  pub rate: Rate,
  pub quantity: Option<Decimal>,
  pub amount: Option<Decimal>,
}

/// Derives the counterpart of `edited` from `value`.
///
/// Editing a quantity always yields an amount. Editing an amount yields a
/// quantity only when the rate is non-zero; otherwise the quantity stays
/// blank.
pub fn recalculate(edited: BillField, value: Decimal, rate: Rate) -> Recalculation {
  if edited.is_quantity() {
    Recalculation {
      field: edited,
      rate,
      quantity: Some(value),
      amount: Some(derive_amount(value, rate)),
    }
  } else {
    Recalculation {
      field: edited,
      rate,
      quantity: derive_quantity(value, rate),
      amount: Some(value),
    }
  }
}
