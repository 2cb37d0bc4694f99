use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::bill::{BillError, BillField, BillService};
use crate::domain::house::value_objects::{HouseIdentifier, parse_decimal};

#[derive(Debug, Deserialize)]
pub struct QuoteBillCommand {
  pub house_identifier: String,
  pub field: BillField,
  pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBillResponse {
  pub house_identifier: String,
  pub field: BillField,
  pub rate: Decimal,
  /// Absent when an amount was given against a zero rate
  pub quantity: Option<Decimal>,
  pub amount: Option<Decimal>,
}

/// Previews the amount for a quantity (or the quantity for an amount)
/// without writing anything.
pub struct QuoteBillUseCase {
  bill_service: Arc<BillService>,
}

impl QuoteBillUseCase {
  pub fn new(bill_service: Arc<BillService>) -> Self {
    Self { bill_service }
  }

  pub async fn execute(&self, command: QuoteBillCommand) -> Result<QuoteBillResponse, BillError> {
    let identifier = HouseIdentifier::new(command.house_identifier)?;
    let value = parse_decimal(command.field.as_str(), &command.value)?;

    let quote = self
      .bill_service
      .quote(&identifier, command.field, value)
      .await?;

    Ok(QuoteBillResponse {
      house_identifier: identifier.into_inner(),
      field: quote.field,
      rate: quote.rate.value(),
      quantity: quote.quantity,
      amount: quote.amount,
    })
  }
}
