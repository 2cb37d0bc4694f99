use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::bill::{BillError, BillService, BillSubmission, HouseReference, LineInput, parse_bill_date};
use crate::domain::house::value_objects::{ValueObjectError, parse_decimal};

use super::list_bills::BillDto;

/// Raw bill fields. An omitted quantity or amount is derived from the house
/// rate when possible; `other` is always required.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitBillCommand {
  pub house_identifier: String,
  pub date: String,
  pub milk_qty: Option<String>,
  pub milk_amount: Option<String>,
  pub cow_milk_qty: Option<String>,
  pub cow_milk_amount: Option<String>,
  pub other: Option<String>,
}

fn optional_decimal(field: &str, raw: Option<&str>) -> Result<Option<Decimal>, ValueObjectError> {
  raw.map(|value| parse_decimal(field, value)).transpose()
}

pub struct SubmitBillUseCase {
  bill_service: Arc<BillService>,
}

impl SubmitBillUseCase {
  pub fn new(bill_service: Arc<BillService>) -> Self {
    Self { bill_service }
  }

  pub async fn execute(&self, command: SubmitBillCommand) -> Result<BillDto, BillError> {
    let house_identifier = HouseReference::new(command.house_identifier)?;
    let bill_date = parse_bill_date(&command.date)?;

    let milk = LineInput::new(
      optional_decimal("milkQty", command.milk_qty.as_deref())?,
      optional_decimal("milkAmount", command.milk_amount.as_deref())?,
    );
    let cow_milk = LineInput::new(
      optional_decimal("cowMilkQty", command.cow_milk_qty.as_deref())?,
      optional_decimal("cowMilkAmount", command.cow_milk_amount.as_deref())?,
    );
    let other_amount = match command.other.as_deref() {
      Some(value) => parse_decimal("other", value)?,
      None => return Err(ValueObjectError::Missing("other".to_string()).into()),
    };

    let bill = self
      .bill_service
      .submit_bill(BillSubmission {
        house_identifier,
        bill_date,
        milk,
        cow_milk,
        other_amount,
      })
      .await?;

    Ok(bill.into())
  }
}
