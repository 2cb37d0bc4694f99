use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::bill::{Bill, BillError, BillService, HouseReference};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
  pub id: i64,
  pub house_identifier: String,
  pub date: NaiveDate,
  pub milk_qty: Decimal,
  pub milk_amount: Decimal,
  pub cow_milk_qty: Decimal,
  pub cow_milk_amount: Decimal,
  pub other: Decimal,
  pub total: Decimal,
  pub milk_rate: Option<Decimal>,
  pub cow_milk_rate: Option<Decimal>,
  pub created_at: DateTime<Utc>,
}

impl From<Bill> for BillDto {
  fn from(bill: Bill) -> Self {
    Self {
      id: bill.id,
      total: bill.total(),
      house_identifier: bill.house_identifier.into_inner(),
      date: bill.bill_date,
      milk_qty: bill.milk_qty,
      milk_amount: bill.milk_amount,
      cow_milk_qty: bill.cow_milk_qty,
      cow_milk_amount: bill.cow_milk_amount,
      other: bill.other_amount,
      milk_rate: bill.milk_rate.map(|r| r.value()),
      cow_milk_rate: bill.cow_milk_rate.map(|r| r.value()),
      created_at: bill.created_at,
    }
  }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBillsCommand {
  /// Restrict to one house; all bills when absent
  pub house_identifier: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListBillsResponse {
  pub bills: Vec<BillDto>,
}

pub struct ListBillsUseCase {
  bill_service: Arc<BillService>,
}

impl ListBillsUseCase {
  pub fn new(bill_service: Arc<BillService>) -> Self {
    Self { bill_service }
  }

  pub async fn execute(&self, command: ListBillsCommand) -> Result<ListBillsResponse, BillError> {
    let identifier = command
      .house_identifier
      .map(HouseReference::new)
      .transpose()?;

    let bills = self.bill_service.list_bills(identifier.as_ref()).await?;

    Ok(ListBillsResponse {
      bills: bills.into_iter().map(BillDto::from).collect(),
    })
  }
}
