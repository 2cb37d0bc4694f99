use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value_objects::HouseReference;
use crate::domain::house::value_objects::Rate;

// Bill - one dated delivery record for one house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
  pub id: i64,
  pub house_identifier: HouseReference,
  pub bill_date: NaiveDate,
  pub milk_qty: Decimal,
  pub milk_amount: Decimal,
  pub cow_milk_qty: Decimal,
  pub cow_milk_amount: Decimal,
  pub other_amount: Decimal,
  /// Rates of the house at submission time, when it was registered.
  pub milk_rate: Option<Rate>,
  pub cow_milk_rate: Option<Rate>,
  pub created_at: DateTime<Utc>,
}

impl Bill {
  pub fn total(&self) -> Decimal {
    self.milk_amount + self.cow_milk_amount + self.other_amount
  }
}

/// A bill ready to be appended. Amounts are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBill {
  pub house_identifier: HouseReference,
  pub bill_date: NaiveDate,
  pub milk_qty: Decimal,
  pub milk_amount: Decimal,
  pub cow_milk_qty: Decimal,
  pub cow_milk_amount: Decimal,
  pub other_amount: Decimal,
  pub milk_rate: Option<Rate>,
  pub cow_milk_rate: Option<Rate>,
}

impl NewBill {
  pub fn into_bill(self, id: i64, created_at: DateTime<Utc>) -> Bill {
    Bill {
      id,
      house_identifier: self.house_identifier,
      bill_date: self.bill_date,
      milk_qty: self.milk_qty,
      milk_amount: self.milk_amount,
      cow_milk_qty: self.cow_milk_qty,
      cow_milk_amount: self.cow_milk_amount,
      other_amount: self.other_amount,
      milk_rate: self.milk_rate,
      cow_milk_rate: self.cow_milk_rate,
      created_at,
    }
  }
}
