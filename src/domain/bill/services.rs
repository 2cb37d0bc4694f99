use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::house::ports::HouseRepository;
use crate::domain::house::value_objects::{HouseIdentifier, MAX_NUMERIC, ValueObjectError};

use super::calculator::{BillField, Recalculation, recalculate};
use super::entities::{Bill, NewBill};
use super::errors::BillError;
use super::ports::BillRepository;
use super::value_objects::{HouseReference, LedgerPolicy, LineInput};

/// Bill submission data, before rates are applied
#[derive(Debug, Clone)]
pub struct BillSubmission {
  pub house_identifier: HouseReference,
  pub bill_date: NaiveDate,
  pub milk: LineInput,
  pub cow_milk: LineInput,
  pub other_amount: Decimal,
}

/// Derived amounts can outgrow the NUMERIC(10,2) columns even when every
/// input fits.
fn storable(field: &str, value: Decimal) -> Result<(), ValueObjectError> {
  if value.abs() > MAX_NUMERIC {
    return Err(ValueObjectError::InvalidNumber {
      field: field.to_string(),
      reason: format!("derived value {} exceeds {}", value, MAX_NUMERIC),
    });
  }
  Ok(())
}

pub struct BillService {
  bill_repo: Arc<dyn BillRepository>,
  house_repo: Arc<dyn HouseRepository>,
  policy: LedgerPolicy,
}

impl BillService {
  pub fn new(
    bill_repo: Arc<dyn BillRepository>,
    house_repo: Arc<dyn HouseRepository>,
    policy: LedgerPolicy,
  ) -> Self {
    Self {
      bill_repo,
      house_repo,
      policy,
    }
  }

  /// Appends a bill to the ledger.
  ///
  /// The house does not have to be registered. When it is, its current rates
  /// are snapshotted onto the bill and used to fill in any missing quantity
  /// or amount. Anything still missing after that is a validation error.
  pub async fn submit_bill(&self, submission: BillSubmission) -> Result<Bill, BillError> {
    self.check_line("milkQty", "milkAmount", &submission.milk)?;
    self.check_line("cowMilkQty", "cowMilkAmount", &submission.cow_milk)?;
    let other_amount = self.policy.check("other", submission.other_amount)?;

    let house = match submission.house_identifier.registry_identifier() {
      Some(identifier) => self.house_repo.find_by_identifier(&identifier).await?,
      None => None,
    };

    if house.is_none() {
      tracing::debug!(
        identifier = %submission.house_identifier,
        "Bill submitted for unregistered house"
      );
    }

    let milk_rate = house.as_ref().map(|h| h.milk_rate);
    let cow_milk_rate = house.as_ref().map(|h| h.cow_milk_rate);
    let (milk_qty, milk_amount) = submission
      .milk
      .complete("milkQty", "milkAmount", milk_rate)?;
    let (cow_milk_qty, cow_milk_amount) = submission
      .cow_milk
      .complete("cowMilkQty", "cowMilkAmount", cow_milk_rate)?;
    storable("milkQty", milk_qty)?;
    storable("milkAmount", milk_amount)?;
    storable("cowMilkQty", cow_milk_qty)?;
    storable("cowMilkAmount", cow_milk_amount)?;

    let bill = self
      .bill_repo
      .append(NewBill {
        house_identifier: submission.house_identifier,
        bill_date: submission.bill_date,
        milk_qty,
        milk_amount,
        cow_milk_qty,
        cow_milk_amount,
        other_amount,
        milk_rate,
        cow_milk_rate,
      })
      .await?;

    tracing::info!(
      bill_id = bill.id,
      identifier = %bill.house_identifier,
      date = %bill.bill_date,
      "Bill appended"
    );
    Ok(bill)
  }

  pub async fn list_bills(
    &self,
    house_identifier: Option<&HouseReference>,
  ) -> Result<Vec<Bill>, BillError> {
    match house_identifier {
      Some(identifier) => self.bill_repo.list_by_house(identifier).await,
      None => self.bill_repo.list_all().await,
    }
  }

  /// Works out the counterpart of an edited field from the house's rate.
  pub async fn quote(
    &self,
    house_identifier: &HouseIdentifier,
    field: BillField,
    value: Decimal,
  ) -> Result<Recalculation, BillError> {
    let value = self.policy.check(field.as_str(), value)?;

    let house = self
      .house_repo
      .find_by_identifier(house_identifier)
      .await?
      .ok_or_else(|| BillError::HouseNotFound(house_identifier.value().to_string()))?;

    let rate = if field.is_milk() {
      house.milk_rate
    } else {
      house.cow_milk_rate
    };

    Ok(recalculate(field, value, rate))
  }

  fn check_line(&self, qty_field: &str, amount_field: &str, line: &LineInput) -> Result<(), BillError> {
    if let Some(q) = line.quantity {
      self.policy.check(qty_field, q)?;
    }
    if let Some(a) = line.amount {
      self.policy.check(amount_field, a)?;
    }
    Ok(())
  }
}
