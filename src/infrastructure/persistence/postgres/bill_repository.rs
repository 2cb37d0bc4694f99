use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::bill::{Bill, BillError, HouseReference, NewBill, ports::BillRepository};
use crate::domain::house::Rate;

#[derive(Debug, FromRow)]
struct BillRow {
  id: i64,
  house_number: String,
  bill_date: NaiveDate,
  milk_qty: Decimal,
  milk_amount: Decimal,
  cow_milk: Decimal,
  cow_milk_amount: Decimal,
  other_amount: Decimal,
  milk_rate: Option<Decimal>,
  cow_milk_rate: Option<Decimal>,
  created_at: DateTime<Utc>,
}

impl TryFrom<BillRow> for Bill {
  type Error = BillError;

  fn try_from(row: BillRow) -> Result<Self, Self::Error> {
    Ok(Bill {
      id: row.id,
      house_identifier: HouseReference::new(row.house_number)?,
      bill_date: row.bill_date,
      milk_qty: row.milk_qty,
      milk_amount: row.milk_amount,
      cow_milk_qty: row.cow_milk,
      cow_milk_amount: row.cow_milk_amount,
      other_amount: row.other_amount,
      milk_rate: row.milk_rate.map(Rate::new).transpose()?,
      cow_milk_rate: row.cow_milk_rate.map(Rate::new).transpose()?,
      created_at: row.created_at,
    })
  }
}

pub struct PostgresBillRepository {
  pool: PgPool,
}

impl PostgresBillRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl BillRepository for PostgresBillRepository {
  async fn append(&self, bill: NewBill) -> Result<Bill, BillError> {
    let row = sqlx::query_as::<_, BillRow>(
      r#"
            INSERT INTO dairy_bills (
                house_number, bill_date, milk_qty, milk_amount,
                cow_milk, cow_milk_amount, other_amount, milk_rate, cow_milk_rate
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, house_number, bill_date, milk_qty, milk_amount,
                      cow_milk, cow_milk_amount, other_amount,
                      milk_rate, cow_milk_rate, created_at
            "#,
    )
    .bind(bill.house_identifier.value())
    .bind(bill.bill_date)
    .bind(bill.milk_qty)
    .bind(bill.milk_amount)
    .bind(bill.cow_milk_qty)
    .bind(bill.cow_milk_amount)
    .bind(bill.other_amount)
    .bind(bill.milk_rate.map(|r| r.value()))
    .bind(bill.cow_milk_rate.map(|r| r.value()))
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn list_all(&self) -> Result<Vec<Bill>, BillError> {
    let rows = sqlx::query_as::<_, BillRow>(
      r#"
            SELECT id, house_number, bill_date, milk_qty, milk_amount,
                   cow_milk, cow_milk_amount, other_amount,
                   milk_rate, cow_milk_rate, created_at
            FROM dairy_bills
            ORDER BY created_at DESC, id DESC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn list_by_house(&self, identifier: &HouseReference) -> Result<Vec<Bill>, BillError> {
    let rows = sqlx::query_as::<_, BillRow>(
      r#"
            SELECT id, house_number, bill_date, milk_qty, milk_amount,
                   cow_milk, cow_milk_amount, other_amount,
                   milk_rate, cow_milk_rate, created_at
            FROM dairy_bills
            WHERE house_number = $1
            ORDER BY created_at DESC, id DESC
            "#,
    )
    .bind(identifier.value())
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
