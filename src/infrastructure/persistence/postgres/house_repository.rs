use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::house::{
  House, HouseDetails, HouseError, HouseIdentifier, Rate, ports::HouseRepository,
};

const UNIQUE_VIOLATION: &str = "23505";
const HOUSE_NO_UNIQUE: &str = "house_info_house_no_key";

#[derive(Debug, FromRow)]
struct HouseRow {
  id: i64,
  house_no: String,
  milk_rate: Decimal,
  cow_milk_rate: Decimal,
  created_at: DateTime<Utc>,
}

impl TryFrom<HouseRow> for House {
  type Error = HouseError;

  fn try_from(row: HouseRow) -> Result<Self, Self::Error> {
    Ok(House {
      id: row.id,
      identifier: HouseIdentifier::new(row.house_no)?,
      milk_rate: Rate::new(row.milk_rate)?,
      cow_milk_rate: Rate::new(row.cow_milk_rate)?,
      created_at: row.created_at,
    })
  }
}

/// Turns a unique violation on `house_no` into a domain conflict.
fn map_write_error(e: sqlx::Error, identifier: &HouseIdentifier) -> HouseError {
  if let sqlx::Error::Database(db_err) = &e {
    if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
      && db_err.constraint() == Some(HOUSE_NO_UNIQUE)
    {
      return HouseError::IdentifierAlreadyExists(identifier.value().to_string());
    }
  }
  HouseError::Database(e)
}

pub struct PostgresHouseRepository {
  pool: PgPool,
}

impl PostgresHouseRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl HouseRepository for PostgresHouseRepository {
  async fn create(&self, details: HouseDetails) -> Result<House, HouseError> {
    let row = sqlx::query_as::<_, HouseRow>(
      r#"
            INSERT INTO house_info (house_no, milk_rate, cow_milk_rate)
            VALUES ($1, $2, $3)
            RETURNING id, house_no, milk_rate, cow_milk_rate, created_at
            "#,
    )
    .bind(details.identifier.value())
    .bind(details.milk_rate.value())
    .bind(details.cow_milk_rate.value())
    .fetch_one(&self.pool)
    .await
    .map_err(|e| map_write_error(e, &details.identifier))?;

    row.try_into()
  }

  async fn update(&self, id: i64, details: HouseDetails) -> Result<Option<House>, HouseError> {
    let row = sqlx::query_as::<_, HouseRow>(
      r#"
            UPDATE house_info
            SET house_no = $2, milk_rate = $3, cow_milk_rate = $4
            WHERE id = $1
            RETURNING id, house_no, milk_rate, cow_milk_rate, created_at
            "#,
    )
    .bind(id)
    .bind(details.identifier.value())
    .bind(details.milk_rate.value())
    .bind(details.cow_milk_rate.value())
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| map_write_error(e, &details.identifier))?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn delete(&self, id: i64) -> Result<Option<House>, HouseError> {
    let row = sqlx::query_as::<_, HouseRow>(
      r#"
            DELETE FROM house_info
            WHERE id = $1
            RETURNING id, house_no, milk_rate, cow_milk_rate, created_at
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<House>, HouseError> {
    let row = sqlx::query_as::<_, HouseRow>(
      r#"
            SELECT id, house_no, milk_rate, cow_milk_rate, created_at
            FROM house_info
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_by_identifier(
    &self,
    identifier: &HouseIdentifier,
  ) -> Result<Option<House>, HouseError> {
    let row = sqlx::query_as::<_, HouseRow>(
      r#"
            SELECT id, house_no, milk_rate, cow_milk_rate, created_at
            FROM house_info
            WHERE house_no = $1
            "#,
    )
    .bind(identifier.value())
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn list(&self) -> Result<Vec<House>, HouseError> {
    let rows = sqlx::query_as::<_, HouseRow>(
      r#"
            SELECT id, house_no, milk_rate, cow_milk_rate, created_at
            FROM house_info
            ORDER BY house_no ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
