use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::house::{House, HouseError, HouseService};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDto {
  pub id: i64,
  pub identifier: String,
  pub milk_rate: Decimal,
  pub cow_milk_rate: Decimal,
  pub created_at: DateTime<Utc>,
}

impl From<House> for HouseDto {
  fn from(house: House) -> Self {
    Self {
      id: house.id,
      identifier: house.identifier.into_inner(),
      milk_rate: house.milk_rate.value(),
      cow_milk_rate: house.cow_milk_rate.value(),
      created_at: house.created_at,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListHousesResponse {
  pub houses: Vec<HouseDto>,
}

pub struct ListHousesUseCase {
  house_service: Arc<HouseService>,
}

impl ListHousesUseCase {
  pub fn new(house_service: Arc<HouseService>) -> Self {
    Self { house_service }
  }

  pub async fn execute(&self) -> Result<ListHousesResponse, HouseError> {
    let houses = self.house_service.list_houses().await?;

    Ok(ListHousesResponse {
      houses: houses.into_iter().map(HouseDto::from).collect(),
    })
  }
}
