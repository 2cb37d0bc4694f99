use serde::Deserialize;
use std::sync::Arc;

use crate::domain::house::{HouseError, HouseService};

use super::create_house::house_details;
use super::list_houses::HouseDto;

#[derive(Debug, Deserialize)]
pub struct UpdateHouseCommand {
  pub id: i64,
  pub identifier: String,
  pub milk_rate: Option<String>,
  pub cow_milk_rate: Option<String>,
}

pub struct UpdateHouseUseCase {
  house_service: Arc<HouseService>,
}

impl UpdateHouseUseCase {
  pub fn new(house_service: Arc<HouseService>) -> Self {
    Self { house_service }
  }

  pub async fn execute(&self, command: UpdateHouseCommand) -> Result<HouseDto, HouseError> {
    let details = house_details(
      command.identifier,
      command.milk_rate.as_deref(),
      command.cow_milk_rate.as_deref(),
    )?;

    let house = self.house_service.update_house(command.id, details).await?;
    Ok(house.into())
  }
}
