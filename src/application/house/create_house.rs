use serde::Deserialize;
use std::sync::Arc;

use crate::domain::house::{HouseDetails, HouseError, HouseIdentifier, HouseService, Rate};

use super::list_houses::HouseDto;

#[derive(Debug, Deserialize)]
pub struct CreateHouseCommand {
  pub identifier: String,
  pub milk_rate: Option<String>,
  pub cow_milk_rate: Option<String>,
}

/// Validates raw house fields into `HouseDetails`.
pub(crate) fn house_details(
  identifier: String,
  milk_rate: Option<&str>,
  cow_milk_rate: Option<&str>,
) -> Result<HouseDetails, HouseError> {
  let identifier = HouseIdentifier::new(identifier)?;
  let milk_rate = Rate::parse("milkRate", milk_rate.unwrap_or_default())?;
  let cow_milk_rate = Rate::parse("cowMilkRate", cow_milk_rate.unwrap_or_default())?;
  Ok(HouseDetails::new(identifier, milk_rate, cow_milk_rate))
}

pub struct CreateHouseUseCase {
  house_service: Arc<HouseService>,
}

impl CreateHouseUseCase {
  pub fn new(house_service: Arc<HouseService>) -> Self {
    Self { house_service }
  }

  pub async fn execute(&self, command: CreateHouseCommand) -> Result<HouseDto, HouseError> {
    let details = house_details(
      command.identifier,
      command.milk_rate.as_deref(),
      command.cow_milk_rate.as_deref(),
    )?;

    let house = self.house_service.create_house(details).await?;
    Ok(house.into())
  }
}
