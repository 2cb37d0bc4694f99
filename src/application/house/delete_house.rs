use serde::Deserialize;
use std::sync::Arc;

use crate::domain::house::{HouseError, HouseService};

use super::list_houses::HouseDto;

#[derive(Debug, Deserialize)]
pub struct DeleteHouseCommand {
  pub id: i64,
}

pub struct DeleteHouseUseCase {
  house_service: Arc<HouseService>,
}

impl DeleteHouseUseCase {
  pub fn new(house_service: Arc<HouseService>) -> Self {
    Self { house_service }
  }

  /// Returns the deleted house as it was just before removal.
  pub async fn execute(&self, command: DeleteHouseCommand) -> Result<HouseDto, HouseError> {
    let removed = self.house_service.delete_house(command.id).await?;
    Ok(removed.into())
  }
}
