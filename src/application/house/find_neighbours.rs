use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::house::{HouseError, HouseIdentifier, HouseService};

use super::list_houses::HouseDto;

#[derive(Debug, Deserialize)]
pub struct FindNeighboursCommand {
  pub identifier: String,
}

#[derive(Debug, Serialize)]
pub struct NeighboursResponse {
  pub previous: Option<HouseDto>,
  pub next: Option<HouseDto>,
}

/// Previous/next house navigation in identifier order
pub struct FindNeighboursUseCase {
  house_service: Arc<HouseService>,
}

impl FindNeighboursUseCase {
  pub fn new(house_service: Arc<HouseService>) -> Self {
    Self { house_service }
  }

  pub async fn execute(
    &self,
    command: FindNeighboursCommand,
  ) -> Result<NeighboursResponse, HouseError> {
    let identifier = HouseIdentifier::new(command.identifier)?;
    let neighbours = self.house_service.neighbours(&identifier).await?;

    Ok(NeighboursResponse {
      previous: neighbours.previous.map(HouseDto::from),
      next: neighbours.next.map(HouseDto::from),
    })
  }
}
