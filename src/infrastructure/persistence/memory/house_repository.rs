use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::house::{
  House, HouseDetails, HouseError, HouseIdentifier, ports::HouseRepository,
};

#[derive(Default)]
struct State {
  next_id: i64,
  houses: Vec<House>,
}

/// In-process house registry.
///
/// Behaves like the Postgres table: sequential ids from 1 and a unique
/// identifier enforced on every write.
#[derive(Default)]
pub struct InMemoryHouseRepository {
  state: RwLock<State>,
}

impl InMemoryHouseRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

impl State {
  fn identifier_taken(&self, identifier: &HouseIdentifier, exclude_id: Option<i64>) -> bool {
    self
      .houses
      .iter()
      .any(|h| &h.identifier == identifier && Some(h.id) != exclude_id)
  }
}

#[async_trait]
impl HouseRepository for InMemoryHouseRepository {
  async fn create(&self, details: HouseDetails) -> Result<House, HouseError> {
    let mut state = self.state.write().await;
    if state.identifier_taken(&details.identifier, None) {
      return Err(HouseError::IdentifierAlreadyExists(
        details.identifier.into_inner(),
      ));
    }

    state.next_id += 1;
    let house = House {
      id: state.next_id,
      identifier: details.identifier,
      milk_rate: details.milk_rate,
      cow_milk_rate: details.cow_milk_rate,
      created_at: Utc::now(),
    };
    state.houses.push(house.clone());
    Ok(house)
  }

  async fn update(&self, id: i64, details: HouseDetails) -> Result<Option<House>, HouseError> {
    let mut state = self.state.write().await;
    if state.identifier_taken(&details.identifier, Some(id)) {
      return Err(HouseError::IdentifierAlreadyExists(
        details.identifier.into_inner(),
      ));
    }

    Ok(state.houses.iter_mut().find(|h| h.id == id).map(|house| {
      house.update(details);
      house.clone()
    }))
  }

  async fn delete(&self, id: i64) -> Result<Option<House>, HouseError> {
    let mut state = self.state.write().await;
    let position = state.houses.iter().position(|h| h.id == id);
    Ok(position.map(|i| state.houses.remove(i)))
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<House>, HouseError> {
    let state = self.state.read().await;
    Ok(state.houses.iter().find(|h| h.id == id).cloned())
  }

  async fn find_by_identifier(
    &self,
    identifier: &HouseIdentifier,
  ) -> Result<Option<House>, HouseError> {
    let state = self.state.read().await;
    Ok(
      state
        .houses
        .iter()
        .find(|h| &h.identifier == identifier)
        .cloned(),
    )
  }

  async fn list(&self) -> Result<Vec<House>, HouseError> {
    let mut houses = self.state.read().await.houses.clone();
    houses.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    Ok(houses)
  }
}
