use std::sync::Arc;

use super::entities::{House, HouseDetails, HouseNeighbours};
use super::errors::HouseError;
use super::ports::HouseRepository;
use super::value_objects::HouseIdentifier;

/// Registry of houses and their rates.
///
/// Identifier uniqueness is enforced by storage. The lookups here report
/// the common case as `IdentifierAlreadyExists` before any write.
pub struct HouseService {
  house_repo: Arc<dyn HouseRepository>,
}

impl HouseService {
  pub fn new(house_repo: Arc<dyn HouseRepository>) -> Self {
    Self { house_repo }
  }

  pub async fn list_houses(&self) -> Result<Vec<House>, HouseError> {
    self.house_repo.list().await
  }

  pub async fn create_house(&self, details: HouseDetails) -> Result<House, HouseError> {
    if self
      .house_repo
      .find_by_identifier(&details.identifier)
      .await?
      .is_some()
    {
      return Err(HouseError::IdentifierAlreadyExists(
        details.identifier.into_inner(),
      ));
    }

    let house = self.house_repo.create(details).await?;
    tracing::info!(house_id = house.id, identifier = %house.identifier, "House created");
    Ok(house)
  }

  pub async fn update_house(&self, id: i64, details: HouseDetails) -> Result<House, HouseError> {
    let mut house = self
      .house_repo
      .find_by_id(id)
      .await?
      .ok_or(HouseError::NotFound(id))?;

    // Check for duplicate identifier (excluding current house)
    if let Some(other) = self
      .house_repo
      .find_by_identifier(&details.identifier)
      .await?
    {
      if other.id != id {
        return Err(HouseError::IdentifierAlreadyExists(
          details.identifier.into_inner(),
        ));
      }
    }

    house.update(details);
    let updated = self
      .house_repo
      .update(id, house.details())
      .await?
      .ok_or(HouseError::NotFound(id))?;

    tracing::info!(house_id = id, identifier = %updated.identifier, "House updated");
    Ok(updated)
  }

  pub async fn delete_house(&self, id: i64) -> Result<House, HouseError> {
    let removed = self
      .house_repo
      .delete(id)
      .await?
      .ok_or(HouseError::NotFound(id))?;

    tracing::info!(house_id = id, identifier = %removed.identifier, "House deleted");
    Ok(removed)
  }

  pub async fn find_house(&self, identifier: &HouseIdentifier) -> Result<Option<House>, HouseError> {
    self.house_repo.find_by_identifier(identifier).await
  }

  pub async fn neighbours(&self, identifier: &HouseIdentifier) -> Result<HouseNeighbours, HouseError> {
    let houses = self.house_repo.list().await?;
    HouseNeighbours::locate(&houses, identifier)
      .ok_or_else(|| HouseError::IdentifierNotFound(identifier.value().to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::house::value_objects::Rate;
  use crate::infrastructure::persistence::memory::InMemoryHouseRepository;
  use rust_decimal_macros::dec;

  fn service() -> HouseService {
    HouseService::new(Arc::new(InMemoryHouseRepository::new()))
  }

  fn details(identifier: &str) -> HouseDetails {
    HouseDetails::new(
      HouseIdentifier::new(identifier.to_string()).unwrap(),
      Rate::new(dec!(50.00)).unwrap(),
      Rate::new(dec!(60.00)).unwrap(),
    )
  }

  #[tokio::test]
  async fn test_create_assigns_id_and_timestamp() {
    let service = service();
    let house = service.create_house(details("A-101")).await.unwrap();

    assert!(house.id > 0);
    assert_eq!(house.identifier.value(), "A-101");
    assert_eq!(house.milk_rate.value(), dec!(50.00));
    assert_eq!(house.cow_milk_rate.value(), dec!(60.00));
  }

  #[tokio::test]
  async fn test_list_orders_by_identifier() {
    let service = service();
    service.create_house(details("B-201")).await.unwrap();
    service.create_house(details("A-101")).await.unwrap();

    let identifiers: Vec<String> = service
      .list_houses()
      .await
      .unwrap()
      .into_iter()
      .map(|h| h.identifier.into_inner())
      .collect();

    assert_eq!(identifiers, vec!["A-101", "B-201"]);
  }

  #[tokio::test]
  async fn test_duplicate_identifier_leaves_registry_unchanged() {
    let service = service();
    service.create_house(details("A-101")).await.unwrap();

    let result = service.create_house(details("A-101")).await;
    assert!(matches!(
      result,
      Err(HouseError::IdentifierAlreadyExists(ref id)) if id == "A-101"
    ));
    assert_eq!(service.list_houses().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_update_replaces_fields() {
    let service = service();
    let house = service.create_house(details("A-101")).await.unwrap();

    let updated = service
      .update_house(
        house.id,
        HouseDetails::new(
          HouseIdentifier::new("A-105".to_string()).unwrap(),
          Rate::new(dec!(52.50)).unwrap(),
          Rate::new(dec!(0)).unwrap(),
        ),
      )
      .await
      .unwrap();

    assert_eq!(updated.id, house.id);
    assert_eq!(updated.identifier.value(), "A-105");
    assert_eq!(updated.milk_rate.value(), dec!(52.50));
    assert!(updated.cow_milk_rate.is_zero());
    assert_eq!(updated.created_at, house.created_at);
  }

  #[tokio::test]
  async fn test_update_keeping_own_identifier_is_allowed() {
    let service = service();
    let house = service.create_house(details("A-101")).await.unwrap();

    assert!(service.update_house(house.id, details("A-101")).await.is_ok());
  }

  #[tokio::test]
  async fn test_update_to_taken_identifier_conflicts() {
    let service = service();
    service.create_house(details("A-101")).await.unwrap();
    let other = service.create_house(details("B-201")).await.unwrap();

    let result = service.update_house(other.id, details("A-101")).await;
    assert!(matches!(result, Err(HouseError::IdentifierAlreadyExists(_))));
  }

  #[tokio::test]
  async fn test_update_missing_house() {
    let service = service();
    let result = service.update_house(42, details("A-101")).await;
    assert!(matches!(result, Err(HouseError::NotFound(42))));
  }

  #[tokio::test]
  async fn test_delete_returns_snapshot() {
    let service = service();
    let house = service.create_house(details("A-101")).await.unwrap();

    let removed = service.delete_house(house.id).await.unwrap();
    assert_eq!(removed, house);
    assert!(service.list_houses().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_delete_missing_house_leaves_registry_unchanged() {
    let service = service();
    service.create_house(details("A-101")).await.unwrap();

    let result = service.delete_house(999).await;
    assert!(matches!(result, Err(HouseError::NotFound(999))));
    assert_eq!(service.list_houses().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_find_house() {
    let service = service();
    service.create_house(details("A-101")).await.unwrap();

    let found = service
      .find_house(&HouseIdentifier::new("A-101".to_string()).unwrap())
      .await
      .unwrap();
    assert_eq!(found.unwrap().milk_rate.value(), dec!(50.00));

    let missing = service
      .find_house(&HouseIdentifier::new("A-999".to_string()).unwrap())
      .await
      .unwrap();
    assert!(missing.is_none());
  }

  #[tokio::test]
  async fn test_neighbours() {
    let service = service();
    for id in ["C-301", "A-101", "B-201"] {
      service.create_house(details(id)).await.unwrap();
    }

    let target = HouseIdentifier::new("B-201".to_string()).unwrap();
    let n = service.neighbours(&target).await.unwrap();
    assert_eq!(n.previous.unwrap().identifier.value(), "A-101");
    assert_eq!(n.next.unwrap().identifier.value(), "C-301");

    let missing = HouseIdentifier::new("Z-1".to_string()).unwrap();
    assert!(matches!(
      service.neighbours(&missing).await,
      Err(HouseError::IdentifierNotFound(_))
    ));
  }
}
