use async_trait::async_trait;

use super::entities::{House, HouseDetails};
use super::errors::HouseError;
use super::value_objects::HouseIdentifier;

#[async_trait]
pub trait HouseRepository: Send + Sync {
  /// Fails with `HouseError::IdentifierAlreadyExists` when the identifier is taken.
  async fn create(&self, details: HouseDetails) -> Result<House, HouseError>;
  /// Returns `None` when no house has `id`.
  async fn update(&self, id: i64, details: HouseDetails) -> Result<Option<House>, HouseError>;
  /// Returns the removed row, or `None` when no house has `id`.
  async fn delete(&self, id: i64) -> Result<Option<House>, HouseError>;
  async fn find_by_id(&self, id: i64) -> Result<Option<House>, HouseError>;
  async fn find_by_identifier(
    &self,
    identifier: &HouseIdentifier,
  ) -> Result<Option<House>, HouseError>;
  /// All houses ordered by identifier ascending.
  async fn list(&self) -> Result<Vec<House>, HouseError>;
}
