use async_trait::async_trait;

use super::entities::{Bill, NewBill};
use super::errors::BillError;
use super::value_objects::HouseReference;

/// Append-only bill storage.
#[async_trait]
pub trait BillRepository: Send + Sync {
  async fn append(&self, bill: NewBill) -> Result<Bill, BillError>;
  /// Newest first.
  async fn list_all(&self) -> Result<Vec<Bill>, BillError>;
  /// Newest first.
  async fn list_by_house(&self, identifier: &HouseReference) -> Result<Vec<Bill>, BillError>;
}
