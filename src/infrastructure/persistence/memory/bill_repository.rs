use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::bill::{Bill, BillError, HouseReference, NewBill, ports::BillRepository};

#[derive(Default)]
pub struct InMemoryBillRepository {
  bills: RwLock<Vec<Bill>>,
}

impl InMemoryBillRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn newest_first(mut bills: Vec<Bill>) -> Vec<Bill> {
    bills.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    bills
  }
}

#[async_trait]
impl BillRepository for InMemoryBillRepository {
  async fn append(&self, bill: NewBill) -> Result<Bill, BillError> {
    let mut bills = self.bills.write().await;
    let id = bills.len() as i64 + 1;
    let bill = bill.into_bill(id, Utc::now());
    bills.push(bill.clone());
    Ok(bill)
  }

  async fn list_all(&self) -> Result<Vec<Bill>, BillError> {
    Ok(Self::newest_first(self.bills.read().await.clone()))
  }

  async fn list_by_house(&self, identifier: &HouseReference) -> Result<Vec<Bill>, BillError> {
    let bills = self
      .bills
      .read()
      .await
      .iter()
      .filter(|b| &b.house_identifier == identifier)
      .cloned()
      .collect();
    Ok(Self::newest_first(bills))
  }
}
