use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{HouseIdentifier, Rate};

// House - billing unit with its per-litre rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
  pub id: i64,
  pub identifier: HouseIdentifier,
  pub milk_rate: Rate,
  pub cow_milk_rate: Rate,
  pub created_at: DateTime<Utc>,
}

impl House {
  pub fn update(&mut self, details: HouseDetails) {
    self.identifier = details.identifier;
    self.milk_rate = details.milk_rate;
    self.cow_milk_rate = details.cow_milk_rate;
  }

  pub fn details(&self) -> HouseDetails {
    HouseDetails {
      identifier: self.identifier.clone(),
      milk_rate: self.milk_rate,
      cow_milk_rate: self.cow_milk_rate,
    }
  }
}

/// The mutable part of a house. The id and creation timestamp are assigned
/// by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseDetails {
  pub identifier: HouseIdentifier,
  pub milk_rate: Rate,
  pub cow_milk_rate: Rate,
}

impl HouseDetails {
  pub fn new(identifier: HouseIdentifier, milk_rate: Rate, cow_milk_rate: Rate) -> Self {
    Self {
      identifier,
      milk_rate,
      cow_milk_rate,
    }
  }
}

/// Previous and next houses around one identifier, in identifier order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseNeighbours {
  pub previous: Option<House>,
  pub next: Option<House>,
}

impl HouseNeighbours {
  /// Looks `identifier` up in a list already sorted by identifier.
  pub fn locate(sorted: &[House], identifier: &HouseIdentifier) -> Option<Self> {
    let index = sorted.iter().position(|h| &h.identifier == identifier)?;

    Some(Self {
      previous: index.checked_sub(1).map(|i| sorted[i].clone()),
      next: sorted.get(index + 1).cloned(),
    })
  }
}
