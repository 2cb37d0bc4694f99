use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::application::bill::BillDto;
use crate::application::house::HouseDto;
use crate::domain::bill::BillField;

use super::errors::ApiError;

/// Reads a numeric request field.
///
/// JSON numbers and strings pass through as text for the domain parser.
/// `null`, a missing key and a blank string all mean "not supplied".
pub fn numeric_field(field: &str, value: Option<&Value>) -> Result<Option<String>, ApiError> {
  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(number)) => Ok(Some(number.to_string())),
    Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
    Some(Value::String(text)) => Ok(Some(text.clone())),
    Some(other) => Err(ApiError::Validation(format!(
      "Invalid number for {}: '{}' is not a valid number",
      field, other
    ))),
  }
}

/// Request to register a house
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHouseRequest {
  #[serde(default)]
  pub identifier: String,

  #[serde(default)]
  pub milk_rate: Option<Value>,

  #[serde(default)]
  pub cow_milk_rate: Option<Value>,
}

/// Request to replace a house's identifier and rates
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHouseRequest {
  #[serde(default)]
  pub id: Option<Value>,

  #[serde(default)]
  pub identifier: String,

  #[serde(default)]
  pub milk_rate: Option<Value>,

  #[serde(default)]
  pub cow_milk_rate: Option<Value>,
}

/// Query string for `DELETE /houses`
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteHouseQuery {
  pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseListResponse {
  pub houses: Vec<HouseDto>,
  pub total_houses: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseResponse {
  pub message: String,
  pub house: HouseDto,
}

/// Request to append a bill
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBillRequest {
  #[serde(default)]
  pub house_identifier: String,

  #[serde(default)]
  pub date: String,

  #[serde(default)]
  pub milk_qty: Option<Value>,

  #[serde(default)]
  pub milk_amount: Option<Value>,

  #[serde(default)]
  pub cow_milk_qty: Option<Value>,

  #[serde(default)]
  pub cow_milk_amount: Option<Value>,

  #[serde(default)]
  pub other: Option<Value>,
}

/// Query string for `GET /bills`
#[derive(Debug, Clone, Deserialize)]
pub struct ListBillsQuery {
  pub house: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillListResponse {
  pub bills: Vec<BillDto>,
  pub total_bills: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillResponse {
  pub message: String,
  pub bill: BillDto,
}

/// Request to preview the counterpart of an edited bill field
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBillRequest {
  #[validate(length(min = 1, message = "House identifier is required"))]
  pub house_identifier: String,

  pub field: BillField,

  pub value: Option<Value>,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_numeric_field_accepts_numbers_and_strings() {
    assert_eq!(
      numeric_field("milkRate", Some(&json!(50))).unwrap(),
      Some("50".to_string())
    );
    assert_eq!(
      numeric_field("milkRate", Some(&json!("50.00"))).unwrap(),
      Some("50.00".to_string())
    );
    assert_eq!(numeric_field("milkRate", Some(&json!("  "))).unwrap(), None);
    assert_eq!(numeric_field("milkRate", Some(&Value::Null)).unwrap(), None);
    assert_eq!(numeric_field("milkRate", None).unwrap(), None);
  }

  #[test]
  fn test_numeric_field_rejects_other_json() {
    assert!(numeric_field("milkRate", Some(&json!(true))).is_err());
    assert!(numeric_field("milkRate", Some(&json!([1]))).is_err());
  }

  #[test]
  fn test_submit_bill_request_deserialization() {
    let request: SubmitBillRequest = serde_json::from_value(json!({
      "houseIdentifier": "A-101",
      "date": "2024-06-01",
      "milkQty": 10,
      "other": "2.5"
    }))
    .unwrap();

    assert_eq!(request.house_identifier, "A-101");
    assert_eq!(request.milk_qty, Some(json!(10)));
    assert!(request.milk_amount.is_none());
  }

  #[test]
  fn test_quote_request_requires_identifier() {
    let request: QuoteBillRequest = serde_json::from_value(json!({
      "houseIdentifier": "",
      "field": "milkQty",
      "value": 1
    }))
    .unwrap();
    assert!(request.validate().is_err());
  }
}
