use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{
      BillListResponse, BillResponse, ListBillsQuery, QuoteBillRequest, SubmitBillRequest,
      numeric_field,
    },
    errors::ApiError,
  },
  application::bill::*,
};

/// List bills, newest first
/// GET /bills[?house=<identifier>]
pub async fn list_bills_handler(
  query: web::Query<ListBillsQuery>,
  use_case: web::Data<Arc<ListBillsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = ListBillsCommand {
    house_identifier: query
      .into_inner()
      .house
      .filter(|house| !house.trim().is_empty()),
  };

  let response = use_case.execute(command).await?;
  let total_bills = response.bills.len();

  Ok(HttpResponse::Ok().json(BillListResponse {
    bills: response.bills,
    total_bills,
  }))
}

/// Append a bill to the ledger
/// POST /bills
pub async fn submit_bill_handler(
  request: web::Json<SubmitBillRequest>,
  use_case: web::Data<Arc<SubmitBillUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = SubmitBillCommand {
    milk_qty: numeric_field("milkQty", request.milk_qty.as_ref())?,
    milk_amount: numeric_field("milkAmount", request.milk_amount.as_ref())?,
    cow_milk_qty: numeric_field("cowMilkQty", request.cow_milk_qty.as_ref())?,
    cow_milk_amount: numeric_field("cowMilkAmount", request.cow_milk_amount.as_ref())?,
    other: numeric_field("other", request.other.as_ref())?,
    house_identifier: request.house_identifier,
    date: request.date,
  };

  let bill = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(BillResponse {
    message: "Bill saved successfully".to_string(),
    bill,
  }))
}

/// Preview the derived quantity or amount for one edited field
/// POST /bills/quote
pub async fn quote_bill_handler(
  request: web::Json<QuoteBillRequest>,
  use_case: web::Data<Arc<QuoteBillUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let value = numeric_field("value", request.value.as_ref())?
    .ok_or_else(|| ApiError::Validation("value is required".to_string()))?;

  let response = use_case
    .execute(QuoteBillCommand {
      house_identifier: request.house_identifier,
      field: request.field,
      value,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
  use crate::adapters::http::routes::configure_in_memory;
  use actix_web::{App, http::StatusCode, test::{self}};
  use serde_json::{Value, json};

  fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
  }

  fn house_a101() -> Value {
    json!({ "identifier": "A-101", "milkRate": "50.00", "cowMilkRate": "60.00" })
  }

  #[actix_web::test]
  async fn test_amount_is_derived_from_quantity() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;
    test::call_service(&app, post("/houses", house_a101()).to_request()).await;

    let req = post(
      "/bills",
      json!({
        "houseIdentifier": "A-101",
        "date": "2024-06-01",
        "milkQty": 10,
        "cowMilkQty": 0,
        "cowMilkAmount": 0,
        "other": 0
      }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Bill saved successfully");
    assert_eq!(body["bill"]["milkAmount"], "500.00");
    assert_eq!(body["bill"]["milkRate"], "50.00");
    assert_eq!(body["bill"]["cowMilkQty"], "0");
  }

  #[actix_web::test]
  async fn test_quantity_is_derived_from_amount() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;
    test::call_service(&app, post("/houses", house_a101()).to_request()).await;

    let req = post(
      "/bills",
      json!({
        "houseIdentifier": "A-101",
        "date": "2024-06-01",
        "milkAmount": "250.00",
        "cowMilkQty": "1",
        "other": "0"
      }),
    )
    .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["bill"]["milkQty"], "5.00");
    assert_eq!(body["bill"]["milkAmount"], "250.00");
    assert_eq!(body["bill"]["cowMilkAmount"], "60.00");
  }

  #[actix_web::test]
  async fn test_bill_for_unregistered_house_is_accepted() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;

    let req = post(
      "/bills",
      json!({
        "houseIdentifier": "Z-9",
        "date": "2024-06-02",
        "milkQty": "2",
        "milkAmount": "90",
        "cowMilkQty": "0",
        "cowMilkAmount": "0",
        "other": 10
      }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["bill"]["total"], "100");
    assert!(body["bill"]["milkRate"].is_null());
  }

  #[actix_web::test]
  async fn test_bill_identifier_longer_than_house_identifier_is_accepted() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;
    let identifier = "H".repeat(60);

    let req = post(
      "/bills",
      json!({
        "houseIdentifier": identifier,
        "date": "2024-06-02",
        "milkQty": 1,
        "milkAmount": 45,
        "cowMilkQty": 0,
        "cowMilkAmount": 0,
        "other": 0
      }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["bill"]["houseIdentifier"], identifier);

    let req = test::TestRequest::get()
      .uri(&format!("/bills?house={}", identifier))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalBills"], 1);
  }

  #[actix_web::test]
  async fn test_bill_without_figures_is_bad_request() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;

    let req = post("/bills", json!({ "houseIdentifier": "Z-9", "date": "2024-06-01" })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = post(
      "/bills",
      json!({
        "houseIdentifier": "Z-9",
        "date": "2024-06-01",
        "milkQty": 1,
        "milkAmount": 45,
        "cowMilkQty": 0,
        "cowMilkAmount": 0
      }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("other"));

    let req = test::TestRequest::get().uri("/bills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalBills"], 0);
  }

  #[actix_web::test]
  async fn test_invalid_bill_is_bad_request() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;

    for body in [
      json!({ "houseIdentifier": "", "date": "2024-06-01" }),
      json!({ "houseIdentifier": "A-101", "date": "" }),
      json!({ "houseIdentifier": "A-101", "date": "01/06/2024" }),
      json!({ "houseIdentifier": "A-101", "date": "2024-06-01", "milkQty": "lots" }),
      json!({ "houseIdentifier": "A-101", "date": "2024-06-01", "other": "-5" }),
    ] {
      let resp = test::call_service(&app, post("/bills", body).to_request()).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
  }

  #[actix_web::test]
  async fn test_list_bills_newest_first_and_filtered() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;

    for house in ["A-101", "B-201", "A-101"] {
      let req = post(
        "/bills",
        json!({
          "houseIdentifier": house,
          "date": "2024-06-01",
          "milkQty": 1,
          "milkAmount": 1,
          "cowMilkQty": 0,
          "cowMilkAmount": 0,
          "other": 0
        }),
      )
      .to_request();
      test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/bills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalBills"], 3);
    let ids: Vec<i64> = body["bills"]
      .as_array()
      .unwrap()
      .iter()
      .map(|bill| bill["id"].as_i64().unwrap())
      .collect();
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));

    let req = test::TestRequest::get()
      .uri("/bills?house=A-101")
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalBills"], 2);
  }

  #[actix_web::test]
  async fn test_quote() {
    let app = test::init_service(App::new().configure(configure_in_memory)).await;
    test::call_service(&app, post("/houses", house_a101()).to_request()).await;

    let req = post(
      "/bills/quote",
      json!({ "houseIdentifier": "A-101", "field": "cowMilkQty", "value": 1.5 }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["amount"], "90.00");
    assert_eq!(body["rate"], "60.00");

    let req = post(
      "/bills/quote",
      json!({ "houseIdentifier": "Z-9", "field": "milkQty", "value": 1 }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = post(
      "/bills/quote",
      json!({ "houseIdentifier": "A-101", "field": "milkQty" }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
