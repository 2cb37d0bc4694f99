use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{
      CreateHouseRequest, DeleteHouseQuery, HouseListResponse, HouseResponse, UpdateHouseRequest,
      numeric_field,
    },
    errors::ApiError,
  },
  application::house::*,
};

/// Parses a house id from a query or body value.
fn parse_house_id(raw: Option<&str>) -> Result<i64, ApiError> {
  let raw = raw
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .ok_or_else(|| ApiError::Validation("ID is required".to_string()))?;

  raw
    .parse::<i64>()
    .map_err(|_| ApiError::Validation(format!("Invalid ID: '{}'", raw)))
}

/// List all houses
/// GET /houses
pub async fn list_houses_handler(
  use_case: web::Data<Arc<ListHousesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  let total_houses = response.houses.len();

  Ok(HttpResponse::Ok().json(HouseListResponse {
    houses: response.houses,
    total_houses,
  }))
}

/// Register a house
/// POST /houses
pub async fn create_house_handler(
  request: web::Json<CreateHouseRequest>,
  use_case: web::Data<Arc<CreateHouseUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = CreateHouseCommand {
    milk_rate: numeric_field("milkRate", request.milk_rate.as_ref())?,
    cow_milk_rate: numeric_field("cowMilkRate", request.cow_milk_rate.as_ref())?,
    identifier: request.identifier,
  };

  let house = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(HouseResponse {
    message: "House created successfully".to_string(),
    house,
  }))
}

/// Replace a house's identifier and rates
/// PUT /houses
pub async fn update_house_handler(
  request: web::Json<UpdateHouseRequest>,
  use_case: web::Data<Arc<UpdateHouseUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let id = numeric_field("id", request.id.as_ref())?;
  let command = UpdateHouseCommand {
    id: parse_house_id(id.as_deref())?,
    milk_rate: numeric_field("milkRate", request.milk_rate.as_ref())?,
    cow_milk_rate: numeric_field("cowMilkRate", request.cow_milk_rate.as_ref())?,
    identifier: request.identifier,
  };

  let house = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(HouseResponse {
    message: "House updated successfully".to_string(),
    house,
  }))
}

/// Delete a house by id
/// DELETE /houses?id=<id>
pub async fn delete_house_handler(
  query: web::Query<DeleteHouseQuery>,
  use_case: web::Data<Arc<DeleteHouseUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let id = parse_house_id(query.id.as_deref())?;

  let house = use_case.execute(DeleteHouseCommand { id }).await?;

  Ok(HttpResponse::Ok().json(HouseResponse {
    message: "House deleted successfully".to_string(),
    house,
  }))
}

/// Previous and next house in identifier order
/// GET /houses/{identifier}/neighbours
pub async fn house_neighbours_handler(
  identifier: web::Path<String>,
  use_case: web::Data<Arc<FindNeighboursUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = FindNeighboursCommand {
    identifier: identifier.into_inner(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}
