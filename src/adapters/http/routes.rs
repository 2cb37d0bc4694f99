use actix_web::{error, web};
use std::sync::Arc;

use crate::application::bill::{ListBillsUseCase, QuoteBillUseCase, SubmitBillUseCase};
use crate::application::house::{
  CreateHouseUseCase, DeleteHouseUseCase, FindNeighboursUseCase, ListHousesUseCase,
  UpdateHouseUseCase,
};

use super::errors::ApiError;
use super::handlers::bills::{list_bills_handler, quote_bill_handler, submit_bill_handler};
use super::handlers::health_handler;
use super::handlers::houses::{
  create_house_handler, delete_house_handler, house_neighbours_handler, list_houses_handler,
  update_house_handler,
};

/// Makes body and query extraction failures answer with the JSON error
/// shape used everywhere else.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      error::Error::from(ApiError::Validation(format!("Invalid JSON body: {}", err)))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
      error::Error::from(ApiError::Validation(format!("Invalid query string: {}", err)))
    }));
}

/// Configure house registry routes
///
/// # Routes
///
/// - GET /houses - List houses ordered by identifier
/// - POST /houses - Register a house
/// - PUT /houses - Replace a house's identifier and rates
/// - DELETE /houses?id=<id> - Delete a house
/// - GET /houses/{identifier}/neighbours - Previous and next house
pub fn configure_house_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListHousesUseCase>,
  create_use_case: Arc<CreateHouseUseCase>,
  update_use_case: Arc<UpdateHouseUseCase>,
  delete_use_case: Arc<DeleteHouseUseCase>,
  neighbours_use_case: Arc<FindNeighboursUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(update_use_case))
    .app_data(web::Data::new(delete_use_case))
    .app_data(web::Data::new(neighbours_use_case))
    .service(
      web::resource("/houses")
        .route(web::get().to(list_houses_handler))
        .route(web::post().to(create_house_handler))
        .route(web::put().to(update_house_handler))
        .route(web::delete().to(delete_house_handler)),
    )
    .route(
      "/houses/{identifier}/neighbours",
      web::get().to(house_neighbours_handler),
    );
}

/// Configure bill ledger routes
///
/// # Routes
///
/// - GET /bills[?house=<identifier>] - List bills, newest first
/// - POST /bills - Append a bill
/// - POST /bills/quote - Derive quantity or amount from the house rate
pub fn configure_bill_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListBillsUseCase>,
  submit_use_case: Arc<SubmitBillUseCase>,
  quote_use_case: Arc<QuoteBillUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(submit_use_case))
    .app_data(web::Data::new(quote_use_case))
    .service(
      web::resource("/bills")
        .route(web::get().to(list_bills_handler))
        .route(web::post().to(submit_bill_handler)),
    )
    .route("/bills/quote", web::post().to(quote_bill_handler));
}

pub fn configure_health_route(cfg: &mut web::ServiceConfig) {
  cfg.route("/health", web::get().to(health_handler));
}

/// Wires every route against fresh in-memory repositories.
#[cfg(test)]
pub(crate) fn configure_in_memory(cfg: &mut web::ServiceConfig) {
  use crate::domain::bill::{BillService, LedgerPolicy};
  use crate::domain::house::HouseService;
  use crate::infrastructure::persistence::memory::{
    InMemoryBillRepository, InMemoryHouseRepository,
  };

  let house_repo = Arc::new(InMemoryHouseRepository::new());
  let bill_repo = Arc::new(InMemoryBillRepository::new());

  let house_service = Arc::new(HouseService::new(house_repo.clone()));
  let bill_service = Arc::new(BillService::new(
    bill_repo,
    house_repo,
    LedgerPolicy::default(),
  ));

  configure_extractors(cfg);
  configure_house_routes(
    cfg,
    Arc::new(ListHousesUseCase::new(house_service.clone())),
    Arc::new(CreateHouseUseCase::new(house_service.clone())),
    Arc::new(UpdateHouseUseCase::new(house_service.clone())),
    Arc::new(DeleteHouseUseCase::new(house_service.clone())),
    Arc::new(FindNeighboursUseCase::new(house_service)),
  );
  configure_bill_routes(
    cfg,
    Arc::new(ListBillsUseCase::new(bill_service.clone())),
    Arc::new(SubmitBillUseCase::new(bill_service.clone())),
    Arc::new(QuoteBillUseCase::new(bill_service)),
  );
  configure_health_route(cfg);
}
