//! Storage that lives in process memory. Used to run the services and the
//! HTTP layer without a database.

pub mod bill_repository;
pub mod house_repository;

pub use bill_repository::InMemoryBillRepository;
pub use house_repository::InMemoryHouseRepository;
