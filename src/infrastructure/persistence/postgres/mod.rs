pub mod bill_repository;
pub mod house_repository;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

pub use bill_repository::PostgresBillRepository;
pub use house_repository::PostgresHouseRepository;
pub use schema::run_migrations;
