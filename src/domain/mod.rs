pub mod bill;
pub mod house;
