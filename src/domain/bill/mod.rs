pub mod calculator;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use calculator::{BillField, Recalculation, derive_amount, derive_quantity, recalculate};
pub use entities::{Bill, NewBill};
pub use errors::BillError;
pub use ports::BillRepository;
pub use services::{BillService, BillSubmission};
pub use value_objects::{HouseReference, LedgerPolicy, LineInput, parse_bill_date};
