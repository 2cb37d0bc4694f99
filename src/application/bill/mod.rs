pub mod list_bills;
pub mod quote_bill;
pub mod submit_bill;

pub use list_bills::{BillDto, ListBillsCommand, ListBillsResponse, ListBillsUseCase};
pub use quote_bill::{QuoteBillCommand, QuoteBillResponse, QuoteBillUseCase};
pub use submit_bill::{SubmitBillCommand, SubmitBillUseCase};
