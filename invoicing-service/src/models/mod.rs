//! Domain models for invoicing-service.

mod company;
mod customer;
mod invoice;
mod line_item;
pub mod timestamp;

pub use company::{CompanyProfile, CompanySettings};
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceDraft, InvoicePatch, InvoiceTotals};
pub use line_item::{LineItem, ServiceCharge};
