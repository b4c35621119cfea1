pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::{MongoCompanyStore, MongoDb, MongoInvoiceStore};
pub use memory::{MemoryCompanyStore, MemoryInvoiceStore};
pub use self::metrics::{get_metrics, init_metrics};
pub use store::{CompanyStore, InvoiceStore, MAX_LIST_LIMIT};
