pub mod company;
pub mod health;
pub mod invoices;
pub mod metrics;

pub use company::{get_company, save_company};
pub use health::{health_check, readiness_check, root};
pub use invoices::{create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice};
pub use self::metrics::metrics_endpoint;
