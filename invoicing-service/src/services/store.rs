//! Persistence seams. Handlers only see these traits; the backing store is
//! picked at startup.

use crate::models::{CompanySettings, Invoice};
use async_trait::async_trait;
use service_core::error::AppError;

/// Upper bound on `list_recent`.
pub const MAX_LIST_LIMIT: i64 = 1000;

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError>;

    async fn insert(&self, invoice: &Invoice) -> Result<(), AppError>;

    /// Writes `invoice` only if the stored copy is still at
    /// `expected_version`. A stale version yields `AppError::Conflict`; a
    /// vanished record yields `AppError::NotFound`.
    async fn replace(&self, invoice: &Invoice, expected_version: i64) -> Result<(), AppError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Newest `created_at` first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Invoice>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn get(&self) -> Result<Option<CompanySettings>, AppError>;

    async fn upsert(&self, settings: &CompanySettings) -> Result<(), AppError>;
}

pub(crate) fn stale_version(id: &str, expected_version: i64) -> AppError {
    AppError::Conflict(anyhow::anyhow!(
        "Invoice {} was modified concurrently (expected version {})",
        id,
        expected_version
    ))
}

pub(crate) fn invoice_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Invoice not found"))
}
