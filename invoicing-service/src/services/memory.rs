//! In-process stores for local development and tests.

use super::store::{
    invoice_not_found, stale_version, CompanyStore, InvoiceStore, MAX_LIST_LIMIT,
};
use crate::models::{CompanySettings, Invoice};
use async_trait::async_trait;
use service_core::error::AppError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryInvoiceStore {
    invoices: RwLock<HashMap<String, Invoice>>,
}

#[async_trait]
impl InvoiceStore for MemoryInvoiceStore {
    async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        Ok(self.invoices.read().await.get(id).cloned())
    }

    async fn insert(&self, invoice: &Invoice) -> Result<(), AppError> {
        let mut invoices = self.invoices.write().await;
        if invoices.contains_key(&invoice.id) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Invoice {} already exists",
                invoice.id
            )));
        }
        invoices.insert(invoice.id.clone(), invoice.clone());
        Ok(())
    }

    async fn replace(&self, invoice: &Invoice, expected_version: i64) -> Result<(), AppError> {
        let mut invoices = self.invoices.write().await;
        match invoices.get_mut(&invoice.id) {
            None => Err(invoice_not_found()),
            Some(stored) if stored.version != expected_version => {
                Err(stale_version(&invoice.id, expected_version))
            }
            Some(stored) => {
                *stored = invoice.clone();
                Ok(())
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.invoices.write().await.remove(id).is_some())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Invoice>, AppError> {
        let mut invoices: Vec<Invoice> = self.invoices.read().await.values().cloned().collect();
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        invoices.truncate(limit.clamp(1, MAX_LIST_LIMIT) as usize);
        Ok(invoices)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCompanyStore {
    settings: RwLock<Option<CompanySettings>>,
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn get(&self) -> Result<Option<CompanySettings>, AppError> {
        Ok(self.settings.read().await.clone())
    }

    async fn upsert(&self, settings: &CompanySettings) -> Result<(), AppError> {
        *self.settings.write().await = Some(settings.clone());
        Ok(())
    }
}
