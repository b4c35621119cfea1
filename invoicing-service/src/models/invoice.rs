//! Invoice model for invoicing-service.

use super::customer::Customer;
use super::line_item::{LineItem, ServiceCharge};
use super::timestamp;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fully derived totals. Never edited directly; only replaced by a fresh
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub service_charge: Decimal,
    pub total_cgst: Decimal,
    pub total_sgst: Decimal,
    pub total_gst: Decimal,
    pub grand_total: Decimal,
    pub amount_in_words: String,
}

/// Stored invoice document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub invoice_number: String,
    #[serde(with = "timestamp")]
    pub invoice_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub due_date: DateTime<Utc>,
    pub payment_terms: String,
    pub po_number: Option<String>,
    pub place_of_supply: String,
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub service_charges: ServiceCharge,
    pub totals: InvoiceTotals,
    pub terms_conditions: Option<String>,
    pub notes: Option<String>,
    /// Bumped on every write; used as the compare-and-swap token.
    pub version: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an invoice.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceDraft {
    #[validate(length(min = 1, message = "Invoice number is required"))]
    pub invoice_number: String,
    /// Defaults to the creation time.
    #[serde(default, with = "timestamp::option")]
    pub invoice_date: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub due_date: DateTime<Utc>,
    pub payment_terms: String,
    #[serde(default)]
    pub po_number: Option<String>,
    pub place_of_supply: String,
    #[validate(nested)]
    pub customer: Customer,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(alias = "service_charge")]
    pub service_charges: ServiceCharge,
    #[serde(default)]
    pub terms_conditions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update. Absent (or `null`) fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InvoicePatch {
    #[validate(length(min = 1, message = "Invoice number cannot be empty"))]
    pub invoice_number: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub invoice_date: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub due_date: Option<DateTime<Utc>>,
    pub payment_terms: Option<String>,
    pub po_number: Option<String>,
    pub place_of_supply: Option<String>,
    #[validate(nested)]
    pub customer: Option<Customer>,
    pub line_items: Option<Vec<LineItem>>,
    #[serde(alias = "service_charge")]
    pub service_charges: Option<ServiceCharge>,
    pub terms_conditions: Option<String>,
    pub notes: Option<String>,
    /// Version the caller last read. A mismatch rejects the update.
    pub version: Option<i64>,
}

impl InvoicePatch {
    /// Whether this patch touches a field that feeds the totals.
    pub fn touches_totals(&self) -> bool {
        self.line_items.is_some() || self.service_charges.is_some()
    }
}
