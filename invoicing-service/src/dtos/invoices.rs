use crate::models::{timestamp, Customer, Invoice, InvoiceTotals, LineItem, ServiceCharge};
use serde::Serialize;

/// Wire form of an invoice. Identity is exposed as `id`.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub payment_terms: String,
    pub po_number: Option<String>,
    pub place_of_supply: String,
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub service_charges: ServiceCharge,
    pub totals: InvoiceTotals,
    pub terms_conditions: Option<String>,
    pub notes: Option<String>,
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            invoice_date: timestamp::format(&invoice.invoice_date),
            due_date: timestamp::format(&invoice.due_date),
            payment_terms: invoice.payment_terms,
            po_number: invoice.po_number,
            place_of_supply: invoice.place_of_supply,
            customer: invoice.customer,
            line_items: invoice.line_items,
            service_charges: invoice.service_charges,
            totals: invoice.totals,
            terms_conditions: invoice.terms_conditions,
            notes: invoice.notes,
            version: invoice.version,
            created_at: timestamp::format(&invoice.created_at),
            updated_at: timestamp::format(&invoice.updated_at),
        }
    }
}
