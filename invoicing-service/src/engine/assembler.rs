//! Turns a validated draft into a complete invoice record.

use super::error::EngineError;
use super::totals::compute_totals;
use crate::models::{Invoice, InvoiceDraft};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The only place an invoice is born.
pub fn assemble_invoice(draft: InvoiceDraft) -> Result<Invoice, EngineError> {
    assemble_invoice_at(draft, Utc::now())
}

/// As [`assemble_invoice`], stamping `now` as the creation time.
pub fn assemble_invoice_at(draft: InvoiceDraft, now: DateTime<Utc>) -> Result<Invoice, EngineError> {
    let (totals, service_charges) = compute_totals(&draft.line_items, &draft.service_charges)?;

    Ok(Invoice {
        id: Uuid::new_v4().to_string(),
        invoice_number: draft.invoice_number,
        invoice_date: draft.invoice_date.unwrap_or(now),
        due_date: draft.due_date,
        payment_terms: draft.payment_terms,
        po_number: draft.po_number,
        place_of_supply: draft.place_of_supply,
        customer: draft.customer,
        line_items: draft.line_items,
        service_charges,
        totals,
        terms_conditions: draft.terms_conditions,
        notes: draft.notes,
        version: 1,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Customer, InvoiceDraft, LineItem, ServiceCharge};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    pub fn customer() -> Customer {
        Customer {
            name: "ABC Corporation Ltd".to_string(),
            address_line1: "456 Corporate Avenue".to_string(),
            address_line2: Some("Business District".to_string()),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: "411001".to_string(),
            country: "India".to_string(),
            gstin: Some("27XYZAB1234C1Z5".to_string()),
            phone: None,
            email: Some("accounts@abccorp.com".to_string()),
        }
    }

    pub fn line(description: &str, quantity: i64, rate: Decimal, amount: Decimal) -> LineItem {
        LineItem {
            description: description.to_string(),
            hsn_sac: "998313".to_string(),
            quantity,
            rate,
            amount,
        }
    }

    pub fn service_charge(amount: Decimal, cgst_rate: Decimal, sgst_rate: Decimal) -> ServiceCharge {
        ServiceCharge {
            description: "Platform Service Charges".to_string(),
            hsn_sac: "998314".to_string(),
            amount,
            cgst_rate,
            sgst_rate,
            cgst_amount: Decimal::ZERO,
            sgst_amount: Decimal::ZERO,
            total_gst: Decimal::ZERO,
        }
    }

    pub fn draft(line_items: Vec<LineItem>, charge: ServiceCharge) -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: "INV-2026-0001".to_string(),
            invoice_date: None,
            due_date: Utc.with_ymd_and_hms(2026, 11, 18, 0, 0, 0).unwrap(),
            payment_terms: "30 days".to_string(),
            po_number: Some("PO-2026-001".to_string()),
            place_of_supply: "Maharashtra (27)".to_string(),
            customer: customer(),
            line_items,
            service_charges: charge,
            terms_conditions: None,
            notes: Some("GST is applied on the service charges.".to_string()),
        }
    }
}
