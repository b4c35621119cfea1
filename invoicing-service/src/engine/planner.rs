//! Merges a partial update into a stored invoice.
//!
//! Totals are recomputed from the merged line items and service charge
//! whenever the patch carries either of them, and are left untouched
//! otherwise. The planner never writes; the caller persists the result.

use super::error::EngineError;
use super::totals::compute_totals;
use crate::models::{Invoice, InvoicePatch};
use chrono::{DateTime, Utc};

/// Outcome of planning an update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    /// Record to persist. Equal to the existing one when nothing changed.
    pub invoice: Invoice,
    /// At least one field differs from the stored invoice.
    pub changed: bool,
    /// Totals were recomputed.
    pub recomputed: bool,
}

/// Applies `patch` to `existing` and returns the ready-to-persist invoice.
pub fn apply_update(existing: &Invoice, patch: InvoicePatch) -> Result<Invoice, EngineError> {
    plan_update(existing, patch, Utc::now()).map(|plan| plan.invoice)
}

/// Plans an update, stamping `now` as the modification time.
///
/// `patch.version` is ignored here; checking it against the stored version is
/// the caller's concern.
pub fn plan_update(
    existing: &Invoice,
    patch: InvoicePatch,
    now: DateTime<Utc>,
) -> Result<UpdatePlan, EngineError> {
    let recomputed = patch.touches_totals();
    let mut next = existing.clone();
    let mut changed = false;

    macro_rules! merge {
        (optional $field:ident) => {
            if let Some(value) = patch.$field {
                if next.$field.as_ref() != Some(&value) {
                    next.$field = Some(value);
                    changed = true;
                }
            }
        };
        ($field:ident) => {
            if let Some(value) = patch.$field {
                if next.$field != value {
                    next.$field = value;
                    changed = true;
                }
            }
        };
    }

    merge!(invoice_number);
    merge!(invoice_date);
    merge!(due_date);
    merge!(payment_terms);
    merge!(optional po_number);
    merge!(place_of_supply);
    merge!(customer);
    merge!(line_items);
    merge!(optional terms_conditions);
    merge!(optional notes);

    if let Some(charge) = patch.service_charges {
        if !next.service_charges.same_inputs(&charge) {
            next.service_charges = charge;
            changed = true;
        }
    }

    if recomputed {
        let (totals, service_charges) = compute_totals(&next.line_items, &next.service_charges)?;
        next.totals = totals;
        next.service_charges = service_charges;
    }

    if !changed {
        return Ok(UpdatePlan {
            invoice: existing.clone(),
            changed: false,
            recomputed,
        });
    }

    next.version = existing.version + 1;
    next.updated_at = now;
    next.created_at = existing.created_at;

    Ok(UpdatePlan {
        invoice: next,
        changed,
        recomputed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assembler::assemble_invoice_at;
    use crate::engine::assembler::fixtures::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()
    }

    fn existing() -> Invoice {
        assemble_invoice_at(
            draft(
                vec![
                    line("Software Development Services", 1, dec!(50000), dec!(50000)),
                    line("Technical Consultation", 2, dec!(15000), dec!(30000)),
                ],
                service_charge(dec!(5000), dec!(9), dec!(9)),
            ),
            created_at(),
        )
        .unwrap()
    }

    #[test]
    fn header_only_patch_keeps_totals_and_advances_updated_at() {
        let existing = existing();
        let later = created_at() + Duration::hours(3);

        let plan = plan_update(
            &existing,
            InvoicePatch {
                payment_terms: Some("45 days".to_string()),
                notes: Some("Payment terms extended to 45 days".to_string()),
                ..Default::default()
            },
            later,
        )
        .unwrap();

        assert!(plan.changed);
        assert!(!plan.recomputed);
        assert_eq!(plan.invoice.payment_terms, "45 days");
        assert_eq!(plan.invoice.totals, existing.totals);
        assert_eq!(plan.invoice.service_charges, existing.service_charges);
        assert_eq!(plan.invoice.updated_at, later);
        assert_eq!(plan.invoice.created_at, existing.created_at);
        assert_eq!(plan.invoice.version, existing.version + 1);
    }

    #[test]
    fn new_line_items_replace_old_contribution() {
        let existing = existing();

        let plan = plan_update(
            &existing,
            InvoicePatch {
                line_items: Some(vec![line("Audit", 1, dec!(1000), dec!(1000))]),
                ..Default::default()
            },
            created_at() + Duration::minutes(5),
        )
        .unwrap();

        assert!(plan.recomputed);
        assert_eq!(plan.invoice.totals.subtotal, dec!(1000));
        assert_eq!(plan.invoice.totals.total_gst, dec!(900));
        assert_eq!(plan.invoice.totals.grand_total, dec!(6900));
        assert_eq!(
            plan.invoice.totals.amount_in_words,
            "Six Thousand Nine Hundred Rupees Only"
        );
    }

    #[test]
    fn service_charge_patch_recomputes_with_existing_line_items() {
        let existing = existing();

        let plan = plan_update(
            &existing,
            InvoicePatch {
                service_charges: Some(service_charge(dec!(2000), dec!(6), dec!(6))),
                ..Default::default()
            },
            created_at() + Duration::minutes(5),
        )
        .unwrap();

        assert_eq!(plan.invoice.totals.subtotal, dec!(80000));
        assert_eq!(plan.invoice.totals.total_cgst, dec!(120));
        assert_eq!(plan.invoice.service_charges.sgst_amount, dec!(120));
        assert_eq!(plan.invoice.totals.grand_total, dec!(82240));
    }

    #[test]
    fn identical_values_are_not_a_change() {
        let existing = existing();

        let plan = plan_update(
            &existing,
            InvoicePatch {
                payment_terms: Some(existing.payment_terms.clone()),
                line_items: Some(existing.line_items.clone()),
                ..Default::default()
            },
            created_at() + Duration::days(1),
        )
        .unwrap();

        assert!(!plan.changed);
        assert_eq!(plan.invoice, existing);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let existing = existing();
        let updated = apply_update(&existing, InvoicePatch::default()).unwrap();
        assert_eq!(updated, existing);
    }

    #[test]
    fn invalid_merged_values_reject_the_update() {
        let existing = existing();

        let result = plan_update(
            &existing,
            InvoicePatch {
                payment_terms: Some("15 days".to_string()),
                service_charges: Some(service_charge(dec!(-1), dec!(9), dec!(9))),
                ..Default::default()
            },
            created_at() + Duration::minutes(1),
        );

        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn clearing_line_items_zeroes_the_subtotal() {
        let existing = existing();

        let updated = apply_update(
            &existing,
            InvoicePatch {
                line_items: Some(vec![]),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.totals.subtotal, dec!(0));
        assert_eq!(updated.totals.grand_total, dec!(5900));
        assert!(updated.updated_at >= existing.updated_at);
    }
}
