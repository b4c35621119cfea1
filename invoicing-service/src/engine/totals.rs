//! Invoice totals: subtotal, CGST/SGST on the service charge, grand total.

use super::error::EngineError;
use super::validation::{validate_line_items, validate_service_charge};
use super::words::amount_in_words;
use crate::models::{InvoiceTotals, LineItem, ServiceCharge};
use rust_decimal::{Decimal, RoundingStrategy};

/// Tax amounts are kept to paise.
const CURRENCY_DP: u32 = 2;

/// Computes totals for `line_items` and `charge`.
///
/// Returns the totals together with a copy of `charge` whose derived tax
/// fields are filled in. The caller's value is left untouched. The same input
/// always yields the same output.
pub fn compute_totals(
    line_items: &[LineItem],
    charge: &ServiceCharge,
) -> Result<(InvoiceTotals, ServiceCharge), EngineError> {
    validate_line_items(line_items)?;
    validate_service_charge(charge)?;

    let subtotal = line_items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| checked_add(acc, item.amount))?;

    let cgst_amount = percentage_of(charge.amount, charge.cgst_rate)?;
    let sgst_amount = percentage_of(charge.amount, charge.sgst_rate)?;
    let total_gst = checked_add(cgst_amount, sgst_amount)?;

    let grand_total = checked_add(checked_add(subtotal, charge.amount)?, total_gst)?;

    let totals = InvoiceTotals {
        subtotal,
        service_charge: charge.amount,
        total_cgst: cgst_amount,
        total_sgst: sgst_amount,
        total_gst,
        grand_total,
        amount_in_words: amount_in_words(grand_total)?,
    };

    let charge = ServiceCharge {
        cgst_amount,
        sgst_amount,
        total_gst,
        ..charge.clone()
    };

    Ok((totals, charge))
}

fn percentage_of(amount: Decimal, rate: Decimal) -> Result<Decimal, EngineError> {
    amount
        .checked_mul(rate)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .map(|tax| tax.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| {
            EngineError::Computation(format!("overflow applying {}% to {}", rate, amount))
        })
}

fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, EngineError> {
    a.checked_add(b)
        .ok_or_else(|| EngineError::Computation(format!("overflow adding {} and {}", a, b)))
}
