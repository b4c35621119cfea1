//! Rupee amounts in words, Indian numbering system.

use super::error::EngineError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

const SUFFIX: &str = "Rupees Only";

/// Renders the whole-rupee part of `amount`, e.g. `85900` becomes
/// `"Eighty Five Thousand Nine Hundred Rupees Only"`.
///
/// Paise are dropped: the amount is floored before conversion.
pub fn amount_in_words(amount: Decimal) -> Result<String, EngineError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::Computation(format!(
            "cannot render negative amount {} in words",
            amount
        )));
    }

    let rupees = amount.floor().to_u128().ok_or_else(|| {
        EngineError::Computation(format!("amount {} is out of range", amount))
    })?;

    if rupees == 0 {
        return Ok(format!("Zero {}", SUFFIX));
    }

    Ok(format!("{} {}", indian_grouping(rupees), SUFFIX))
}

/// `n` must be non-zero. Zero groups are omitted.
fn indian_grouping(n: u128) -> String {
    let mut parts = Vec::new();

    let crore = n / CRORE;
    let mut rest = n % CRORE;
    if crore > 0 {
        // More than 999 crore is itself grouped ("One Lakh Crore").
        parts.push(format!("{} Crore", indian_grouping(crore)));
    }

    let lakh = rest / LAKH;
    rest %= LAKH;
    if lakh > 0 {
        parts.push(format!("{} Lakh", below_thousand(lakh as usize)));
    }

    let thousand = rest / THOUSAND;
    rest %= THOUSAND;
    if thousand > 0 {
        parts.push(format!("{} Thousand", below_thousand(thousand as usize)));
    }

    if rest > 0 {
        parts.push(below_thousand(rest as usize));
    }

    parts.join(" ")
}

fn below_thousand(n: usize) -> String {
    let mut parts = Vec::new();

    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds]));
    }

    if rest >= 20 {
        parts.push(TENS[rest / 10].to_string());
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10].to_string());
        }
    } else if rest > 0 {
        parts.push(ONES[rest].to_string());
    }

    parts.join(" ")
}
