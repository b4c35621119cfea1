//! Input checks the engine applies before totalling.

use super::error::EngineError;
use crate::models::{LineItem, ServiceCharge};
use rust_decimal::Decimal;

const MAX_RATE: Decimal = Decimal::ONE_HUNDRED;

pub fn validate_line_items(line_items: &[LineItem]) -> Result<(), EngineError> {
    for (index, item) in line_items.iter().enumerate() {
        if item.quantity < 1 {
            return Err(EngineError::Validation(format!(
                "line_items[{}].quantity must be at least 1, got {}",
                index, item.quantity
            )));
        }
        if item.rate.is_sign_negative() && !item.rate.is_zero() {
            return Err(EngineError::Validation(format!(
                "line_items[{}].rate must not be negative",
                index
            )));
        }
        if item.amount.is_sign_negative() && !item.amount.is_zero() {
            return Err(EngineError::Validation(format!(
                "line_items[{}].amount must not be negative",
                index
            )));
        }
    }
    Ok(())
}

pub fn validate_service_charge(charge: &ServiceCharge) -> Result<(), EngineError> {
    if charge.amount.is_sign_negative() && !charge.amount.is_zero() {
        return Err(EngineError::Validation(
            "service_charges.amount must not be negative".to_string(),
        ));
    }
    check_rate("service_charges.cgst_rate", charge.cgst_rate)?;
    check_rate("service_charges.sgst_rate", charge.sgst_rate)
}

fn check_rate(field: &str, rate: Decimal) -> Result<(), EngineError> {
    if rate < Decimal::ZERO || rate > MAX_RATE {
        return Err(EngineError::Validation(format!(
            "{} must be between 0 and 100, got {}",
            field, rate
        )));
    }
    Ok(())
}
