//! Line item and service charge models for invoicing-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billed line.
///
/// `amount` is the authoritative line total. It is never recomputed from
/// `quantity * rate`; every derived sum uses it as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// HSN (goods) or SAC (services) classification code.
    #[serde(default)]
    pub hsn_sac: String,
    pub quantity: i64,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Service charge on which CGST and SGST are levied.
///
/// The tax amounts are derived; values supplied by a caller are ignored and
/// overwritten when totals are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCharge {
    pub description: String,
    #[serde(default)]
    pub hsn_sac: String,
    pub amount: Decimal,
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    #[serde(default)]
    pub cgst_amount: Decimal,
    #[serde(default)]
    pub sgst_amount: Decimal,
    #[serde(default)]
    pub total_gst: Decimal,
}

impl ServiceCharge {
    /// Compares only the caller-supplied fields.
    pub fn same_inputs(&self, other: &ServiceCharge) -> bool {
        self.description == other.description
            && self.hsn_sac == other.hsn_sac
            && self.amount == other.amount
            && self.cgst_rate == other.cgst_rate
            && self.sgst_rate == other.sgst_rate
    }
}
