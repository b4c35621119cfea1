//! Customer (bill-to party) for invoicing-service.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Bill-to party. Carried through unchanged; nothing here is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// GSTIN of the customer, when registered.
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(email(message = "Invalid customer email"))]
    pub email: Option<String>,
}

pub(crate) fn default_country() -> String {
    "India".to_string()
}
