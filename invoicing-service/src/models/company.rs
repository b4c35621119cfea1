//! Issuer profile printed on every invoice.

use super::customer::default_country;
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Company details as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CompanyProfile {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub phone: String,
    #[validate(email(message = "Invalid company email"))]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    pub gstin: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch: String,
    #[serde(default)]
    pub branch_code: Option<String>,
}

/// Stored company settings. There is at most one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub profile: CompanyProfile,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl CompanySettings {
    pub fn new(profile: CompanyProfile, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the profile, keeping identity and creation time.
    pub fn replace_profile(self, profile: CompanyProfile, now: DateTime<Utc>) -> Self {
        Self {
            profile,
            updated_at: now,
            ..self
        }
    }
}
