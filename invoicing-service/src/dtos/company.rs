use crate::models::{timestamp, CompanyProfile, CompanySettings};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CompanySettingsResponse {
    pub id: String,
    #[serde(flatten)]
    pub profile: CompanyProfile,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CompanySettings> for CompanySettingsResponse {
    fn from(settings: CompanySettings) -> Self {
        Self {
            id: settings.id,
            profile: settings.profile,
            created_at: timestamp::format(&settings.created_at),
            updated_at: timestamp::format(&settings.updated_at),
        }
    }
}
