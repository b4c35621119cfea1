use crate::dtos::CompanySettingsResponse;
use crate::models::{CompanyProfile, CompanySettings};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use service_core::error::AppError;

pub async fn get_company(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = state
        .company
        .get()
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Company settings not found")))?;

    Ok(Json(CompanySettingsResponse::from(settings)))
}

/// Creates the company profile, or replaces it while keeping its identity.
pub async fn save_company(
    State(state): State<AppState>,
    ValidatedJson(profile): ValidatedJson<CompanyProfile>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let settings = match state.company.get().await? {
        Some(existing) => existing.replace_profile(profile, now),
        None => CompanySettings::new(profile, now),
    };

    state.company.upsert(&settings).await?;

    tracing::info!(company_id = %settings.id, "Company settings saved");

    Ok(Json(CompanySettingsResponse::from(settings)))
}
