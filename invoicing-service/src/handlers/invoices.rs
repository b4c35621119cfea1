use crate::dtos::{InvoiceResponse, MessageResponse};
use crate::engine::{assemble_invoice, plan_update};
use crate::models::{InvoiceDraft, InvoicePatch};
use crate::services::{metrics, MAX_LIST_LIMIT};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use service_core::error::AppError;

fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Invoice not found"))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<InvoiceDraft>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = assemble_invoice(draft)?;

    state.invoices.insert(&invoice).await?;
    metrics::record_invoice_created();

    tracing::info!(
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        grand_total = %invoice.totals.grand_total,
        "Invoice created"
    );

    Ok(Json(InvoiceResponse::from(invoice)))
}

pub async fn list_invoices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoices = state.invoices.list_recent(MAX_LIST_LIMIT).await?;

    Ok(Json(
        invoices
            .into_iter()
            .map(InvoiceResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .invoices
        .get(&invoice_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(InvoiceResponse::from(invoice)))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    ValidatedJson(patch): ValidatedJson<InvoicePatch>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .invoices
        .get(&invoice_id)
        .await?
        .ok_or_else(not_found)?;

    if let Some(expected) = patch.version {
        if expected != existing.version {
            metrics::record_update_conflict();
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Invoice is at version {}, not {}",
                existing.version,
                expected
            )));
        }
    }

    let plan = plan_update(&existing, patch, Utc::now())?;

    if !plan.changed {
        tracing::debug!(invoice_id = %invoice_id, "Update changed nothing");
        return Ok(Json(InvoiceResponse::from(plan.invoice)));
    }

    state
        .invoices
        .replace(&plan.invoice, existing.version)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::Conflict(_)) {
                metrics::record_update_conflict();
                tracing::warn!(invoice_id = %invoice_id, "Concurrent update rejected");
            }
        })?;
    metrics::record_invoice_updated(plan.recomputed);

    tracing::info!(
        invoice_id = %invoice_id,
        version = plan.invoice.version,
        recomputed = plan.recomputed,
        "Invoice updated"
    );

    Ok(Json(InvoiceResponse::from(plan.invoice)))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.invoices.delete(&invoice_id).await? {
        return Err(not_found());
    }
    metrics::record_invoice_deleted();

    tracing::info!(invoice_id = %invoice_id, "Invoice deleted");

    Ok(Json(MessageResponse::new("Invoice deleted successfully")))
}
