use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// A non-empty body that is not JSON is a 400. A missing body, a missing
/// JSON content type, missing or ill-typed fields and rule violations are a
/// 422.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::Unprocessable(anyhow::anyhow!(
                "Expected request with `Content-Type: application/json`"
            )));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::Unprocessable(anyhow::anyhow!(
                "Request body is required"
            )));
        }

        let Json(value) = Json::<T>::from_bytes(&body).map_err(|rejection| match rejection {
            JsonRejection::JsonSyntaxError(e) => {
                AppError::BadRequest(anyhow::anyhow!(e.body_text()))
            }
            other => AppError::Unprocessable(anyhow::anyhow!(other.body_text())),
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
