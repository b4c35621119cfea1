use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Input the engine refuses to total.
    #[error("{0}")]
    Validation(String),

    /// Arithmetic that should never fail on valid input. Treated as a defect.
    #[error("computation failed: {0}")]
    Computation(String),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(msg) => AppError::Unprocessable(anyhow::anyhow!(msg)),
            EngineError::Computation(msg) => {
                tracing::error!(error = %msg, "Invoice computation failed");
                AppError::InternalError(anyhow::anyhow!("computation failed: {}", msg))
            }
        }
    }
}
