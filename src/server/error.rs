use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::errors::PlanError;

/// plan error with an HTTP response mapping
#[derive(Debug)]
pub struct AppError(pub PlanError);

impl AppError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            PlanError::InvalidPrincipal { .. }
            | PlanError::InvalidDownPayment { .. }
            | PlanError::DownPaymentExceedsPrincipal { .. }
            | PlanError::InvalidTerm { .. }
            | PlanError::InvalidRate { .. }
            | PlanError::InvalidIncome { .. }
            | PlanError::UnsupportedCountry { .. } => StatusCode::BAD_REQUEST,
            PlanError::RateNotFound { .. } | PlanError::Network(_) => StatusCode::BAD_GATEWAY,
            PlanError::DocumentRender { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = axum::Json(json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}

/// result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
