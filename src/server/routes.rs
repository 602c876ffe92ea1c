use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::affordability::{self, AffordabilityRequest};
use crate::export;
use crate::rates::SUPPORTED_COUNTRIES;
use crate::schedule::AmortizationPlan;
use crate::server::error::AppResult;
use crate::server::state::AppState;
use crate::types::LoanRequest;

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `GET /countries`
pub async fn countries() -> Json<Value> {
    Json(json!({ "countries": SUPPORTED_COUNTRIES }))
}

#[derive(Debug, Deserialize)]
pub struct RateQuery {
    pub country: String,
}

/// `GET /get_rate?country=Italy`
///
/// lookup failures come back as a structured `success: false` payload so a
/// browser form stays usable without status-code handling
pub async fn get_rate(
    State(state): State<AppState>,
    Query(query): Query<RateQuery>,
) -> Json<Value> {
    match state.rates.fetch_mortgage_rate(&query.country).await {
        Ok(rate) => {
            let percent = rate.as_percentage().round_dp(2);
            info!(country = %query.country, rate = %percent, "market rate fetched");
            Json(json!({
                "success": true,
                "rate": percent.to_f64().unwrap_or_default(),
            }))
        }
        Err(err) => Json(json!({
            "success": false,
            "error": err.to_string(),
        })),
    }
}

/// `POST /calculate`
pub async fn calculate(Json(request): Json<LoanRequest>) -> AppResult<Json<Value>> {
    let plan = AmortizationPlan::generate(request)?;
    Ok(Json(export::json::plan_payload(&plan)))
}

/// `POST /affordability`
pub async fn affordability_estimate(
    Json(request): Json<AffordabilityRequest>,
) -> AppResult<Json<Value>> {
    let result = affordability::estimate(&request)?;
    Ok(Json(json!({
        "max_payment": result.max_payment.as_decimal().to_f64().unwrap_or_default(),
        "max_principal": result.max_principal.as_decimal().to_f64().unwrap_or_default(),
    })))
}

/// `POST /export_txt`
pub async fn export_txt(Json(request): Json<LoanRequest>) -> AppResult<impl IntoResponse> {
    let plan = AmortizationPlan::generate(request)?;
    let body = export::text::render_table(&plan);
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                attachment(export::text::ATTACHMENT_FILENAME),
            ),
        ],
        body,
    ))
}

/// `POST /export_pdf`
pub async fn export_pdf(Json(request): Json<LoanRequest>) -> AppResult<impl IntoResponse> {
    let plan = AmortizationPlan::generate(request)?;
    let bytes = export::pdf::render_document(&plan)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment(export::pdf::ATTACHMENT_FILENAME),
            ),
        ],
        bytes,
    ))
}

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}
