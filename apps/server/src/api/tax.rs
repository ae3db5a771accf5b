use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use mna_valuation_core::tax::{TaxCalculationResult, TaxScenarioInput};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxOverlayRequest {
    sale_valuation: f64,
    input: TaxScenarioInput,
}

async fn apply_tax_overlay(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TaxOverlayRequest>,
) -> ApiResult<Json<TaxCalculationResult>> {
    let result = state
        .valuation_service
        .apply_tax_overlay(request.sale_valuation, &request.input)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tax", post(apply_tax_overlay))
}
