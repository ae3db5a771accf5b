use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use mna_valuation_core::scenarios::{rank_scenarios, ScenarioConfig, ScenarioResult};
use mna_valuation_core::valuation::{CompanyFinancials, ValuationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioAnalysisRequest {
    financials: CompanyFinancials,
    acquisition_cost: f64,
    /// Falls back to the configured default set when absent
    #[serde(default)]
    scenarios: Option<Vec<ScenarioConfig>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioAnalysisResponse {
    valuation: ValuationResult,
    scenarios: Vec<ScenarioResult>,
    /// Scenario ids from highest to lowest valuation
    ranking: Vec<String>,
}

async fn compute_valuation(
    State(state): State<Arc<AppState>>,
    Json(financials): Json<CompanyFinancials>,
) -> ApiResult<Json<ValuationResult>> {
    let result = state.valuation_service.compute_valuation(&financials)?;
    Ok(Json(result))
}

async fn analyze_scenarios(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScenarioAnalysisRequest>,
) -> ApiResult<Json<ScenarioAnalysisResponse>> {
    let service = &state.valuation_service;
    let valuation = service.compute_valuation(&request.financials)?;
    let configs = request
        .scenarios
        .unwrap_or_else(|| service.default_scenarios().to_vec());
    let scenarios = service.generate_scenarios(&valuation, &configs, request.acquisition_cost)?;
    let ranking = rank_scenarios(&scenarios);
    Ok(Json(ScenarioAnalysisResponse {
        valuation,
        scenarios,
        ranking,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/valuations", post(compute_valuation))
        .route("/valuations/scenarios", post(analyze_scenarios))
}
