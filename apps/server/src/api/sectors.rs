use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use mna_valuation_core::sectors::{SectorMultiple, SectorResolution};

async fn list_sectors(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SectorMultiple>>> {
    Ok(Json(state.valuation_service.sectors().to_vec()))
}

/// Resolves a free-form key; unknown keys resolve to the default sector.
async fn resolve_sector(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SectorResolution>> {
    Ok(Json(state.valuation_service.resolve_sector_multiple(&key)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sectors", get(list_sectors))
        .route("/sectors/{key}", get(resolve_sector))
}
