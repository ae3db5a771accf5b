use std::sync::Arc;

use crate::config::Config;
use mna_valuation_core::{ValuationConfig, ValuationService, ValuationServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub valuation_service: Arc<dyn ValuationServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let valuation_config = match &config.valuation_config_path {
        Some(path) => {
            tracing::info!("Loading valuation tables from {}", path.display());
            ValuationConfig::from_path(path)?
        }
        None => {
            tracing::info!("Using built-in valuation tables");
            ValuationConfig::default()
        }
    };
    let valuation_service = Arc::new(ValuationService::new(valuation_config)?);

    Ok(Arc::new(AppState { valuation_service }))
}
