use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mna_valuation_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => match e {
                CoreError::InvalidInput(_) | CoreError::InvalidTaxInput(_) => {
                    StatusCode::BAD_REQUEST
                }
                CoreError::ConfigIO(_)
                | CoreError::InvalidConfigValue(_)
                | CoreError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
