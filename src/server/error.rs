//! Server Error Types
//!
//! Every failure leaves the server as a JSON body carrying a machine code, a
//! message and a request id. A bad chart reference is the caller's fault; a
//! chart that fails to render is a defect in the dashboard itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::chart::ChartError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No chart at this position or file name
    #[error("Chart {reference} not found (dashboard has {available} charts)")]
    UnknownChart { reference: String, available: usize },

    /// Chart index path segment is not a number
    #[error("Chart index must be a non-negative integer, got '{0}'")]
    BadChartIndex(String),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn unknown_chart(reference: impl ToString, available: usize) -> Self {
        ApiError::UnknownChart {
            reference: reference.to_string(),
            available,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownChart { .. } => StatusCode::NOT_FOUND,
            ApiError::BadChartIndex(_) => StatusCode::BAD_REQUEST,
            ApiError::Chart(_) | ApiError::Internal(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UnknownChart { .. } => "NOT_FOUND",
            ApiError::BadChartIndex(_) => "BAD_CHART_INDEX",
            ApiError::Chart(ChartError::Schema(_)) => "SCHEMA_ERROR",
            ApiError::Chart(ChartError::Render(_)) => "RENDER_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Io(_) => "IO_ERROR",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(request_id = %request_id, code = self.code(), "{}", self);
        } else {
            tracing::debug!(request_id = %request_id, code = self.code(), "{}", self);
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{RenderError, SchemaError};

    #[test]
    fn test_status_and_codes() {
        let err = ApiError::unknown_chart(9, 7);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Chart 9 not found (dashboard has 7 charts)");

        let err = ApiError::BadChartIndex("abc".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_CHART_INDEX");

        let err = ApiError::from(ChartError::from(RenderError::EmptyTitle));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "RENDER_ERROR");

        let err = ApiError::from(ChartError::from(SchemaError::MissingField {
            table: "products".to_string(),
            field: "Region".to_string(),
        }));
        assert_eq!(err.code(), "SCHEMA_ERROR");
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::BadChartIndex("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
