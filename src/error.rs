use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Worker pool error: {0}")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Pool(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

/// Errors that abort an ingestion run.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to download dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Spreadsheet has no worksheet")]
    EmptyWorkbook,

    #[error("Column {0} is missing from the dataset")]
    MissingColumn(String),

    #[error("Unknown unit {unit:?} in column {column}")]
    UnknownUnit { column: String, unit: String },

    #[error("Invalid number {value:?} in column {column}")]
    InvalidNumber { column: String, value: String },

    #[error("Invalid CSS selector {0:?}")]
    Selector(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] PoolError),
}
