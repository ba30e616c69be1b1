use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::usecases::places::PlacesError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<&'static str>>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("Place not found")]
    NotFound,

    /// `message` is what the client sees; the cause was already logged.
    #[error("{message}")]
    Internal { message: &'static str },
}

impl AppError {
    /// `failure` is the client-facing message used when storage fails.
    pub fn from_places(err: PlacesError, failure: &'static str) -> Self {
        match err {
            PlacesError::MissingRequiredFields(fields) => AppError::Validation {
                message: "Missing required fields",
                fields,
            },
            PlacesError::InvalidRequiredFields(fields) => AppError::Validation {
                message: "Invalid required fields",
                fields,
            },
            PlacesError::NoFieldsToUpdate => {
                AppError::BadRequest("No fields to update".to_string())
            }
            PlacesError::NotFound(_) => AppError::NotFound,
            PlacesError::Storage(_) => AppError::Internal { message: failure },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = self.to_string();
        let fields = match self {
            AppError::Validation { fields, .. } => Some(fields),
            _ => None,
        };

        (status, Json(ErrorResponse { error, fields })).into_response()
    }
}
