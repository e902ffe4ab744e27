use std::collections::BTreeSet;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;

use crate::constants::{ERR_INTERNAL, ERR_UNEXPECTED_QUERY_PARAMS};
use crate::models::{DetailResponse, DetailsResponse, ReasonResponse};
use crate::validators::PaginationError;

#[derive(Debug)]
pub enum ApiError {
    /// Query parameters the route does not accept.
    BadQueryParameter(BTreeSet<String>),
    PaginationOutOfBounds(String),
    NotFound(String),
    MalformedIdentifier(String),
    Database(String),
    Internal(String),
}

/// Render names the way a set literal reads: `{'limit', 'where'}`.
pub fn format_param_set(names: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    format!("{{{}}}", quoted.join(", "))
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadQueryParameter(names) => {
                write!(f, "{}: {}", ERR_UNEXPECTED_QUERY_PARAMS, format_param_set(names))
            }
            ApiError::PaginationOutOfBounds(reason) => write!(f, "{}", reason),
            ApiError::NotFound(detail) => write!(f, "{}", detail),
            ApiError::MalformedIdentifier(detail) => write!(f, "{}", detail),
            ApiError::Database(message) => write!(f, "Database error: {}", message),
            ApiError::Internal(message) => write!(f, "Internal error: {}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadQueryParameter(_) | ApiError::PaginationOutOfBounds(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedIdentifier(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            ApiError::BadQueryParameter(_) => builder.json(DetailsResponse {
                details: self.to_string(),
            }),
            ApiError::PaginationOutOfBounds(reason) => builder.json(ReasonResponse {
                reason: reason.clone(),
            }),
            ApiError::NotFound(detail) | ApiError::MalformedIdentifier(detail) => {
                builder.json(DetailResponse {
                    detail: detail.clone(),
                })
            }
            ApiError::Database(_) | ApiError::Internal(_) => {
                error!("{}", self);
                builder.json(DetailResponse {
                    detail: ERR_INTERNAL.to_string(),
                })
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        ApiError::PaginationOutOfBounds(err.to_string())
    }
}
