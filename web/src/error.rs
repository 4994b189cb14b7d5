/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::types::BaseResponse;
use sea_orm::{DbErr, SqlErr};
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    Database(DbErr),
    JsonParsing(JsonRejection),
    FormParsing(FormRejection),
    QueryParsing(QueryRejection),
    PathParsing(PathRejection),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::UnprocessableEntity(msg) => write!(f, "Unprocessable Entity: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::FormParsing(err) => write!(f, "Form parsing error: {}", err),
            WebError::QueryParsing(err) => write!(f, "Query parsing error: {}", err),
            WebError::PathParsing(err) => write!(f, "Path parsing error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::FormParsing(err) => Some(err),
            WebError::QueryParsing(err) => Some(err),
            WebError::PathParsing(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<FormRejection> for WebError {
    fn from(err: FormRejection) -> Self {
        WebError::FormParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::QueryParsing(err)
    }
}

impl From<PathRejection> for WebError {
    fn from(err: PathRejection) -> Self {
        WebError::PathParsing(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WebError::Forbidden(_) => StatusCode::FORBIDDEN,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Conflict(_) => StatusCode::CONFLICT,
            WebError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::Database(_) | WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // missing fields and wrong types are 422, malformed bodies 400
            WebError::JsonParsing(err) => err.status(),
            WebError::FormParsing(err) => err.status(),
            WebError::QueryParsing(err) => err.status(),
            WebError::PathParsing(err) => err.status(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            WebError::BadRequest(msg)
            | WebError::Unauthorized(msg)
            | WebError::Forbidden(msg)
            | WebError::NotFound(msg)
            | WebError::Conflict(msg)
            | WebError::UnprocessableEntity(msg) => msg,
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Database error".to_string()
            }
            WebError::JsonParsing(err) => format!("Invalid JSON: {}", err.body_text()),
            WebError::FormParsing(err) => format!("Invalid form: {}", err.body_text()),
            WebError::QueryParsing(err) => format!("Invalid query: {}", err.body_text()),
            WebError::PathParsing(err) => format!("Invalid path: {}", err.body_text()),
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                "Internal server error".to_string()
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper functions for common error scenarios
impl WebError {
    pub fn already_exists(resource: &str) -> Self {
        WebError::Conflict(format!("{} already exists", resource))
    }

    /// Maps a failed insert, reporting a unique constraint violation as a
    /// conflict on `resource`.
    pub fn from_insert(err: DbErr, resource: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!(detail = %detail, "Insert hit unique constraint");
                WebError::already_exists(resource)
            }
            _ => WebError::Database(err),
        }
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn invalid_credentials() -> Self {
        WebError::Unauthorized("Incorrect username or password".to_string())
    }

    pub fn invalid_token() -> Self {
        WebError::Unauthorized("Could not validate credentials".to_string())
    }

    pub fn inactive_user() -> Self {
        WebError::BadRequest("Inactive user".to_string())
    }

    pub fn registration_disabled() -> Self {
        WebError::BadRequest("Registration is disabled".to_string())
    }

    pub fn invalid_email() -> Self {
        WebError::BadRequest("Invalid Email".to_string())
    }

    pub fn invalid_username(reason: String) -> Self {
        WebError::BadRequest(format!("Invalid username: {}", reason))
    }

    pub fn invalid_title(reason: String) -> Self {
        WebError::BadRequest(format!("Invalid title: {}", reason))
    }
}
