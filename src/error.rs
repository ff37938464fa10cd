//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. API
//! failures are classified by HTTP status so callers can match on what went
//! wrong without inspecting status codes themselves.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The secret was missing or rejected (HTTP 401).
    #[error("{message}")]
    Authentication { message: String, detail: Value },

    /// The request was malformed (HTTP 400).
    #[error("{message}")]
    BadRequest { message: String, detail: Value },

    /// The request was well-formed but semantically invalid (HTTP 422).
    #[error("{message}")]
    Validation { message: String, detail: Value },

    /// Any other non-success response from the API.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        detail: Value,
    },

    #[error("missing API secret: {0}")]
    MissingSecret(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify a non-success API response by its status code.
    ///
    /// The failure detail is the body's `detail` field when present, the
    /// whole parsed document otherwise, and the raw text as a JSON string if
    /// the body is not JSON at all. The display message is the detail itself
    /// when it is a string, or its compact JSON rendering otherwise.
    pub(crate) fn from_api_response(status: u16, body: &str) -> Self {
        let detail = match serde_json::from_str::<Value>(body) {
            Ok(document) => match document.get("detail") {
                Some(detail) if !detail.is_null() => detail.clone(),
                _ => document,
            },
            Err(_) => Value::String(body.to_string()),
        };
        let message = match &detail {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        match status {
            401 => Error::Authentication { message, detail },
            400 => Error::BadRequest { message, detail },
            422 => Error::Validation { message, detail },
            _ => Error::Api {
                status,
                message,
                detail,
            },
        }
    }

    /// The HTTP status this error was classified from, if it came from an
    /// API response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::BadRequest { .. } => Some(400),
            Error::Validation { .. } => Some(422),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The structured failure detail reported by the API, if any.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Error::Authentication { detail, .. }
            | Error::BadRequest { detail, .. }
            | Error::Validation { detail, .. }
            | Error::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
