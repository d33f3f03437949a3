//! Request/response boundary for a `/process`-style endpoint.
//!
//! Transport lives elsewhere (any HTTP framework can wrap this): a handler
//! passes the raw request body to [`process_request`] and writes back the
//! status and JSON body it returns.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | rows produced | 200 | `[{"Обращение": ..., "ФИО или Номер": ...}, ...]` |
//! | no records / unreadable body | 400 | `{"error": "..."}` |
//! | anything else | 500 | `{"error": "..."}` |
//!
//! Failures never carry partial rows.

use crate::ingest::{parse_texts, InputFormat};
use crate::pipeline::Pipeline;
use crate::Error;
use serde_json::{json, Value};

/// Status and JSON body for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl ApiResponse {
    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// Whether the request succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Compact JSON body.
    #[must_use]
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}

impl From<Error> for ApiResponse {
    fn from(e: Error) -> Self {
        if e.is_client_error() {
            ApiResponse::error(400, e.to_string())
        } else {
            ApiResponse::error(500, e.to_string())
        }
    }
}

/// Run `pipeline` over a JSON request body.
pub fn process_request(pipeline: &Pipeline, body: &str) -> ApiResponse {
    if body.trim().is_empty() {
        return Error::InputEmpty.into();
    }

    let result = parse_texts(body, InputFormat::Json)
        .and_then(|texts| pipeline.run(&texts))
        .and_then(|rows| serde_json::to_value(rows).map_err(Error::from));

    match result {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => {
            log::warn!("request failed: {}", e);
            e.into()
        }
    }
}
