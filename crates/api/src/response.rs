//! Uniform response envelope for every API operation.
//!
//! Success bodies look like `{ "ok": true, "data": ... }`, error bodies like
//! `{ "ok": false, "message": "..." }`. The status code is carried as the
//! HTTP status, not in the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Payload<T> {
    Data { data: T },
    Message { message: String },
}

/// A success or error result paired with the HTTP status it is sent with.
///
/// ```ignore
/// Ok(Envelope::with_status(role, StatusCode::CREATED))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    ok: bool,
    #[serde(skip)]
    status: StatusCode,
    #[serde(flatten)]
    payload: Payload<T>,
}

impl<T: Serialize> Envelope<T> {
    /// `200 OK` carrying `data`.
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    /// Success carrying `data` with an explicit status.
    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self {
            ok: true,
            status,
            payload: Payload::Data { data },
        }
    }

    /// Error carrying a human-readable message.
    pub fn error(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            ok: false,
            status,
            payload: Payload::Message {
                message: message.into(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        match &self.payload {
            Payload::Data { data } => Some(data),
            Payload::Message { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.payload {
            Payload::Data { .. } => None,
            Payload::Message { message } => Some(message),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self.payload {
            Payload::Data { data } => Some(data),
            Payload::Message { .. } => None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
