//! Error types for the posts listing client.
//!
//! `NotFound` gets a dedicated variant because a 404 on the listing endpoint
//! almost always means a misconfigured base URL. All other non-200 responses
//! land in `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body did not have the `{ data: { posts } }` shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request never produced a response (connection refused, timeout).
    #[error("transport failed: {0}")]
    Transport(String),
}
