//! Error types for the OpenF1 API client.
//!
//! # Design
//! Transport failures are split into `Connection` and `Timeout` because
//! callers frequently treat "the API is unreachable" differently from "the
//! API is slow." Any non-2xx response lands in `Api` with the raw status code
//! and body for debugging. Schema mismatches land in `Validation`, whether
//! they come from a malformed response element or from a comparison filter
//! with no bounds.

use thiserror::Error;

/// Errors returned by `OpenF1Client` and `AsyncOpenF1Client` operations.
///
/// Every failure surfaces as exactly one variant, raised at the point where
/// the request or parse failed. No operation retries internally, and no
/// operation returns partial data alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never reached the API (DNS failure, refused connection,
    /// TLS handshake failure).
    #[error("connection error: {0}")]
    Connection(String),

    /// The request exceeded the client's configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The API returned a non-2xx response.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// Upstream HTTP status code.
        status: u16,
        /// Raw response body, useful for diagnosing upstream rejections.
        body: String,
    },

    /// A query filter or response body failed schema validation.
    #[error("validation error: {0}")]
    Validation(String),
}
