//! HTTP clients for the suggestion gateway's upstream services.
//!
//! - [`geocode`] -- reverse geocoding via a Nominatim-compatible endpoint.
//! - [`gemini`] -- text generation via the Gemini `generateContent` endpoint.
//!
//! Both clients take their base URL at construction so tests can point them
//! at a local stub, and both bound every call with a request timeout; a hung
//! upstream surfaces as an error instead of a hung handler.

pub mod geocode;
pub mod gemini;

use std::time::Duration;

/// Errors from the upstream-service client layer.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("upstream error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The upstream answered 2xx but the payload carried no usable content.
    #[error("upstream reply carried no content")]
    EmptyReply,
}

/// Build a `reqwest::Client` with the given request timeout.
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("reqwest client construction cannot fail with these options")
}
