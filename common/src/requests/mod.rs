//! Request and response types for posting the form state.

use serde_json::Value;
use thiserror::Error;

/// Header carrying the CSRF token expected by the server.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Outbound request: the serialized form state and where to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub csrf_token: String,
    /// Compact JSON of the form state.
    pub body: String,
}

/// What the transport hands back once the server answered.
///
/// The body is kept as text; decoding it is part of the submission, so a
/// malformed body fails the same way a network error does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Whether the request was redirected before reaching the final response.
    pub redirected: bool,
    /// Final URL of the response, the redirect target when `redirected` is set.
    pub url: String,
    pub body: String,
}

impl HttpReply {
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// Decoded response body.
    pub response: Value,
    /// Where the browser should go next, when the server redirected.
    pub redirect: Option<String>,
}

impl SubmitOutcome {
    /// Compact rendering of the response shown to the user.
    pub fn message(&self) -> String {
        self.response.to_string()
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered outside the 2xx range.
    #[error("Response status: {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body is not JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The form state could not be serialized.
    #[error("Invalid form state: {0}")]
    Encode(#[source] serde_json::Error),
}
