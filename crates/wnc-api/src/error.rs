use thiserror::Error;

/// Top-level error type for the `wnc-api` crate.
///
/// Covers every failure mode of a single RESTCONF fetch: transport,
/// authentication, HTTP status, and payload decoding. `wnc-core` treats any
/// of these as "collection absent" for the controller that produced it.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credential rejected by the controller (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Credential cannot be carried in an HTTP header.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake, certificate, or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── RESTCONF ────────────────────────────────────────────────────
    /// Non-success HTTP status, with the message parsed from the
    /// `ietf-restconf:errors` body when present.
    #[error("RESTCONF error (HTTP {status}): {message}")]
    Restconf { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the controller rejected the credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if the request did not complete within the timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the requested data node does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Restconf { status: 404, .. })
    }

    /// HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::Restconf { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
