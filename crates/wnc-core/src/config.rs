// ── Per-invocation query configuration ──
//
// Built once by the CLI and passed by reference into every aggregator.
// Nothing here is mutated after construction.

use std::time::Duration;

use wnc_api::{TlsMode, TransportConfig};

use crate::error::CoreError;

/// Whether controller certificates are verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVerification {
    /// Verify against the system CA store.
    #[default]
    Verify,
    /// Accept any certificate (self-signed controllers).
    SkipVerify,
}

impl From<TlsVerification> for TlsMode {
    fn from(tls: TlsVerification) -> Self {
        match tls {
            TlsVerification::Verify => Self::Verify,
            TlsVerification::SkipVerify => Self::SkipVerify,
        }
    }
}

/// Transport and scheduling settings shared by every controller fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub tls: TlsVerification,
    /// Applied to every request, not per collection.
    pub timeout: Duration,
    /// Controllers fetched at once. 1 means strictly one after another.
    pub parallelism: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            tls: TlsVerification::Verify,
            timeout: Duration::from_secs(60),
            parallelism: 1,
        }
    }
}

impl QueryOptions {
    /// Validate raw settings. Timeout and parallelism must be positive.
    pub fn new(
        tls: TlsVerification,
        timeout_secs: u64,
        parallelism: usize,
    ) -> Result<Self, CoreError> {
        if timeout_secs == 0 {
            return Err(CoreError::InvalidOption {
                field: "timeout".into(),
                reason: "must be a positive number of seconds".into(),
            });
        }
        if parallelism == 0 {
            return Err(CoreError::InvalidOption {
                field: "parallelism".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(Self {
            tls,
            timeout: Duration::from_secs(timeout_secs),
            parallelism,
        })
    }

    /// Transport settings for the API client.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls.into(),
            timeout: self.timeout,
        }
    }
}
