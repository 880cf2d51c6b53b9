// ── Controller identities ──
//
// Parses the `host:credential[,host:credential...]` controller list given on the command line.
// Parsing is all-or-nothing: one bad entry rejects the whole list before
// any fetch starts.

use secrecy::SecretString;

use crate::error::CoreError;

/// One controller to query. List order is fetch and output order.
#[derive(Debug, Clone)]
pub struct Controller {
    /// Host, optionally with `:port`. Never carries a scheme.
    pub hostname: String,
    /// Token sent as the `Basic` authorization value.
    pub credential: SecretString,
}

impl Controller {
    pub fn new(hostname: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            credential: SecretString::from(credential.into()),
        }
    }
}

/// Parse a comma-separated list of `host:credential` pairs.
///
/// - A leading `scheme://` on the host is stripped.
/// - Each pair splits on its **last** colon, so `host:8443:token` yields
///   host `host:8443`.
/// - Whitespace around each pair is ignored; an empty pair is an error.
pub fn parse_controllers(spec: &str) -> Result<Vec<Controller>, CoreError> {
    if spec.trim().is_empty() {
        return Err(CoreError::NoControllers);
    }

    spec.split(',').map(parse_entry).collect()
}

fn parse_entry(raw: &str) -> Result<Controller, CoreError> {
    let entry = raw.trim();
    let invalid = |reason: &str| CoreError::InvalidControllerSpec {
        entry: redact_entry(entry),
        reason: reason.into(),
    };

    if entry.is_empty() {
        return Err(invalid("empty entry"));
    }

    let without_scheme = strip_scheme(entry);
    let (host, credential) = without_scheme
        .rsplit_once(':')
        .ok_or_else(|| invalid("expected host:credential"))?;

    if host.is_empty() {
        return Err(invalid("host is empty"));
    }
    if credential.is_empty() {
        return Err(invalid("credential is empty"));
    }

    Ok(Controller::new(host, credential))
}

/// Strip `scheme://` when the text before `://` is a valid URI scheme.
fn strip_scheme(entry: &str) -> &str {
    let Some((scheme, rest)) = entry.split_once("://") else {
        return entry;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid { rest } else { entry }
}

/// Mask one entry for display: everything after the first colon past the
/// scheme is hidden, and an entry with no colon is hidden entirely.
pub fn redact_entry(entry: &str) -> String {
    let entry = entry.trim();
    if entry.is_empty() {
        return String::new();
    }
    match strip_scheme(entry).split_once(':') {
        Some((host, _)) => format!("{host}:***"),
        None => "***".to_owned(),
    }
}

/// Mask every entry of a comma-separated controller list.
pub fn redact_controllers(spec: &str) -> String {
    spec.split(',').map(redact_entry).collect::<Vec<_>>().join(",")
}
