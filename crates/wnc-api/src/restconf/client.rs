// RESTCONF HTTP client
//
// Wraps `reqwest::Client` with controller-specific URL construction,
// credential headers, and module-qualified envelope unwrapping. Endpoint
// modules (access_point, client_oper, etc.) are implemented as inherent
// methods in separate files to keep this module focused on transport.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Media type for YANG-modelled JSON payloads.
pub const YANG_JSON: &str = "application/yang-data+json";

/// `ietf-restconf:errors` body returned with non-2xx statuses.
#[derive(Deserialize)]
struct RestconfErrors {
    #[serde(rename = "ietf-restconf:errors", alias = "errors")]
    errors: RestconfErrorList,
}

#[derive(Deserialize)]
struct RestconfErrorList {
    #[serde(default)]
    error: Vec<RestconfErrorEntry>,
}

#[derive(Deserialize)]
struct RestconfErrorEntry {
    #[serde(rename = "error-tag", default)]
    tag: Option<String>,
    #[serde(rename = "error-message", default)]
    message: Option<String>,
}

/// Every RESTCONF data response is a single-member object keyed by the
/// module-qualified node name, e.g. `{"Cisco-IOS-XE-...:capwap-data": [...]}`.
#[derive(Deserialize)]
#[serde(transparent)]
struct Envelope<T>(BTreeMap<String, T>);

/// Raw HTTP client for one controller's RESTCONF data tree.
///
/// All endpoint methods return the unwrapped payload; the module-qualified
/// envelope is stripped before the caller sees it.
pub struct RestconfClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl RestconfClient {
    /// Create a client for `host` from a `TransportConfig`.
    ///
    /// `host` may carry a port (`wnc1.example.com:8443`). The credential is
    /// sent verbatim as a `Basic` authorization token on every request.
    pub fn new(
        host: &str,
        credential: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("https://{host}/restconf/data/"))?;
        Self::with_base_url(base_url, credential, transport)
    }

    /// Create a client rooted at an explicit RESTCONF data URL.
    ///
    /// `base_url` must end with a slash (e.g.
    /// `http://127.0.0.1:9000/restconf/data/`).
    pub fn with_base_url(
        base_url: Url,
        credential: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut auth = HeaderValue::from_str(&format!("Basic {}", credential.expose_secret()))
            .map_err(|e| Error::InvalidCredential(e.to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(YANG_JSON));

        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url,
            timeout: transport.timeout,
        })
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a data-tree path such as
    /// `Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-tags/rf-tag`.
    ///
    /// The path is joined as `./{path}` because a module-qualified first
    /// segment (`module:node`) would otherwise parse as a URL scheme.
    pub(crate) fn data_url(&self, path: &str) -> Result<Url, Error> {
        let relative = format!("./{}", path.trim_start_matches('/'));
        Ok(self.base_url.join(&relative)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a data node and unwrap its module-qualified envelope.
    ///
    /// HTTP 204 and a body without the node both decode to `T::default()`,
    /// which is how the controller reports an empty list.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.data_url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                Error::Transport(e)
            }
        })?;

        self.parse_envelope(resp).await
    }

    /// Map the HTTP status, then decode `{ "<module>:<node>": T }`.
    async fn parse_envelope<T>(&self, resp: reqwest::Response) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let status = resp.status();

        if status == reqwest::StatusCode::NO_CONTENT {
            trace!("empty data node (HTTP 204)");
            return Ok(T::default());
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "credential rejected by controller".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Restconf {
                status: status.as_u16(),
                message: restconf_error_message(&body),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        Ok(envelope.0.into_values().next().unwrap_or_default())
    }
}

/// Best-effort extraction of a human-readable message from an error body.
fn restconf_error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<RestconfErrors>(body) {
        if let Some(first) = parsed.errors.error.into_iter().next() {
            return match (first.tag, first.message) {
                (Some(tag), Some(msg)) => format!("{tag}: {msg}"),
                (Some(only), None) | (None, Some(only)) => only,
                (None, None) => "unspecified error".into(),
            };
        }
    }
    body.chars().take(200).collect()
}
