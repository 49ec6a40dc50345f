/// Item Fetcher - authenticated GET against the remote item service
use crate::error::ResolverResult;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Success payload returned by the item service
///
/// `xml` is `None` when a 2xx body carries no string `xml` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPayload {
    /// Item content for the requested flavor
    pub xml: Option<String>,
}

impl ItemPayload {
    pub fn new(xml: impl Into<String>) -> Self {
        Self {
            xml: Some(xml.into()),
        }
    }

    /// Pull the `xml` field out of a raw response body
    ///
    /// Bodies that are not JSON objects, or whose `xml` is not a string,
    /// yield an empty payload rather than an error.
    pub fn from_body(body: &str) -> Self {
        let xml = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("xml").and_then(Value::as_str).map(str::to_string));
        Self { xml }
    }
}

/// Structured failure from a fetch
///
/// `status` is `None` when no HTTP response arrived at all (connection
/// refused, DNS failure, timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl FetchError {
    pub fn new(status: Option<u16>, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Failure for a response that came back with a non-2xx status
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status: Some(status.as_u16()),
            message: Some(format!(
                "Request failed with status code {}",
                status.as_u16()
            )),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            status: e.status().map(|s| s.as_u16()),
            message: Some(e.to_string()),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.message.as_deref()) {
            (Some(status), Some(message)) => write!(f, "{} ({})", message, status),
            (Some(status), None) => write!(f, "fetch failed ({})", status),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("fetch failed"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Transport capability used by `ItemResolver`
///
/// Implementations perform one authenticated GET and report either the decoded
/// payload or a structured failure. They never retry.
#[async_trait]
pub trait ItemFetcher: Send + Sync {
    /// Fetch the item payload at `uri`, authorizing with `token`
    async fn get_item(&self, uri: &str, token: &str) -> Result<ItemPayload, FetchError>;
}

/// `reqwest`-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpItemFetcher {
    http_client: Client,
}

impl HttpItemFetcher {
    /// Create a new HTTP fetcher
    pub fn new(timeout: Duration) -> ResolverResult<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("item-resolver/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http_client })
    }

    /// Wrap an already configured client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ItemFetcher for HttpItemFetcher {
    async fn get_item(&self, uri: &str, token: &str) -> Result<ItemPayload, FetchError> {
        let response = self
            .http_client
            .get(uri)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        debug!(%uri, %status, "item service responded");

        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        // Body read errors carry no status and surface as transport failures
        let body = response.text().await?;
        Ok(ItemPayload::from_body(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_failure_message() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message.as_deref(), Some("Request failed with status code 404"));
        assert_eq!(err.to_string(), "Request failed with status code 404 (404)");
    }

    #[test]
    fn test_payload_decodes_xml_field() {
        let payload = ItemPayload::from_body(r#"{"xml":"<assessmentItem/>","identifier":"ITEM-1"}"#);
        assert_eq!(payload, ItemPayload::new("<assessmentItem/>"));
    }

    #[test]
    fn test_payload_without_string_xml_is_empty() {
        assert_eq!(ItemPayload::from_body(r#"{"xml":null}"#).xml, None);
        assert_eq!(ItemPayload::from_body(r#"{"xml":42}"#).xml, None);
        assert_eq!(ItemPayload::from_body(r#"{"identifier":"ITEM-1"}"#).xml, None);
        assert_eq!(ItemPayload::from_body("<assessmentItem/>").xml, None);
        assert_eq!(ItemPayload::from_body("").xml, None);
    }

    #[test]
    fn test_payload_keeps_empty_string() {
        assert_eq!(ItemPayload::from_body(r#"{"xml":""}"#), ItemPayload::new(""));
    }
}
