/// Configuration management for the item resolver
use crate::error::{ResolverError, ResolverResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote item service
///
/// Every field falls back to its default when omitted, so `{}` is a valid
/// (if not very useful) configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Root address of the remote service (e.g. `https://content.example.com`)
    pub base_url: String,
    /// Path segment prepended to every request (e.g. `/api/v1`)
    pub api_prefix: String,
    /// Bearer token sent on every request
    pub token: String,
    /// Project whose items are queried
    pub project_guid: String,
    /// Transport timeout for a single fetch
    pub request_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_prefix: String::new(),
            token: String::new(),
            project_guid: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ResolverConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_prefix: impl Into<String>,
        token: impl Into<String>,
        project_guid: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: api_prefix.into(),
            token: token.into(),
            project_guid: project_guid.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> ResolverResult<Self> {
        dotenv::dotenv().ok();

        let request_timeout_secs = env::var("ITEM_RESOLVER_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ResolverError::Config("Invalid request timeout".to_string()))?;

        Ok(Self {
            base_url: env::var("ITEM_RESOLVER_BASE_URL").unwrap_or_default(),
            api_prefix: env::var("ITEM_RESOLVER_API_PREFIX").unwrap_or_default(),
            token: env::var("ITEM_RESOLVER_TOKEN").unwrap_or_default(),
            project_guid: env::var("ITEM_RESOLVER_PROJECT_GUID").unwrap_or_default(),
            request_timeout_secs,
        })
    }

    /// Parse configuration from a JSON object
    pub fn from_json(raw: &str) -> ResolverResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ResolverResult<()> {
        if !self.base_url.is_empty() {
            let parsed = Url::parse(&self.base_url).map_err(|e| {
                ResolverError::Validation(format!("Invalid base URL '{}': {}", self.base_url, e))
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ResolverError::Validation(format!(
                    "Base URL must use http or https; got '{}://'",
                    parsed.scheme()
                )));
            }
        }

        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ResolverError::Validation(
                "API prefix must start with '/'".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ResolverError::Validation(
                "Request timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let config = ResolverConfig::from_json(r#"{"baseUrl":"https://items.test"}"#).unwrap();

        assert_eq!(config.base_url, "https://items.test");
        assert_eq!(config.api_prefix, "");
        assert_eq!(config.token, "");
        assert_eq!(config.project_guid, "");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = ResolverConfig::from_json(
            r#"{"baseUrl":"http://localhost:8080","apiPrefix":"/api","token":"t0k3n","projectGuid":"p-1"}"#,
        )
        .unwrap();

        assert_eq!(
            config,
            ResolverConfig::new("http://localhost:8080", "/api", "t0k3n", "p-1")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = ResolverConfig::new("ftp://items.test", "", "", "");
        assert!(matches!(config.validate(), Err(ResolverError::Validation(_))));

        let config = ResolverConfig::new("not a url", "", "", "");
        assert!(config.validate().is_err());

        let config = ResolverConfig::new("https://items.test", "api", "", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(ResolverConfig::default().validate().is_ok());
    }
}
