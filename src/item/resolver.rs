/// Item Resolver - cache-first lookup of item flavors
use crate::{
    config::ResolverConfig,
    error::ResolverResult,
    item::{
        annotate_error_message, HttpItemFetcher, ItemCache, ItemFetcher, ItemFlavorKey,
        ItemPayload, ItemResponse, MISSING_IDENTIFIER_MESSAGE,
    },
};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves item flavors, fetching each (identifier, flavor) pair at most once
/// per successful fetch
#[derive(Clone)]
pub struct ItemResolver {
    config: Arc<ResolverConfig>,
    cache: ItemCache,
    fetcher: Arc<dyn ItemFetcher>,
}

impl ItemResolver {
    /// Create a resolver backed by the HTTP fetcher
    pub fn new(config: ResolverConfig) -> ResolverResult<Self> {
        let fetcher = HttpItemFetcher::new(config.request_timeout())?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Create a resolver with a custom transport
    pub fn with_fetcher(config: ResolverConfig, fetcher: Arc<dyn ItemFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            cache: ItemCache::new(),
            fetcher,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn cache(&self) -> &ItemCache {
        &self.cache
    }

    /// Resolve an item flavor to its content
    ///
    /// Resolution order:
    /// 1. Reject a missing identifier with 400
    /// 2. Serve from cache (no network I/O)
    /// 3. Fetch remotely, caching the body on success
    ///
    /// A 2xx response without an item body still reports success, with no
    /// data and no cache entry.
    ///
    /// Every outcome comes back as an envelope; fetch failures are never
    /// propagated as errors.
    pub async fn resolve(&self, identifier: Option<&str>, flavor: &str) -> ItemResponse<String> {
        let Some(identifier) = identifier else {
            warn!("Item fetch rejected: {}", MISSING_IDENTIFIER_MESSAGE);
            return ItemResponse::failure(
                StatusCode::BAD_REQUEST.as_u16(),
                Some(MISSING_IDENTIFIER_MESSAGE.to_string()),
            );
        };

        let key = ItemFlavorKey::new(identifier, flavor);

        if let Some(body) = self.cache.get(&key).await {
            debug!(identifier, flavor, "item flavor served from cache");
            return ItemResponse::success(body);
        }

        let uri = self.item_uri(identifier, flavor);
        debug!(%uri, "fetching item flavor");

        match self.fetcher.get_item(&uri, &self.config.token).await {
            Ok(ItemPayload { xml: Some(body) }) => {
                self.cache.insert(key, body.clone()).await;
                info!(identifier, flavor, "item flavor cached");
                ItemResponse::success(body)
            }
            Ok(ItemPayload { xml: None }) => {
                // Nothing to cache; the next resolve fetches again
                warn!(identifier, flavor, "item service returned no item body");
                ItemResponse::success_without_data()
            }
            Err(e) => {
                // No HTTP response at all: report the service as unavailable
                let status = e
                    .status
                    .unwrap_or_else(|| StatusCode::SERVICE_UNAVAILABLE.as_u16());
                warn!(identifier, flavor, status, "item fetch failed: {}", e);
                ItemResponse::failure(
                    status,
                    annotate_error_message(e.message.as_deref(), identifier),
                )
            }
        }
    }

    /// Build the fetch target for an item flavor
    pub fn item_uri(&self, identifier: &str, flavor: &str) -> String {
        format!(
            "{}{}/{}/content/items/identifier/{}/flavor/{}",
            self.config.base_url, self.config.api_prefix, self.config.project_guid, identifier, flavor
        )
    }
}
