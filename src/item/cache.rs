/// Item Cache - in-memory store of fetched item bodies
use crate::item::ItemFlavorKey;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Insert-only cache of item bodies keyed by (identifier, flavor)
///
/// There is no expiry and no removal; the cache lives exactly as long as the
/// resolver that owns it.
#[derive(Debug, Clone, Default)]
pub struct ItemCache {
    items: Arc<RwLock<HashMap<ItemFlavorKey, String>>>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached body
    pub async fn get(&self, key: &ItemFlavorKey) -> Option<String> {
        self.items.read().await.get(key).cloned()
    }

    /// Cache a body, replacing any concurrent write for the same key
    pub async fn insert(&self, key: ItemFlavorKey, body: String) {
        self.items.write().await.insert(key, body);
    }

    pub async fn contains(&self, key: &ItemFlavorKey) -> bool {
        self.items.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
