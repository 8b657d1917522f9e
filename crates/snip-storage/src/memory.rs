use async_trait::async_trait;
use dashmap::DashMap;
use snip_core::store::{LinkStore, Result};
use snip_core::{Link, ShortCode};

/// In-memory implementation of the [`LinkStore`] trait using DashMap.
///
/// Maps short codes to original URLs. Data does not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkStore {
    storage: DashMap<String, String>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn put(&self, link: &Link) -> Result<()> {
        self.storage
            .insert(link.short_url.as_str().to_owned(), link.original_url.clone());
        Ok(())
    }

    async fn get_by_short_code(&self, code: &ShortCode) -> Result<Option<Link>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| Link::new(entry.value().clone(), code.clone())))
    }
}
