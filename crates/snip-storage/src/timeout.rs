use async_trait::async_trait;
use snip_core::store::{LinkStore, Result};
use snip_core::{Link, ShortCode, StorageError};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// A store decorator that bounds every call with a timeout.
///
/// When the inner call does not finish in time it is dropped and
/// [`StorageError::Timeout`] is returned.
#[derive(Debug, Clone)]
pub struct TimeoutLinkStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: LinkStore> TimeoutLinkStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout = ?self.timeout, "store call timed out");
                Err(StorageError::Timeout(format!(
                    "{} did not complete within {:?}",
                    operation, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl<S: LinkStore> LinkStore for TimeoutLinkStore<S> {
    async fn put(&self, link: &Link) -> Result<()> {
        self.bounded("put", self.inner.put(link)).await
    }

    async fn get_by_short_code(&self, code: &ShortCode) -> Result<Option<Link>> {
        self.bounded("get_by_short_code", self.inner.get_by_short_code(code))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryLinkStore;

    /// A store whose calls never finish quickly.
    struct SlowStore {
        delay: Duration,
    }

    #[async_trait]
    impl LinkStore for SlowStore {
        async fn put(&self, _link: &Link) -> Result<()> {
            tokio::time::sleep(self.delay).await;
            Ok(())
        }

        async fn get_by_short_code(&self, _code: &ShortCode) -> Result<Option<Link>> {
            tokio::time::sleep(self.delay).await;
            Ok(None)
        }
    }

    #[tokio::test]
    async fn fast_calls_pass_through() {
        let store = TimeoutLinkStore::new(InMemoryLinkStore::new(), Duration::from_secs(1));
        let code = ShortCode::new_unchecked("abc123");

        store
            .put(&Link::new("https://example.com", code.clone()))
            .await
            .unwrap();

        let link = store.get_by_short_code(&code).await.unwrap().unwrap();
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_get_times_out() {
        let store = TimeoutLinkStore::new(
            SlowStore {
                delay: Duration::from_secs(10),
            },
            Duration::from_millis(100),
        );

        let err = store
            .get_by_short_code(&ShortCode::new_unchecked("abc123"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Timeout(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_put_times_out() {
        let store = TimeoutLinkStore::new(
            SlowStore {
                delay: Duration::from_secs(10),
            },
            Duration::from_millis(100),
        );

        let err = store
            .put(&Link::new("https://example.com", ShortCode::new_unchecked("abc123")))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Timeout(_)));
    }
}
