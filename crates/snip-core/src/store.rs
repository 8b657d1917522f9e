use crate::error::StorageError;
use crate::link::Link;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::sync::Arc;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A key-value table of [`Link`]s keyed by their short code.
///
/// Implementations must be safe to share between concurrent requests;
/// conflicting writes to the same key are serialized by the backend.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Inserts the link, overwriting any record with the same short code.
    async fn put(&self, link: &Link) -> Result<()>;

    /// Retrieves the link stored under `code`.
    /// Returns `None` if the code does not exist.
    async fn get_by_short_code(&self, code: &ShortCode) -> Result<Option<Link>>;
}

#[async_trait]
impl<S: LinkStore + ?Sized> LinkStore for Arc<S> {
    async fn put(&self, link: &Link) -> Result<()> {
        (**self).put(link).await
    }

    async fn get_by_short_code(&self, code: &ShortCode) -> Result<Option<Link>> {
        (**self).get_by_short_code(code).await
    }
}
