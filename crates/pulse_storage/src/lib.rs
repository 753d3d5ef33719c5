use async_trait::async_trait;
use pulse_core::{ArticleStore, Error, Result};
use std::sync::Arc;
use tracing::info;

pub mod backends;
pub mod index;

pub use backends::*;
pub use index::ArticleIndex;

/// A store that can be opened by name from configuration.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn name() -> &'static str;
    async fn open() -> Result<Self> where Self: Sized;
}

async fn open_backend<T: StorageBackend + ArticleStore + 'static>() -> Result<Arc<dyn ArticleStore>> {
    let storage = T::open().await?;
    info!("💾 Opened {} article store", T::name());
    Ok(Arc::new(storage))
}

/// Opens the backend registered under `name`.
pub async fn create_storage(name: &str) -> Result<Arc<dyn ArticleStore>> {
    match name {
        n if n == MemoryStorage::name() => open_backend::<MemoryStorage>().await,
        other => Err(Error::Storage(format!("Unknown storage backend: {}", other))),
    }
}
