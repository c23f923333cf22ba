use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::fetch::{Fetch, FetchRequest, FetchResponse};
use crate::storage::CacheStorage;

/// Name of the store holding cached audio; bump the version to start afresh
pub const CACHE_NAME: &str = "hindi-audio-cache-v1";

/// The only request path that takes part in caching
pub const CACHED_PATH: &str = "/tts";

/// Cache-or-fetch wrapper around a network fetcher
///
/// Concurrent misses for the same request are not coalesced: each one hits the
/// network and the last to finish owns the entry.
pub struct CacheInterceptor<F> {
    fetcher: F,
    storage: Arc<CacheStorage>,
}

impl<F: Fetch> CacheInterceptor<F> {
    /// Create an interceptor with its own empty storage
    pub fn new(fetcher: F) -> Self {
        Self::with_storage(fetcher, Arc::new(CacheStorage::new()))
    }

    /// Create an interceptor over shared storage
    pub const fn with_storage(fetcher: F, storage: Arc<CacheStorage>) -> Self {
        Self { fetcher, storage }
    }

    pub const fn storage(&self) -> &Arc<CacheStorage> {
        &self.storage
    }

    /// Whether `request` takes part in caching
    pub fn intercepts(request: &FetchRequest) -> bool {
        request.url.path() == CACHED_PATH
    }

    /// Serve `request` from the cache when possible, otherwise from the network
    ///
    /// # Errors
    ///
    /// Returns an error only when the network fetch fails; nothing is cached then
    pub async fn handle(&self, request: FetchRequest) -> Result<FetchResponse> {
        if !Self::intercepts(&request) {
            return self.fetcher.fetch(request).await;
        }

        let cache = self.storage.open(CACHE_NAME);

        if let Some(cached) = cache.match_request(&request) {
            tracing::debug!(url = %request.url, "cache hit");
            return Ok(cached);
        }

        tracing::debug!(url = %request.url, "cache miss, fetching from network");

        let response = self.fetcher.fetch(request.clone()).await?;

        if let Err(e) = cache.put(&request, response.clone()) {
            tracing::debug!(url = %request.url, error = %e, "response not cached");
        }

        Ok(response)
    }
}

#[async_trait]
impl<F: Fetch> Fetch for CacheInterceptor<F> {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse> {
        self.handle(request).await
    }
}
