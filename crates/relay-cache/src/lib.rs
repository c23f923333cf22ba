//! Client-side cache for TTS audio
//!
//! Requests whose path is exactly [`CACHED_PATH`] are answered from the
//! [`CACHE_NAME`] store when an entry for the exact request exists; otherwise
//! they go to the network and a copy of the response is kept. Entries never
//! expire and are never evicted. Every other request goes straight to the
//! network.

mod error;
mod fetch;
mod interceptor;
mod storage;

pub use error::{CacheError, Result};
pub use fetch::{Fetch, FetchRequest, FetchResponse, HttpFetcher};
pub use interceptor::{CACHE_NAME, CACHED_PATH, CacheInterceptor};
pub use storage::{CacheKey, CacheStorage, CacheStore};
