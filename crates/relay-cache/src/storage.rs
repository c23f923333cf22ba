use std::sync::Arc;

use dashmap::DashMap;
use http::{Method, StatusCode};

use crate::error::{CacheError, Result};
use crate::fetch::{FetchRequest, FetchResponse};

/// Identity of a cached request: method plus the full URL
///
/// The URL is compared verbatim, so query order and casing matter. Only the
/// fragment is dropped, as it never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: Method,
    url: String,
}

impl CacheKey {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<&FetchRequest> for CacheKey {
    fn from(request: &FetchRequest) -> Self {
        let mut url = request.url.clone();
        url.set_fragment(None);

        Self {
            method: request.method.clone(),
            url: url.into(),
        }
    }
}

/// A single named store of request/response pairs
///
/// Entries are only ever added or replaced; nothing expires.
#[derive(Debug)]
pub struct CacheStore {
    name: String,
    entries: DashMap<CacheKey, FetchResponse>,
}

impl CacheStore {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the stored response for an exact request
    ///
    /// Only `GET` requests can match.
    pub fn match_request(&self, request: &FetchRequest) -> Option<FetchResponse> {
        if request.method != Method::GET {
            return None;
        }

        self.entries
            .get(&CacheKey::from(request))
            .map(|entry| entry.value().clone())
    }

    /// Store a response for a request, replacing any earlier entry
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unstorable`] for non-`GET` requests and for
    /// partial (`206`) responses
    pub fn put(&self, request: &FetchRequest, response: FetchResponse) -> Result<()> {
        if request.method != Method::GET {
            return Err(CacheError::Unstorable(format!("{} requests are not cached", request.method)));
        }

        if response.status == StatusCode::PARTIAL_CONTENT {
            return Err(CacheError::Unstorable("partial responses are not cached".to_owned()));
        }

        self.entries.insert(CacheKey::from(request), response);
        Ok(())
    }

    /// Keys of every stored entry
    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of named cache stores
#[derive(Debug, Default)]
pub struct CacheStorage {
    stores: DashMap<String, Arc<CacheStore>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the store called `name`, creating it on first use
    pub fn open(&self, name: &str) -> Arc<CacheStore> {
        if let Some(store) = self.stores.get(name) {
            return Arc::clone(store.value());
        }

        let store = self
            .stores
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(CacheStore::new(name.to_owned())));

        Arc::clone(store.value())
    }

    /// Whether a store called `name` has been opened
    pub fn has(&self, name: &str) -> bool {
        self.stores.contains_key(name)
    }

    /// Names of all opened stores
    pub fn keys(&self) -> Vec<String> {
        self.stores.iter().map(|entry| entry.key().clone()).collect()
    }
}
