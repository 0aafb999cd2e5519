use crate::data::{BreedFetcher, FetchError};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// CachingBreedFetcher wraps another BreedFetcher and memoizes successful
/// lookups, so each distinct breed reaches the underlying source at most once.
///
/// Breed names are matched case-insensitively: the cache key is the
/// lower-cased name, while the delegated call receives the caller's original
/// spelling. Failed lookups are never cached, so every retry reaches the
/// underlying source again. The number of calls actually made to the
/// underlying fetcher is recorded and can be read with `calls_made`.
///
/// Cached entries are kept for the lifetime of the instance; there is no
/// eviction. Lookups of already-cached breeds take a shared read lock only.
/// Concurrent first lookups of the same breed may each reach the underlying
/// source, and each such call is counted; no lock is held across the
/// delegated call.
pub struct CachingBreedFetcher<F: BreedFetcher> {
    /// The wrapped, uncached source of breed data
    underlying_fetcher: F,
    /// Successful results keyed by lower-cased breed name
    cache: RwLock<HashMap<String, Vec<String>>>,
    /// Number of calls made to the underlying fetcher
    calls_made: AtomicU64,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Creates a new CachingBreedFetcher wrapping the given fetcher.
    ///
    /// The fetcher is taken by value, so there is no unset state to guard
    /// against at runtime. The cache starts empty and the call counter at
    /// zero.
    pub fn new(fetcher: F) -> Self {
        Self {
            underlying_fetcher: fetcher,
            cache: RwLock::new(HashMap::new()),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Returns how many calls have reached the underlying fetcher.
    ///
    /// Cache hits do not count; misses count exactly once each, whether the
    /// delegated call succeeded or failed.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        let key = breed.to_lowercase();

        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(sub_breeds) = cache.get(&key) {
                return Ok(sub_breeds.clone());
            }
        }

        // The delegated call is counted whether or not it succeeds; failures
        // propagate before anything is written to the cache.
        self.calls_made.fetch_add(1, Ordering::Relaxed);
        let sub_breeds = self.underlying_fetcher.sub_breeds(breed)?;

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.insert(key, sub_breeds.clone());
        Ok(sub_breeds)
    }
}
