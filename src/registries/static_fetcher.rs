use crate::data::{BreedFetcher, FetchError};
use std::collections::HashMap;

/// In-memory implementation of BreedFetcher backed by a fixed table.
///
/// Breed names are matched case-insensitively, like the live breed API.
/// Useful as an offline source and in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticBreedFetcher {
    /// Sub breed lists keyed by lower-cased breed name
    breeds: HashMap<String, Vec<String>>,
}

impl StaticBreedFetcher {
    /// Creates an empty StaticBreedFetcher
    pub fn new() -> Self {
        Self {
            breeds: HashMap::new(),
        }
    }

    /// Adds a breed and its sub breeds to the table, replacing any previous
    /// entry for that breed.
    ///
    /// # Arguments
    /// * `breed` - The breed name (stored lower-cased)
    /// * `sub_breeds` - The sub breed names for that breed
    pub fn insert(&mut self, breed: &str, sub_breeds: &[&str]) {
        self.breeds.insert(
            breed.to_lowercase(),
            sub_breeds.iter().map(|s| s.to_string()).collect(),
        );
    }
}

impl BreedFetcher for StaticBreedFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        self.breeds
            .get(&breed.to_lowercase())
            .cloned()
            .ok_or_else(|| FetchError::BreedNotFound(breed.to_string()))
    }
}
