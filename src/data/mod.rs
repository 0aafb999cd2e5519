mod fetcher;

pub use fetcher::{BreedFetcher, FetchError};
