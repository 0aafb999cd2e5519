use std::fmt;

/// Errors that can occur while fetching breed data
#[derive(Debug)]
pub enum FetchError {
    /// The source has no record of the requested breed
    BreedNotFound(String),
    /// The source could not be reached or gave an unusable answer
    Source(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::BreedNotFound(breed) => {
                write!(f, "Breed '{}' not found", breed)
            }
            FetchError::Source(details) => {
                write!(f, "Failed to fetch breed data: {}", details)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of breed data: given a breed name, produce the list of its
/// sub breed names.
///
/// Implementations decide for themselves how names are matched (including
/// case sensitivity) and where the data comes from.
pub trait BreedFetcher {
    /// Looks up the sub breeds known for the given breed.
    ///
    /// # Arguments
    /// * `breed` - The breed name to look up
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - The sub breed names, possibly empty
    /// * `Err(FetchError::BreedNotFound)` - If the source has no record of the breed
    /// * `Err(FetchError::Source)` - If the source could not produce an answer
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError>;
}
