use crate::data::{BreedFetcher, FetchError};
use serde::Deserialize;

/// BreedFetcher implementation backed by the public dog.ceo REST API.
///
/// Sub breed lists are requested from `{base_url}/breed/{breed}/list`. The
/// breed name is sent exactly as given; case handling is the remote source's
/// business. The API answers 404 for breeds it does not know, which maps to
/// `FetchError::BreedNotFound`; every other failure maps to
/// `FetchError::Source`.
pub struct DogApiBreedFetcher {
    /// Base URL of the API
    base_url: String,
    client: reqwest::blocking::Client,
}

/// Response envelope used by the dog.ceo API for list endpoints
#[derive(Deserialize)]
struct BreedListResponse {
    status: String,
    message: Vec<String>,
}

impl DogApiBreedFetcher {
    /// Creates a new DogApiBreedFetcher
    ///
    /// # Arguments
    /// * `base_url` - Optional API base URL (defaults to "https://dog.ceo/api")
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "https://dog.ceo/api".to_string()),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Constructs the list endpoint URL for a given breed
    fn list_url(&self, breed: &str) -> String {
        format!("{}/breed/{}/list", self.base_url.trim_end_matches('/'), breed)
    }
}

impl BreedFetcher for DogApiBreedFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        let url = self.list_url(breed);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Source(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::BreedNotFound(breed.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Source(format!(
                "Breed source returned {} for {}",
                status, url
            )));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Source(format!("Failed to read response from {}: {}", url, e)))?;

        parse_breed_list(&body)
    }
}

/// Parses a dog.ceo list response body into sub breed names
///
/// Only bodies of successful responses are parsed here; unknown breeds are
/// reported through the HTTP status before the body is read.
fn parse_breed_list(body: &str) -> Result<Vec<String>, FetchError> {
    let response: BreedListResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Source(format!("Invalid breed list response: {}", e)))?;

    if response.status != "success" {
        return Err(FetchError::Source(format!(
            "Breed source reported status '{}'",
            response.status
        )));
    }

    Ok(response.message)
}
