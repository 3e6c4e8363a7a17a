use thiserror::Error;

/// Message used when a transport failure carries no detail of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch weather";

/// Everything that can end a lookup attempt. All variants are terminal for
/// the attempt; recovery is the user editing the query and submitting again.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The query was empty or all whitespace. Raised before any network
    /// call is made.
    #[error("Please enter a city name")]
    EmptyQuery,

    /// Geocoding returned zero results for the query.
    #[error("City not found")]
    CityNotFound,

    /// Either HTTP call failed: connectivity, a non-2xx status, or a body
    /// that does not parse as the expected JSON shape.
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            LookupError::Network(FETCH_FALLBACK_MESSAGE.to_string())
        } else {
            LookupError::Network(message)
        }
    }
}
