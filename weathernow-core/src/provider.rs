use crate::{Config, LookupError, WeatherView};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// A source of current weather keyed by a free-text place query.
///
/// The trait is the seam between the interaction layer and the network:
/// the CLI drives a `dyn WeatherSource`, tests substitute stubs.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Resolve `query` to a place and return its current conditions.
    ///
    /// Fails with [`LookupError::EmptyQuery`] before any network call when
    /// the query is blank, [`LookupError::CityNotFound`] when geocoding has
    /// no match, and [`LookupError::Network`] for anything either HTTP call
    /// does wrong. No retries, no caching.
    async fn resolve_weather(&self, query: &str) -> Result<WeatherView, LookupError>;
}

/// Construct the default source from config.
pub fn source_from_config(config: &Config) -> Box<dyn WeatherSource> {
    Box::new(OpenMeteoProvider::from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL};

    #[test]
    fn default_source_uses_configured_endpoints() {
        let provider = OpenMeteoProvider::from_config(&Config::default());
        assert_eq!(provider.geocoding_url(), DEFAULT_GEOCODING_URL);
        assert_eq!(provider.forecast_url(), DEFAULT_FORECAST_URL);
    }
}
