use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    error::LookupError,
    model::{GeoLocation, WeatherView},
};

use super::WeatherSource;

/// Weather source backed by the two public Open-Meteo services: a geocoding
/// search for the query, then a forecast call for the resolved coordinates.
/// Both are keyless HTTP GET + JSON endpoints.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoProvider {
    pub fn new(geocoding_url: String, forecast_url: String) -> Self {
        Self {
            http: Client::new(),
            geocoding_url,
            forecast_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.endpoints.geocoding_url.clone(),
            config.endpoints.forecast_url.clone(),
        )
    }

    pub fn geocoding_url(&self) -> &str {
        &self.geocoding_url
    }

    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    async fn geocode(&self, name: &str) -> Result<GeoLocation, LookupError> {
        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "Geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: GeocodingResponse = serde_json::from_str(&body).map_err(|err| {
            LookupError::Network(format!("Failed to parse geocoding response: {err}"))
        })?;

        let first = parsed
            .results
            .into_iter()
            .flatten()
            .next()
            .ok_or(LookupError::CityNotFound)?;

        tracing::debug!(
            name = %first.name,
            latitude = first.latitude,
            longitude = first.longitude,
            "geocoded query"
        );

        Ok(GeoLocation {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name,
            country: first.country,
        })
    }

    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, LookupError> {
        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "Forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|err| {
            LookupError::Network(format!("Failed to parse forecast response: {err}"))
        })?;

        Ok(parsed.current_weather)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    // Some places come back without a country (e.g. open ocean features).
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    time: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[async_trait]
impl WeatherSource for OpenMeteoProvider {
    async fn resolve_weather(&self, query: &str) -> Result<WeatherView, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let location = self.geocode(query).await?;
        let current = self
            .fetch_current(location.latitude, location.longitude)
            .await?;

        tracing::debug!(
            location = %location.name,
            weather_code = current.weathercode,
            "merged current conditions"
        );

        Ok(WeatherView {
            location_name: location.name,
            country: location.country,
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            weather_code: current.weathercode,
            observed_at: current.time,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
