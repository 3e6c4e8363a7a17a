use serde::{Deserialize, Serialize};

/// A place resolved from a free-text search. Lives only between the
/// geocoding step and the merge into [`WeatherView`].
#[derive(Debug, Clone)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Display-ready result of a completed lookup: the forecast's
/// current-conditions block plus the resolved place identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherView {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    /// Observation time as reported by the forecast service: ISO-8601,
    /// local to the looked-up place. Parsed only at render time.
    pub observed_at: String,
}
