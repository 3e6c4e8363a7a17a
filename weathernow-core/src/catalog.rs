//! WMO weather-code catalog.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// Shown in place of a description when a code has no catalog entry.
pub const UNKNOWN_CONDITION: &str = "🌍 Unknown";

/// Human-readable description for a WMO weather code.
///
/// Covers the codes the Open-Meteo current-weather endpoint emits; anything
/// else returns `None` and callers fall back to [`UNKNOWN_CONDITION`].
pub fn describe(code: i32) -> Option<&'static str> {
    let description = match code {
        0 => "☀️ Clear sky",
        1 => "🌤️ Mainly clear",
        2 => "⛅ Partly cloudy",
        3 => "☁️ Overcast",
        45 => "🌫️ Fog",
        48 => "🌫️ Depositing rime fog",
        51 => "🌦️ Light drizzle",
        53 => "🌦️ Moderate drizzle",
        55 => "🌧️ Dense drizzle",
        56 => "🌧️ Light freezing drizzle",
        57 => "🌧️ Dense freezing drizzle",
        61 => "🌧️ Slight rain",
        63 => "🌧️ Moderate rain",
        65 => "🌧️ Heavy rain",
        66 => "🌧️ Light freezing rain",
        67 => "🌧️ Heavy freezing rain",
        71 => "🌨️ Slight snowfall",
        73 => "🌨️ Moderate snowfall",
        75 => "❄️ Heavy snowfall",
        77 => "❄️ Snow grains",
        80 => "🌦️ Slight rain showers",
        81 => "🌧️ Moderate rain showers",
        82 => "⛈️ Violent rain showers",
        85 => "🌨️ Slight snow showers",
        86 => "🌨️ Heavy snow showers",
        95 => "⛈️ Thunderstorm",
        96 => "⛈️ Thunderstorm with slight hail",
        99 => "⛈️ Thunderstorm with heavy hail",
        _ => return None,
    };

    Some(description)
}

/// [`describe`] with the fallback already applied.
pub fn describe_or_unknown(code: i32) -> &'static str {
    describe(code).unwrap_or(UNKNOWN_CONDITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_exact_entries() {
        assert_eq!(describe(0), Some("☀️ Clear sky"));
        assert_eq!(describe(3), Some("☁️ Overcast"));
        assert_eq!(describe(95), Some("⛈️ Thunderstorm"));
    }

    #[test]
    fn lookup_is_idempotent() {
        for code in [0, 1, 2, 3, 45, 61, 75, 95, 99] {
            assert_eq!(describe(code), describe(code));
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        for code in [-1, 4, 50, 100, 1234] {
            assert_eq!(describe(code), None);
            assert_eq!(describe_or_unknown(code), UNKNOWN_CONDITION);
        }
    }
}
