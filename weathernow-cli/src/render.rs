//! Terminal rendering: pure `UiState -> String`.
//!
//! The condition-dependent background maps to an ANSI truecolor bar framing
//! the output; everything between the bars mirrors the widget surface
//! (search line with its button label, error text, result card).

use chrono::NaiveDateTime;
use weathernow_core::{Gradient, UiState, background, catalog};

const TITLE: &str = "🌍 Weather Now";
const BAR_WIDTH: usize = 44;

pub fn render(state: &UiState) -> String {
    let gradient = background::for_code(state.weather.as_ref().map(|w| w.weather_code));
    let bar = gradient_bar(gradient, BAR_WIDTH);

    let mut out = String::new();
    out.push_str(&bar);
    out.push('\n');
    out.push_str(TITLE);
    out.push_str("\n\n");

    let button = if state.loading { "[ Loading... ]" } else { "[ Search ]" };
    out.push_str(&format!("> {}  {}\n", state.query, button));

    if let Some(error) = &state.error {
        out.push_str(&format!("\n⚠ {error}\n"));
    }

    if let Some(weather) = &state.weather {
        out.push('\n');
        out.push_str(&format!("{}, {}\n", weather.location_name, weather.country));
        out.push_str(&format!("{}°C\n", weather.temperature_c));
        out.push_str(&format!(
            "{}\n",
            catalog::describe_or_unknown(weather.weather_code)
        ));
        out.push_str(&format!("💨 {} km/h\n", weather.wind_speed_kmh));
        out.push_str(&format!(
            "Updated at: {}\n",
            format_observed_at(&weather.observed_at)
        ));
    }

    out.push_str(&bar);
    out.push('\n');
    out
}

/// Two-stop color pair backing a [`Gradient`] identifier.
fn gradient_colors(gradient: Gradient) -> ((u8, u8, u8), (u8, u8, u8)) {
    match gradient {
        Gradient::Clear => ((96, 165, 250), (37, 99, 235)),
        Gradient::Cloudy => ((156, 163, 175), (75, 85, 99)),
        Gradient::Fog => ((209, 213, 219), (107, 114, 128)),
        Gradient::Rain => ((29, 78, 216), (17, 24, 39)),
        Gradient::Snow => ((191, 219, 254), (255, 255, 255)),
        Gradient::Thunder => ((126, 34, 206), (17, 24, 39)),
        Gradient::Sky => ((56, 189, 248), (2, 132, 199)),
    }
}

/// A horizontal bar blending from the gradient's start color to its end.
fn gradient_bar(gradient: Gradient, width: usize) -> String {
    let (start, end) = gradient_colors(gradient);

    let mut bar = String::new();
    for i in 0..width {
        let t = if width > 1 {
            i as f64 / (width - 1) as f64
        } else {
            0.0
        };
        let (r, g, b) = (
            lerp(start.0, end.0, t),
            lerp(start.1, end.1, t),
            lerp(start.2, end.2, t),
        );
        bar.push_str(&format!("\x1b[38;2;{r};{g};{b}m█"));
    }
    bar.push_str("\x1b[0m");
    bar
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

/// Open-Meteo reports minute precision ("2024-05-01T12:00") in the place's
/// local time; some endpoints include seconds. Unparseable input is shown
/// verbatim.
fn format_observed_at(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.format("%-d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
