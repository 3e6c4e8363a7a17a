use crate::{error::LookupError, model::WeatherView};

/// Render-relevant phase derived from [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// The single state value driving rendering.
///
/// At most one of `weather` / `error` is present; `loading` is true only
/// while a fetch is in flight. Transitions happen through the reducer
/// methods below, never by callers mutating fields mid-cycle.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub query: String,
    pub weather: Option<WeatherView>,
    pub error: Option<String>,
    pub loading: bool,
}

impl UiState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failure
        } else if self.weather.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Accept the current query for fetching.
    ///
    /// A blank query fails synchronously: the error slot is set and
    /// `loading` never becomes true. Otherwise prior weather and error are
    /// cleared, `loading` is set, and the caller owes exactly one
    /// [`UiState::settle`].
    pub fn submit(&mut self) -> bool {
        if self.query.trim().is_empty() {
            self.weather = None;
            self.error = Some(LookupError::EmptyQuery.to_string());
            return false;
        }

        self.weather = None;
        self.error = None;
        self.loading = true;
        true
    }

    pub fn on_success(&mut self, view: WeatherView) {
        self.weather = Some(view);
        self.error = None;
        self.loading = false;
    }

    pub fn on_failure(&mut self, message: String) {
        self.weather = None;
        self.error = Some(message);
        self.loading = false;
    }

    /// Apply a finished fetch. A later settle overwrites an earlier one,
    /// so with overlapping fetches the last one to finish wins.
    pub fn settle(&mut self, result: Result<WeatherView, LookupError>) {
        match result {
            Ok(view) => self.on_success(view),
            Err(err) => self.on_failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> WeatherView {
        WeatherView {
            location_name: "Berlin".to_string(),
            country: "Germany".to_string(),
            temperature_c: 18.3,
            wind_speed_kmh: 9.4,
            weather_code: 3,
            observed_at: "2024-05-01T12:00".to_string(),
        }
    }

    #[test]
    fn starts_idle() {
        let state = UiState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.loading);
        assert!(state.weather.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn blank_submit_fails_without_loading() {
        for query in ["", "   ", "\t\n"] {
            let mut state = UiState { query: query.to_string(), ..UiState::default() };

            assert!(!state.submit());
            assert_eq!(state.phase(), Phase::Failure);
            assert!(!state.loading);
            assert_eq!(state.error.as_deref(), Some("Please enter a city name"));
        }
    }

    #[test]
    fn submit_clears_previous_outcome() {
        let mut state = UiState { query: "Berlin".to_string(), ..UiState::default() };
        state.on_failure("City not found".to_string());

        assert!(state.submit());
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.error.is_none());
        assert!(state.weather.is_none());
    }

    #[test]
    fn settle_success_stores_the_view() {
        let mut state = UiState { query: "Berlin".to_string(), ..UiState::default() };
        state.submit();
        state.settle(Ok(sample_view()));

        assert_eq!(state.phase(), Phase::Success);
        assert!(!state.loading);
        assert_eq!(state.weather, Some(sample_view()));
    }

    #[test]
    fn settle_failure_stores_the_message() {
        let mut state = UiState { query: "Atlantis".to_string(), ..UiState::default() };
        state.submit();
        state.settle(Err(LookupError::CityNotFound));

        assert_eq!(state.phase(), Phase::Failure);
        assert!(!state.loading);
        assert!(state.weather.is_none());
        assert_eq!(state.error.as_deref(), Some("City not found"));
    }

    #[test]
    fn overlapping_settles_last_one_wins() {
        let mut state = UiState { query: "Berlin".to_string(), ..UiState::default() };

        // Two submits before either fetch finishes.
        state.submit();
        state.submit();

        // First fetch fails, second succeeds afterwards.
        state.settle(Err(LookupError::Network("timed out".to_string())));
        state.settle(Ok(sample_view()));
        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.weather, Some(sample_view()));

        // And the mirror ordering.
        state.submit();
        state.settle(Ok(sample_view()));
        state.settle(Err(LookupError::Network("timed out".to_string())));
        assert_eq!(state.phase(), Phase::Failure);
        assert_eq!(state.error.as_deref(), Some("timed out"));
    }

    #[test]
    fn query_is_never_reset_by_transitions() {
        let mut state = UiState { query: "Berlin".to_string(), ..UiState::default() };
        state.submit();
        state.settle(Ok(sample_view()));
        assert_eq!(state.query, "Berlin");

        state.settle(Err(LookupError::CityNotFound));
        assert_eq!(state.query, "Berlin");
    }
}
