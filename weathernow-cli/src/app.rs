use weathernow_core::{UiState, WeatherSource};

use crate::render;

/// Wires the lookup state machine to a weather source: one accepted submit
/// leads to exactly one `resolve_weather` call. No debouncing, no
/// deduplication.
pub struct App {
    state: UiState,
    source: Box<dyn WeatherSource>,
}

impl App {
    pub fn new(source: Box<dyn WeatherSource>) -> Self {
        Self {
            state: UiState::default(),
            source,
        }
    }

    /// Store the query and run the submit transition. Returns whether a
    /// fetch was accepted; a blank query settles into the error state
    /// immediately without touching the source.
    pub fn submit(&mut self, city: &str) -> bool {
        self.state.query = city.to_string();
        self.state.submit()
    }

    /// Await the in-flight lookup and settle the state with its outcome.
    pub async fn resolve(&mut self) {
        let result = self.source.resolve_weather(&self.state.query).await;
        self.state.settle(result);
    }

    pub fn view(&self) -> String {
        render::render(&self.state)
    }
}
