//! Core library for the `weathernow` CLI.
//!
//! This crate defines:
//! - Endpoint configuration handling
//! - The weather source abstraction and its Open-Meteo implementation
//! - Shared domain models, the lookup state machine, and the condition
//!   catalog / background tables consumed by renderers
//!
//! It is used by `weathernow-cli`, but can also be reused by other binaries
//! or services.

pub mod background;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;

pub use background::Gradient;
pub use config::{Config, Endpoints};
pub use error::LookupError;
pub use model::{GeoLocation, WeatherView};
pub use provider::{OpenMeteoProvider, WeatherSource, source_from_config};
pub use state::{Phase, UiState};
