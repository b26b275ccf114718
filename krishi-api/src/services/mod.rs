//! Clients for third-party services proxied by the backend

pub mod tts_client;
pub mod weather_client;

pub use tts_client::TtsClient;
pub use weather_client::{Location, WeatherClient, WeatherSummary};
