//! HTTP API handlers for krishi-api

pub mod crop;
pub mod disease;
pub mod health;
pub mod irrigation;
pub mod soil;
pub mod tts;
pub mod weather;

pub use crop::recommend;
pub use disease::detect_disease;
pub use health::health_routes;
pub use irrigation::advise;
pub use soil::fertilizer;
pub use tts::synthesize_speech;
pub use weather::current_weather;
