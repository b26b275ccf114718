//! # KrishiMitra Common Library
//!
//! Shared code for the KrishiMitra advisory backend:
//! - Error types
//! - Configuration loading
//! - Language codes and script-based language hints

pub mod config;
pub mod error;
pub mod lang;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use lang::Lang;
