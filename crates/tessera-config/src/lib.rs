//! Configuration for the Tessera block-model mesher.
//!
//! Holds the per-build [`RenderSettings`] consumed by the mesher and the
//! RON-persisted [`Config`] wrapping them. Missing sections fall back to
//! defaults so older config files keep loading.

mod config;
mod error;
mod render;

pub use config::{Config, DebugConfig};
pub use error::ConfigError;
pub use render::RenderSettings;
