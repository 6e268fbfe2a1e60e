//! Typed configuration read from the environment at startup.

pub mod engine;

pub use engine::{DisconnectPolicy, EngineConfig, ServerConfig};
