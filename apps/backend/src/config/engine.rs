//! Engine and server configuration from environment variables.
//!
//! Environment variables must be set by the runtime environment
//! (docker-compose env_file, or sourced env files for local dev).

use crate::domain::rules::DEFAULT_ANCHOR_TOLERANCE;
use crate::error::AppError;

/// What happens to a room when one of its connections drops.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DisconnectPolicy {
    /// Tear down the whole room. The reference contract; every other
    /// player is notified and the session is discarded.
    #[default]
    TerminateRoom,
    /// Keep the seat claimable so the player can reconnect.
    KeepSeatOpen,
}

impl DisconnectPolicy {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "terminate_room" => Ok(DisconnectPolicy::TerminateRoom),
            "keep_seat_open" => Ok(DisconnectPolicy::KeepSeatOpen),
            other => Err(AppError::config(format!(
                "SPINNER_DISCONNECT_POLICY must be terminate_room or keep_seat_open, got {other}"
            ))),
        }
    }
}

/// Rule-engine knobs shared by every room.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineConfig {
    /// Per-axis distance within which a submitted anchor claims an open
    /// end.
    pub anchor_tolerance: f32,
    pub disconnect_policy: DisconnectPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            anchor_tolerance: DEFAULT_ANCHOR_TOLERANCE,
            disconnect_policy: DisconnectPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("SPINNER_ANCHOR_TOLERANCE") {
            config.anchor_tolerance = raw.parse().map_err(|_| {
                AppError::config(format!("SPINNER_ANCHOR_TOLERANCE must be a number, got {raw}"))
            })?;
        }
        if let Ok(raw) = std::env::var("SPINNER_DISCONNECT_POLICY") {
            config.disconnect_policy = DisconnectPolicy::parse(&raw)?;
        }
        Ok(config)
    }
}

/// Bind address for the HTTP/ws surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("SPINNER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("SPINNER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::config(format!("SPINNER_PORT must be a valid port number, got {raw}"))
            })?,
            Err(_) => 3001,
        };
        Ok(Self { host, port })
    }
}
