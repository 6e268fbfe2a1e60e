use std::sync::Arc;

use crate::config::engine::EngineConfig;
use crate::services::RoomRegistry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<RoomRegistry>,
    pub engine: EngineConfig,
}

impl AppState {
    pub fn new(engine: EngineConfig) -> Self {
        Self {
            rooms: RoomRegistry::new(engine),
            engine,
        }
    }

    /// State with default engine knobs, for tests.
    pub fn for_tests() -> Self {
        Self::new(EngineConfig::default())
    }
}
