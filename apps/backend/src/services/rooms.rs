//! Room registry: creates rooms and routes submits to the right actor.
//!
//! Rooms are fully independent units of concurrency; the registry holds
//! only their addresses, never their state.

use std::sync::Arc;

use actix::prelude::*;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::config::engine::EngineConfig;
use crate::domain::lifecycle;
use crate::error::AppError;
use crate::services::room::GameRoom;

pub struct RoomRegistry {
    rooms: DashMap<Uuid, Addr<GameRoom>>,
    engine: EngineConfig,
}

impl RoomRegistry {
    pub fn new(engine: EngineConfig) -> Arc<Self> {
        Arc::new(Self {
            rooms: DashMap::new(),
            engine,
        })
    }

    /// Deal a fresh session and spawn its actor. Must be called from
    /// within an actix system.
    pub fn create_room(self: &Arc<Self>, player_count: usize) -> Result<Uuid, AppError> {
        let session_seed = rand::random::<u64>();
        let state = lifecycle::new_session(player_count, session_seed)?;

        let room_id = Uuid::new_v4();
        let room = GameRoom::new(room_id, state, self.engine, Arc::clone(self));
        self.rooms.insert(room_id, room.start());
        info!(%room_id, player_count, "room created");
        Ok(room_id)
    }

    pub fn get(&self, room_id: Uuid) -> Result<Addr<GameRoom>, AppError> {
        self.rooms
            .get(&room_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::session_not_found(format!("no room {room_id}")))
    }

    /// Called by a room actor as it stops.
    pub fn forget(&self, room_id: Uuid) {
        self.rooms.remove(&room_id);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
