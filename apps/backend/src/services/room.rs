//! Per-room actor: the single logical worker that owns a session.
//!
//! The actor mailbox is the serialized action queue; no two actions ever
//! interleave their reads and writes of one room's state. After every
//! processed action the full snapshot is broadcast to all seats, with
//! edge-triggered round/game events on top; rejections go only to the
//! submitting connection as the `Submit` result.

use std::collections::HashMap;
use std::sync::Arc;

use actix::prelude::*;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::engine::{DisconnectPolicy, EngineConfig};
use crate::domain::lifecycle;
use crate::domain::snapshot::{snapshot, viewer_state};
use crate::domain::state::{GameState, Seat};
use crate::domain::transition::{derive_transitions, SessionTransition};
use crate::domain::turns;
use crate::error::AppError;
use crate::services::rooms::RoomRegistry;
use crate::ws::protocol::{ClientAction, ServerMsg};

/// Message delivered to a connected client's session actor.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

/// Claim a seat. `None` takes the first free one.
#[derive(Message)]
#[rtype(result = "Result<Seat, AppError>")]
pub struct Join {
    pub seat: Option<Seat>,
    pub recipient: Recipient<Outbound>,
}

/// A connection dropped; the configured disconnect policy decides the
/// room's fate.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Leave {
    pub seat: Seat,
}

#[derive(Message)]
#[rtype(result = "Result<(), AppError>")]
pub struct Submit {
    pub seat: Seat,
    pub action: ClientAction,
}

pub struct GameRoom {
    room_id: Uuid,
    state: GameState,
    config: EngineConfig,
    registry: Arc<RoomRegistry>,
    connections: HashMap<Seat, Recipient<Outbound>>,
}

impl GameRoom {
    pub fn new(
        room_id: Uuid,
        state: GameState,
        config: EngineConfig,
        registry: Arc<RoomRegistry>,
    ) -> Self {
        Self {
            room_id,
            state,
            config,
            registry,
            connections: HashMap::new(),
        }
    }

    fn broadcast_snapshot(&self) {
        let game = snapshot(&self.state);
        for (&seat, recipient) in &self.connections {
            recipient.do_send(Outbound(ServerMsg::Snapshot {
                game: game.clone(),
                viewer: viewer_state(&self.state, seat),
            }));
        }
    }

    fn broadcast(&self, msg: ServerMsg) {
        for recipient in self.connections.values() {
            recipient.do_send(Outbound(msg.clone()));
        }
    }

    fn apply(&mut self, seat: Seat, action: ClientAction) -> Result<(), AppError> {
        let tolerance = self.config.anchor_tolerance;
        match action {
            ClientAction::Play {
                tile,
                anchor,
                orientation,
            } => {
                turns::play_tile(&mut self.state, seat, tile, anchor, orientation, tolerance)?;
            }
            ClientAction::Draw => {
                turns::draw_tile(&mut self.state, seat)?;
            }
            ClientAction::Pass => {
                turns::pass(&mut self.state, seat)?;
            }
            ClientAction::StartNextRound => {
                lifecycle::start_next_round(&mut self.state)?;
            }
            ClientAction::ResetSession => {
                lifecycle::reset_session(&mut self.state)?;
            }
        }
        Ok(())
    }
}

impl Actor for GameRoom {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!(room_id = %self.room_id, players = self.state.player_count, "room started");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.registry.forget(self.room_id);
        info!(room_id = %self.room_id, "room stopped");
    }
}

impl Handler<Join> for GameRoom {
    type Result = Result<Seat, AppError>;

    fn handle(&mut self, msg: Join, _ctx: &mut Self::Context) -> Self::Result {
        let player_count = self.state.player_count;
        let seat = match msg.seat {
            Some(seat) => {
                if seat as usize >= player_count {
                    return Err(AppError::bad_request(
                        "BAD_SEAT",
                        format!("seat {seat} out of range for {player_count} players"),
                    ));
                }
                if self.connections.contains_key(&seat) {
                    return Err(AppError::seat_taken(format!("seat {seat} already claimed")));
                }
                seat
            }
            None => (0..player_count as Seat)
                .find(|s| !self.connections.contains_key(s))
                .ok_or_else(|| {
                    AppError::session_full(format!("all {player_count} seats are claimed"))
                })?,
        };

        // The joiner gets the current snapshot right away.
        msg.recipient.do_send(Outbound(ServerMsg::Snapshot {
            game: snapshot(&self.state),
            viewer: viewer_state(&self.state, seat),
        }));
        self.connections.insert(seat, msg.recipient);
        info!(room_id = %self.room_id, seat, "seat claimed");
        Ok(seat)
    }
}

impl Handler<Leave> for GameRoom {
    type Result = ();

    fn handle(&mut self, msg: Leave, ctx: &mut Self::Context) -> Self::Result {
        if self.connections.remove(&msg.seat).is_none() {
            return;
        }
        match self.config.disconnect_policy {
            DisconnectPolicy::TerminateRoom => {
                warn!(room_id = %self.room_id, seat = msg.seat, "connection lost, closing room");
                self.broadcast(ServerMsg::RoomClosed {
                    reason: format!("seat {} disconnected", msg.seat),
                });
                ctx.stop();
            }
            DisconnectPolicy::KeepSeatOpen => {
                info!(room_id = %self.room_id, seat = msg.seat, "connection lost, seat kept open");
            }
        }
    }
}

impl Handler<Submit> for GameRoom {
    type Result = Result<(), AppError>;

    fn handle(&mut self, msg: Submit, _ctx: &mut Self::Context) -> Self::Result {
        let before = self.state.clone();
        self.apply(msg.seat, msg.action)?;

        self.broadcast_snapshot();
        for transition in derive_transitions(&before, &self.state) {
            match transition {
                SessionTransition::TurnBecame { seat } => {
                    if let Some(recipient) = self.connections.get(&seat) {
                        recipient.do_send(Outbound(ServerMsg::YourTurn { seat }));
                    }
                }
                SessionTransition::RoundEnded { winner, scores } => {
                    info!(room_id = %self.room_id, winner, "round ended");
                    self.broadcast(ServerMsg::RoundEnded { winner, scores });
                }
                SessionTransition::GameOver { winner, scores } => {
                    info!(room_id = %self.room_id, winner, "game over");
                    self.broadcast(ServerMsg::GameOver { winner, scores });
                }
            }
        }
        Ok(())
    }
}
