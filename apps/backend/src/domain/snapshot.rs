//! Public snapshot API for observing session state without exposing
//! other players' hands.

use serde::{Deserialize, Serialize};

use crate::domain::board::{OpenEnd, PlacedTile};
use crate::domain::scoring;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::tiles::{Tile, TileId};

/// Session-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub player_count: u8,
    /// Double value required to open the current round.
    pub round_target: u8,
    pub scores: Vec<u32>,
    pub hand_counts: Vec<u8>,
    pub boneyard_count: u8,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session: SessionHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum PhaseSnapshot {
    RoundNotStarted(OpeningSnapshot),
    InProgress(LayoutSnapshot),
    RoundEnded(RoundEndedSnapshot),
    GameOver(GameOverSnapshot),
}

/// Waiting for the starter to lay the opening double.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpeningSnapshot {
    pub to_act: Seat,
}

/// Chain restriction as shown to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainPublic {
    pub tile: TileId,
    /// Placements still owed against the chain anchor.
    pub remaining: u8,
}

/// Normal play: the full layout plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub to_act: Seat,
    pub board: Vec<PlacedTile>,
    pub open_ends: Vec<OpenEnd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<ChainPublic>,
}

/// Scored round awaiting an explicit next-round request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEndedSnapshot {
    pub winner: Seat,
    /// Per-seat score increase from the finished round.
    pub deltas: Vec<u32>,
    pub next_target: u8,
}

/// Terminal snapshot. Lowest cumulative score wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOverSnapshot {
    pub winner: Seat,
}

/// Viewer-relative context: the one hand this connection may see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerState {
    pub seat: Seat,
    pub hand: Vec<Tile>,
}

/// Entry point: produce a public snapshot of the current session state.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let session = SessionHeader {
        player_count: state.player_count as u8,
        round_target: state.round_target,
        scores: state.scores.clone(),
        hand_counts: state.hands.iter().map(|h| h.len() as u8).collect(),
        boneyard_count: state.boneyard.len() as u8,
    };

    let phase = match state.phase {
        Phase::RoundNotStarted => PhaseSnapshot::RoundNotStarted(OpeningSnapshot {
            to_act: state.turn,
        }),
        Phase::InProgress => snapshot_layout(state),
        Phase::RoundEnded => snapshot_round_ended(state),
        Phase::GameOver => PhaseSnapshot::GameOver(GameOverSnapshot {
            winner: scoring::game_winner(&state.scores),
        }),
    };

    GameSnapshot { session, phase }
}

/// The hand the given seat is allowed to see.
pub fn viewer_state(state: &GameState, seat: Seat) -> ViewerState {
    ViewerState {
        seat,
        hand: state.hand(seat).to_vec(),
    }
}

fn snapshot_layout(state: &GameState) -> PhaseSnapshot {
    use crate::domain::rules::CHAIN_QUOTA;

    let chain = state.chain.map(|c| ChainPublic {
        tile: c.tile,
        remaining: CHAIN_QUOTA - c.placements,
    });

    PhaseSnapshot::InProgress(LayoutSnapshot {
        to_act: state.turn,
        board: state.board.tiles().to_vec(),
        open_ends: state.open_ends.clone(),
        chain,
    })
}

fn snapshot_round_ended(state: &GameState) -> PhaseSnapshot {
    // RoundEnded implies a completed round; fall back to safe defaults
    // rather than panicking on an inconsistent state.
    let (winner, deltas) = match &state.last_round {
        Some(summary) => (summary.winner, summary.deltas.clone()),
        None => (0, vec![0; state.player_count]),
    };

    PhaseSnapshot::RoundEnded(RoundEndedSnapshot {
        winner,
        deltas,
        next_target: state.round_target.saturating_sub(1),
    })
}
