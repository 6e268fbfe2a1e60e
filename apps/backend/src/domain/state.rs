use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, OpenEnd};
use crate::domain::tiles::{Tile, TileId};

/// Seat index, 0-based, fixed at session creation.
pub type Seat = u8;

/// Session phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Dealt; the starter must lay the opening double.
    RoundNotStarted,
    /// Normal play until a hand empties.
    InProgress,
    /// Scored; waiting for an explicit next-round request.
    RoundEnded,
    /// Terminal.
    GameOver,
}

/// A double currently restricting play to its own open ends.
/// `placements` counts tiles laid against it and stays below the quota;
/// the chain is cleared when the quota is met.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub tile: TileId,
    pub placements: u8,
}

/// How the last completed round ended, kept for snapshots and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_target: u8,
    pub winner: Seat,
    /// Per-seat score increase; the winner's is zero.
    pub deltas: Vec<u32>,
}

/// Entire session state. One value per room, owned exclusively by that
/// room's worker.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player_count: usize,
    pub phase: Phase,
    /// Double value required to open the current round; starts at nine
    /// and only decreases.
    pub round_target: u8,
    /// Seat expected to act.
    pub turn: Seat,
    pub hands: Vec<Vec<Tile>>,
    /// Undealt tiles in shuffle order; drawn from the back.
    pub boneyard: Vec<Tile>,
    pub board: Board,
    pub open_ends: Vec<OpenEnd>,
    pub chain: Option<Chain>,
    /// Cumulative penalty scores; monotonically non-decreasing.
    pub scores: Vec<u32>,
    /// Anchors the forced-draw rotation of the next deal.
    pub previous_round_winner: Seat,
    pub session_seed: u64,
    /// Total deals performed, inconclusive ones included; feeds seed
    /// derivation.
    pub deal_no: u32,
    pub last_round: Option<RoundSummary>,
}

impl GameState {
    pub fn hand(&self, seat: Seat) -> &[Tile] {
        &self.hands[seat as usize]
    }
}

/// Next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, player_count: usize) -> Seat {
    ((seat as usize + 1) % player_count) as Seat
}
