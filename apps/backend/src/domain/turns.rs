//! Turn controller: validates submitted actions against the current
//! phase and chain state, then applies them.
//!
//! Every rejection happens before the first mutation, so a failed action
//! leaves the session exactly as it was.

use tracing::info;

use crate::domain::board::{
    consume_and_extend, find_slot, first_placement_slots, Anchor, Orientation, PlacedTile,
};
use crate::domain::rules::{CENTER_ANCHOR, CHAIN_QUOTA};
use crate::domain::scoring;
use crate::domain::state::{next_seat, Chain, GameState, Phase, RoundSummary, Seat};
use crate::domain::tiles::TileId;
use crate::errors::domain::DomainError;

/// What a successful play did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub tile: TileId,
    pub round_over: bool,
    pub round_winner: Option<Seat>,
    pub game_over: bool,
}

/// What a draw attempt did. An empty boneyard rejects the draw and the
/// turn passes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    pub drawn: Option<TileId>,
    pub turn_passed: bool,
}

pub fn play_tile(
    state: &mut GameState,
    who: Seat,
    tile_id: TileId,
    anchor: Anchor,
    orientation: Orientation,
    tolerance: f32,
) -> Result<PlayOutcome, DomainError> {
    match state.phase {
        Phase::RoundNotStarted => play_opening(state, who, tile_id, orientation),
        Phase::InProgress => play_extension(state, who, tile_id, anchor, orientation, tolerance),
        Phase::RoundEnded | Phase::GameOver => Err(DomainError::PhaseMismatch),
    }
}

/// Pop one boneyard tile into the caller's hand. The turn stays with the
/// drawer so the tile can be played immediately; a draw against an empty
/// boneyard passes the turn instead.
pub fn draw_tile(state: &mut GameState, who: Seat) -> Result<DrawOutcome, DomainError> {
    if state.phase != Phase::InProgress {
        return Err(DomainError::PhaseMismatch);
    }
    ensure_turn(state, who)?;

    match state.boneyard.pop() {
        Some(tile) => {
            let id = tile.id;
            state.hands[who as usize].push(tile);
            Ok(DrawOutcome {
                drawn: Some(id),
                turn_passed: false,
            })
        }
        None => {
            state.turn = next_seat(who, state.player_count);
            Ok(DrawOutcome {
                drawn: None,
                turn_passed: true,
            })
        }
    }
}

/// Give up the turn. Whether the caller truly had no playable tile is
/// not checked.
pub fn pass(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::InProgress {
        return Err(DomainError::PhaseMismatch);
    }
    ensure_turn(state, who)?;
    state.turn = next_seat(who, state.player_count);
    Ok(())
}

fn ensure_turn(state: &GameState, who: Seat) -> Result<(), DomainError> {
    if state.turn != who {
        return Err(DomainError::NotYourTurn);
    }
    Ok(())
}

fn hand_index(state: &GameState, who: Seat, tile_id: TileId) -> Result<usize, DomainError> {
    state.hands[who as usize]
        .iter()
        .position(|t| t.id == tile_id)
        .ok_or(DomainError::InvalidTile)
}

fn play_opening(
    state: &mut GameState,
    who: Seat,
    tile_id: TileId,
    orientation: Orientation,
) -> Result<PlayOutcome, DomainError> {
    ensure_turn(state, who)?;
    let idx = hand_index(state, who, tile_id)?;
    let tile = state.hands[who as usize][idx];
    if !tile.opens_round(state.round_target) {
        return Err(DomainError::InvalidTile);
    }

    // The submitted anchor is ignored; the opener always lands center.
    state.hands[who as usize].remove(idx);
    state.board.push(PlacedTile {
        tile,
        position: CENTER_ANCHOR,
        orientation,
    });
    state.open_ends = first_placement_slots(tile, CENTER_ANCHOR, state.round_target);
    state.phase = Phase::InProgress;
    if tile.is_double() {
        state.chain = Some(Chain {
            tile: tile.id,
            placements: 0,
        });
    }
    info!(seat = who, tile = ?tile_id, target = state.round_target, "round opened");
    Ok(finish_play(state, who, tile_id))
}

fn play_extension(
    state: &mut GameState,
    who: Seat,
    tile_id: TileId,
    anchor: Anchor,
    orientation: Orientation,
    tolerance: f32,
) -> Result<PlayOutcome, DomainError> {
    ensure_turn(state, who)?;
    let idx = hand_index(state, who, tile_id)?;
    let tile = state.hands[who as usize][idx];

    let slot_idx =
        find_slot(&state.open_ends, anchor, tolerance).ok_or(DomainError::NoMatchingOpenEnd)?;
    let slot = state.open_ends[slot_idx];
    if !slot.value.accepts(tile.ends.0) && !slot.value.accepts(tile.ends.1) {
        return Err(DomainError::NoMatchingOpenEnd);
    }
    // An active chain restricts play to the chain anchor's own slots.
    if let Some(chain) = state.chain {
        if slot.tile != chain.tile {
            return Err(DomainError::NoMatchingOpenEnd);
        }
    }
    let owner_position = state
        .board
        .position_of(slot.tile)
        .ok_or_else(|| DomainError::Other("open end references a tile not on the board".into()))?;

    // All checks passed; mutate.
    state.hands[who as usize].remove(idx);
    let outcome = consume_and_extend(&mut state.open_ends, slot_idx, tile, orientation, owner_position);
    state.board.push(PlacedTile {
        tile,
        position: outcome.consumed.anchor,
        orientation,
    });

    state.chain = match state.chain {
        Some(chain) => {
            let placements = chain.placements + 1;
            if placements >= CHAIN_QUOTA {
                info!(tile = ?chain.tile, "chain satisfied");
                None
            } else {
                Some(Chain { placements, ..chain })
            }
        }
        // A double laid outside a chain becomes the next chain anchor.
        None if tile.is_double() => Some(Chain {
            tile: tile.id,
            placements: 0,
        }),
        None => None,
    };

    Ok(finish_play(state, who, tile_id))
}

fn finish_play(state: &mut GameState, who: Seat, tile: TileId) -> PlayOutcome {
    if state.hands[who as usize].is_empty() {
        return end_round(state, who, tile);
    }
    state.turn = next_seat(who, state.player_count);
    PlayOutcome {
        tile,
        round_over: false,
        round_winner: None,
        game_over: false,
    }
}

fn end_round(state: &mut GameState, winner: Seat, tile: TileId) -> PlayOutcome {
    let deltas = scoring::apply_round_scoring(state, winner);
    state.previous_round_winner = winner;
    state.last_round = Some(RoundSummary {
        round_target: state.round_target,
        winner,
        deltas,
    });
    state.chain = None;
    state.phase = if state.round_target == 0 {
        Phase::GameOver
    } else {
        Phase::RoundEnded
    };
    info!(winner, target = state.round_target, scores = ?state.scores, "round ended");
    PlayOutcome {
        tile,
        round_over: true,
        round_winner: Some(winner),
        game_over: state.phase == Phase::GameOver,
    }
}
