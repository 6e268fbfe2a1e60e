//! Deterministic dealing and starting-player determination.

use tracing::debug;

use crate::domain::deck::shuffled_deck;
use crate::domain::rules::hand_size;
use crate::domain::state::{next_seat, Seat};
use crate::domain::tiles::Tile;
use crate::errors::domain::DomainError;

/// Hands plus boneyard for one round.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub hands: Vec<Vec<Tile>>,
    pub boneyard: Vec<Tile>,
}

/// Shuffle a fresh deck and deal it out. The remainder becomes the
/// boneyard, drawn from the back.
pub fn deal(player_count: usize, seed: u64) -> Result<Deal, DomainError> {
    let per_hand = hand_size(player_count).ok_or(DomainError::InvalidPlayerCount)?;

    let mut deck = shuffled_deck(seed);
    let mut hands = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        hands.push(deck.drain(..per_hand).collect());
    }
    Ok(Deal {
        hands,
        boneyard: deck,
    })
}

/// Result of the opening-tile search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingPlayer {
    Found { seat: Seat },
    /// Boneyard exhausted without an opening tile surfacing anywhere.
    Inconclusive,
}

/// Find who opens the round. Hands are scanned in seat order first; if
/// nobody was dealt an opening tile, seats draw one tile at a time from
/// the boneyard, rotating from `draw_anchor`, until one turns up or the
/// boneyard runs out. Drawn tiles stay in the drawing seat's hand.
pub fn determine_starting_player(
    hands: &mut [Vec<Tile>],
    boneyard: &mut Vec<Tile>,
    round_target: u8,
    draw_anchor: Seat,
) -> StartingPlayer {
    for (seat, hand) in hands.iter().enumerate() {
        if hand.iter().any(|t| t.opens_round(round_target)) {
            return StartingPlayer::Found { seat: seat as Seat };
        }
    }

    let player_count = hands.len();
    let mut seat = draw_anchor;
    while let Some(tile) = boneyard.pop() {
        let opens = tile.opens_round(round_target);
        debug!(seat, tile = ?tile.id, opens, "forced draw for opening tile");
        hands[seat as usize].push(tile);
        if opens {
            return StartingPlayer::Found { seat };
        }
        seat = next_seat(seat, player_count);
    }
    StartingPlayer::Inconclusive
}
