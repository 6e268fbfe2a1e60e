use crate::domain::state::{GameState, Seat};
use crate::domain::tiles::Tile;

/// Sum of tile penalty values in a hand.
pub fn hand_score(hand: &[Tile]) -> u32 {
    hand.iter().map(Tile::score).sum()
}

/// Apply round-end scoring: the winner adds nothing, every other seat
/// adds its remaining hand. Returns the per-seat deltas.
pub fn apply_round_scoring(state: &mut GameState, winner: Seat) -> Vec<u32> {
    let mut deltas = vec![0u32; state.player_count];
    for seat in 0..state.player_count {
        if seat as Seat == winner {
            continue;
        }
        let delta = hand_score(&state.hands[seat]);
        deltas[seat] = delta;
        state.scores[seat] += delta;
    }
    deltas
}

/// Lowest cumulative score wins; ties go to the lowest seat index.
pub fn game_winner(scores: &[u32]) -> Seat {
    let mut best = 0usize;
    for (seat, &score) in scores.iter().enumerate().skip(1) {
        if score < scores[best] {
            best = seat;
        }
    }
    best as Seat
}
