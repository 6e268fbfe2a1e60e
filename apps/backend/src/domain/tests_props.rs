//! Property tests driving random action sequences through the turn
//! controller.
//!
//! Increase cases locally with PROPTEST_CASES=500.

use std::env;

use proptest::prelude::*;

use crate::domain::board::Orientation;
use crate::domain::dealing::deal;
use crate::domain::lifecycle::new_session;
use crate::domain::rules::{CENTER_ANCHOR, CHAIN_QUOTA, DECK_SIZE, DEFAULT_ANCHOR_TOLERANCE};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::turns::{draw_tile, pass, play_tile};

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn tile_total(state: &GameState) -> usize {
    state.hands.iter().map(Vec::len).sum::<usize>() + state.boneyard.len() + state.board.len()
}

fn orientation(n: u8) -> Orientation {
    match n % 4 {
        0 => Orientation::Deg0,
        1 => Orientation::Deg90,
        2 => Orientation::Deg180,
        _ => Orientation::Deg270,
    }
}

/// One encoded step: action kind, hand index, slot index, orientation.
type Step = (u8, u8, u8, u8);

fn apply_step(state: &mut GameState, who: Seat, step: Step) {
    let (kind, hand_idx, slot_idx, orient) = step;
    match kind % 3 {
        0 => {
            let hand = state.hand(who);
            if hand.is_empty() {
                return;
            }
            let tile = hand[hand_idx as usize % hand.len()].id;
            let anchor = if state.open_ends.is_empty() {
                CENTER_ANCHOR
            } else {
                state.open_ends[slot_idx as usize % state.open_ends.len()].anchor
            };
            let _ = play_tile(state, who, tile, anchor, orientation(orient), DEFAULT_ANCHOR_TOLERANCE);
        }
        1 => {
            let _ = draw_tile(state, who);
        }
        _ => {
            let _ = pass(state, who);
        }
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Every deal partitions the full set, whatever the seed.
    #[test]
    fn prop_deal_partitions_the_deck(
        seed in any::<u64>(),
        player_count in 2usize..=4,
    ) {
        let dealt = deal(player_count, seed).unwrap();
        let total: usize =
            dealt.hands.iter().map(Vec::len).sum::<usize>() + dealt.boneyard.len();
        prop_assert_eq!(total, DECK_SIZE);

        let mut ids: Vec<u8> = dealt
            .hands
            .iter()
            .flatten()
            .chain(dealt.boneyard.iter())
            .map(|t| t.id.0)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), DECK_SIZE);
    }

    /// Random playouts keep the session invariants: no tile ever
    /// appears or disappears, scores only grow, the chain counter stays
    /// below its quota, and an in-progress board always has open ends.
    #[test]
    fn prop_random_playouts_preserve_invariants(
        seed in any::<u64>(),
        player_count in 2usize..=4,
        steps in proptest::collection::vec((0u8..3, any::<u8>(), any::<u8>(), 0u8..4), 1..120),
    ) {
        let mut state = new_session(player_count, seed).unwrap();
        let mut prev_scores = state.scores.clone();

        for step in steps {
            if !matches!(state.phase, Phase::RoundNotStarted | Phase::InProgress) {
                break;
            }
            apply_step(&mut state, state.turn, step);

            prop_assert_eq!(tile_total(&state), DECK_SIZE);
            for (prev, now) in prev_scores.iter().zip(&state.scores) {
                prop_assert!(now >= prev);
            }
            prev_scores = state.scores.clone();
            if let Some(chain) = state.chain {
                prop_assert!(chain.placements < CHAIN_QUOTA);
            }
            if state.phase == Phase::InProgress {
                prop_assert!(!state.open_ends.is_empty());
                prop_assert!(!state.board.is_empty());
            }
        }
    }

    /// A submission from the wrong seat is rejected without touching
    /// any state, in every phase the playout wanders through.
    #[test]
    fn prop_out_of_turn_submissions_never_mutate(
        seed in any::<u64>(),
        player_count in 2usize..=4,
        steps in proptest::collection::vec((0u8..3, any::<u8>(), any::<u8>(), 0u8..4), 1..60),
    ) {
        let mut state = new_session(player_count, seed).unwrap();

        for step in steps {
            if !matches!(state.phase, Phase::RoundNotStarted | Phase::InProgress) {
                break;
            }

            let wrong = ((state.turn as usize + 1) % player_count) as Seat;
            let before = state.clone();
            apply_step(&mut state, wrong, step);
            prop_assert_eq!(&state, &before);

            // Advance the playout legitimately.
            apply_step(&mut state, state.turn, step);
        }
    }
}
