use crate::domain::lifecycle::{new_session, reset_session, start_next_round};
use crate::domain::rules::{DECK_SIZE, INITIAL_ROUND_TARGET};
use crate::domain::state::{Phase, RoundSummary};
use crate::errors::domain::DomainError;

fn tile_total(state: &crate::domain::state::GameState) -> usize {
    state.hands.iter().map(Vec::len).sum::<usize>() + state.boneyard.len() + state.board.len()
}

#[test]
fn new_sessions_deal_a_valid_opening_round() {
    for seed in [1u64, 7, 1234] {
        let state = new_session(2, seed).unwrap();
        assert_eq!(state.phase, Phase::RoundNotStarted);
        assert!(state.round_target <= INITIAL_ROUND_TARGET);
        assert_eq!(tile_total(&state), DECK_SIZE);
        assert_eq!(state.scores, vec![0, 0]);
        // The starter ended up holding an opener, dealt or drawn.
        assert!(state
            .hand(state.turn)
            .iter()
            .any(|t| t.opens_round(state.round_target)));
    }
}

#[test]
fn sessions_are_reproducible_per_seed() {
    assert_eq!(new_session(3, 99).unwrap(), new_session(3, 99).unwrap());
    assert_ne!(new_session(3, 99).unwrap(), new_session(3, 100).unwrap());
}

#[test]
fn invalid_player_counts_are_rejected() {
    assert_eq!(new_session(1, 0).unwrap_err(), DomainError::InvalidPlayerCount);
    assert_eq!(new_session(9, 0).unwrap_err(), DomainError::InvalidPlayerCount);
}

#[test]
fn next_round_decrements_the_target_and_redeals() {
    let mut state = new_session(2, 5).unwrap();
    let target = state.round_target;
    state.phase = Phase::RoundEnded;
    state.previous_round_winner = 1;
    state.last_round = Some(RoundSummary {
        round_target: target,
        winner: 1,
        deltas: vec![0, 12],
    });
    state.scores = vec![12, 0];

    start_next_round(&mut state).unwrap();
    assert!(state.round_target < target);
    assert_eq!(state.phase, Phase::RoundNotStarted);
    assert_eq!(tile_total(&state), DECK_SIZE);
    // Scores carry across rounds.
    assert_eq!(state.scores, vec![12, 0]);
    assert!(state.board.is_empty());
    assert!(state.open_ends.is_empty());
    assert_eq!(state.chain, None);
}

#[test]
fn next_round_requires_a_finished_round() {
    let mut state = new_session(2, 5).unwrap();
    assert_eq!(start_next_round(&mut state).unwrap_err(), DomainError::PhaseMismatch);
}

#[test]
fn fresh_rounds_are_full_partitions_regardless_of_history() {
    let mut state = new_session(2, 11).unwrap();
    // Simulate a few finished rounds in a row.
    for _ in 0..3 {
        state.phase = Phase::RoundEnded;
        if state.round_target == 0 {
            break;
        }
        start_next_round(&mut state).unwrap();
        assert_eq!(tile_total(&state), DECK_SIZE);

        let mut ids: Vec<u8> = state
            .hands
            .iter()
            .flatten()
            .chain(state.boneyard.iter())
            .map(|t| t.id.0)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }
}

#[test]
fn reset_rewinds_scores_and_target() {
    let mut state = new_session(2, 21).unwrap();
    state.scores = vec![44, 17];
    state.round_target = 2;
    state.phase = Phase::GameOver;
    state.previous_round_winner = 1;

    reset_session(&mut state).unwrap();
    assert_eq!(state.round_target, INITIAL_ROUND_TARGET);
    assert_eq!(state.scores, vec![0, 0]);
    assert_eq!(state.phase, Phase::RoundNotStarted);
    assert_eq!(state.last_round, None);
    assert_eq!(tile_total(&state), DECK_SIZE);
}
