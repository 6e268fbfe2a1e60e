//! Session lifecycle: dealing rounds, advancing between them, resetting.

use tracing::info;

use crate::domain::board::Board;
use crate::domain::dealing::{deal, determine_starting_player, StartingPlayer};
use crate::domain::rules::INITIAL_ROUND_TARGET;
use crate::domain::seeds::derive_deal_seed;
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;

/// Create a session and deal its first round.
pub fn new_session(player_count: usize, session_seed: u64) -> Result<GameState, DomainError> {
    let mut state = GameState {
        player_count,
        phase: Phase::RoundNotStarted,
        round_target: INITIAL_ROUND_TARGET,
        turn: 0,
        hands: vec![Vec::new(); player_count],
        boneyard: Vec::new(),
        board: Board::new(),
        open_ends: Vec::new(),
        chain: None,
        scores: vec![0; player_count],
        previous_round_winner: 0,
        session_seed,
        deal_no: 0,
        last_round: None,
    };
    deal_round(&mut state)?;
    Ok(state)
}

/// Advance from a finished round to the next one. The target was
/// positive when the round ended, otherwise the session would already be
/// over.
pub fn start_next_round(state: &mut GameState) -> Result<(), DomainError> {
    if state.phase != Phase::RoundEnded {
        return Err(DomainError::PhaseMismatch);
    }
    state.round_target -= 1;
    deal_round(state)
}

/// Restart the session from scratch, keeping the seats.
pub fn reset_session(state: &mut GameState) -> Result<(), DomainError> {
    state.round_target = INITIAL_ROUND_TARGET;
    state.scores = vec![0; state.player_count];
    state.previous_round_winner = 0;
    state.last_round = None;
    deal_round(state)
}

/// Deal, and re-deal as long as the opening-tile search comes up empty.
/// Each inconclusive attempt burns the current target and a fresh
/// shuffle; burning every target ends the session with no play.
fn deal_round(state: &mut GameState) -> Result<(), DomainError> {
    loop {
        let seed = derive_deal_seed(state.session_seed, state.deal_no);
        state.deal_no += 1;
        let dealt = deal(state.player_count, seed)?;
        state.hands = dealt.hands;
        state.boneyard = dealt.boneyard;
        state.board = Board::new();
        state.open_ends.clear();
        state.chain = None;

        match determine_starting_player(
            &mut state.hands,
            &mut state.boneyard,
            state.round_target,
            state.previous_round_winner,
        ) {
            StartingPlayer::Found { seat } => {
                state.turn = seat;
                state.phase = Phase::RoundNotStarted;
                info!(target = state.round_target, starter = seat, "round dealt");
                return Ok(());
            }
            StartingPlayer::Inconclusive => {
                info!(target = state.round_target, "round inconclusive");
                if state.round_target == 0 {
                    state.phase = Phase::GameOver;
                    return Ok(());
                }
                state.round_target -= 1;
            }
        }
    }
}
