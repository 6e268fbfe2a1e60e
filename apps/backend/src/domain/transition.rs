use crate::domain::scoring;
use crate::domain::state::{GameState, Phase, Seat};

/// Edge-triggered events derived from a processed action, for the room
/// layer to broadcast alongside the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// The turn became a specific seat.
    TurnBecame { seat: Seat },

    /// A hand emptied and the round was scored.
    RoundEnded { winner: Seat, scores: Vec<u32> },

    /// The last round target was played out (or burned); terminal.
    GameOver { winner: Seat, scores: Vec<u32> },
}

/// Derive transitions from before/after session state.
pub fn derive_transitions(before: &GameState, after: &GameState) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    if before.phase != Phase::RoundEnded && after.phase == Phase::RoundEnded {
        if let Some(summary) = &after.last_round {
            transitions.push(SessionTransition::RoundEnded {
                winner: summary.winner,
                scores: after.scores.clone(),
            });
        }
    }

    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(SessionTransition::GameOver {
            winner: scoring::game_winner(&after.scores),
            scores: after.scores.clone(),
        });
    }

    let playing = matches!(after.phase, Phase::RoundNotStarted | Phase::InProgress);
    if playing && (before.turn != after.turn || before.phase != after.phase) {
        transitions.push(SessionTransition::TurnBecame { seat: after.turn });
    }

    transitions
}
