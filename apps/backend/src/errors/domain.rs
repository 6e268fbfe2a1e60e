//! Domain-level error type used across the rules core and the room layer.
//!
//! This error type is HTTP- and transport-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rejection reasons for submitted actions. Every rejection leaves the
/// session state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    NotYourTurn,
    /// Tile not owned by the submitter or not in the deck.
    InvalidTile,
    NoMatchingOpenEnd,
    PhaseMismatch,
    InvalidPlayerCount,
    Other(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::NotYourTurn => write!(f, "not your turn"),
            DomainError::InvalidTile => write!(f, "tile not in hand"),
            DomainError::NoMatchingOpenEnd => write!(f, "no matching open end"),
            DomainError::PhaseMismatch => write!(f, "phase mismatch"),
            DomainError::InvalidPlayerCount => write!(f, "invalid player count"),
            DomainError::Other(s) => write!(f, "domain error: {s}"),
        }
    }
}

impl Error for DomainError {}
