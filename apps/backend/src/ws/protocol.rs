use serde::{Deserialize, Serialize};

use crate::domain::board::{Anchor, Orientation};
use crate::domain::snapshot::{GameSnapshot, ViewerState};
use crate::domain::state::Seat;
use crate::domain::tiles::TileId;
use crate::error::AppError;
use crate::errors::domain::DomainError;

pub const PROTOCOL_VERSION: i32 = 1;

/// An intended move, as submitted by a client. The server alone decides
/// whether it is legal.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientAction {
    Play {
        tile: TileId,
        anchor: Anchor,
        orientation: Orientation,
    },
    Draw,
    Pass,
    StartNextRound,
    ResetSession,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Hello { protocol: i32 },
    Action { action: ClientAction },
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    HelloAck {
        protocol: i32,
        seat: Seat,
    },

    /// Full session state after every processed action; `viewer` is
    /// specific to the receiving connection.
    Snapshot {
        game: GameSnapshot,
        viewer: ViewerState,
    },

    RoundEnded {
        winner: Seat,
        scores: Vec<u32>,
    },

    GameOver {
        winner: Seat,
        scores: Vec<u32>,
    },

    YourTurn {
        seat: Seat,
    },

    RoomClosed {
        reason: String,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadProtocol,
    MalformedAction,
    NotYourTurn,
    InvalidTile,
    NoMatchingOpenEnd,
    PhaseMismatch,
    SessionNotFound,
    SessionFull,
    BadRequest,
}

/// Rejection as delivered to the submitting connection only.
pub fn error_msg(err: &AppError) -> ServerMsg {
    let code = match err {
        AppError::Domain(DomainError::NotYourTurn) => ErrorCode::NotYourTurn,
        AppError::Domain(DomainError::InvalidTile) => ErrorCode::InvalidTile,
        AppError::Domain(DomainError::NoMatchingOpenEnd) => ErrorCode::NoMatchingOpenEnd,
        AppError::Domain(DomainError::PhaseMismatch) => ErrorCode::PhaseMismatch,
        AppError::SessionNotFound { .. } => ErrorCode::SessionNotFound,
        AppError::SessionFull { .. } | AppError::SeatTaken { .. } => ErrorCode::SessionFull,
        AppError::MalformedAction { .. } => ErrorCode::MalformedAction,
        _ => ErrorCode::BadRequest,
    };
    ServerMsg::Error {
        code,
        message: err.to_string(),
    }
}
