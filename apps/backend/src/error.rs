use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session not found: {detail}")]
    SessionNotFound { detail: String },
    #[error("Session full: {detail}")]
    SessionFull { detail: String },
    #[error("Seat taken: {detail}")]
    SeatTaken { detail: String },
    #[error("Malformed action: {detail}")]
    MalformedAction { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Helper method to extract error code from any error variant
    fn code(&self) -> String {
        match self {
            AppError::SessionNotFound { .. } => "SESSION_NOT_FOUND".to_string(),
            AppError::SessionFull { .. } => "SESSION_FULL".to_string(),
            AppError::SeatTaken { .. } => "SEAT_TAKEN".to_string(),
            AppError::MalformedAction { .. } => "MALFORMED_ACTION".to_string(),
            AppError::BadRequest { code, .. } => code.to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
            AppError::Domain(err) => match err {
                DomainError::NotYourTurn => "NOT_YOUR_TURN".to_string(),
                DomainError::InvalidTile => "INVALID_TILE".to_string(),
                DomainError::NoMatchingOpenEnd => "NO_MATCHING_OPEN_END".to_string(),
                DomainError::PhaseMismatch => "PHASE_MISMATCH".to_string(),
                DomainError::InvalidPlayerCount => "INVALID_PLAYER_COUNT".to_string(),
                DomainError::Other(_) => "DOMAIN_ERROR".to_string(),
            },
        }
    }

    /// Helper method to extract error detail from any error variant
    fn detail(&self) -> String {
        match self {
            AppError::SessionNotFound { detail } => detail.clone(),
            AppError::SessionFull { detail } => detail.clone(),
            AppError::SeatTaken { detail } => detail.clone(),
            AppError::MalformedAction { detail } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Domain(err) => err.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::SessionFull { .. } => StatusCode::CONFLICT,
            AppError::SeatTaken { .. } => StatusCode::CONFLICT,
            AppError::MalformedAction { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Domain(err) => match err {
                DomainError::InvalidPlayerCount => StatusCode::BAD_REQUEST,
                DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::CONFLICT,
            },
        }
    }

    pub fn session_not_found(detail: impl Into<String>) -> Self {
        Self::SessionNotFound {
            detail: detail.into(),
        }
    }

    pub fn session_full(detail: impl Into<String>) -> Self {
        Self::SessionFull {
            detail: detail.into(),
        }
    }

    pub fn seat_taken(detail: impl Into<String>) -> Self {
        Self::SeatTaken {
            detail: detail.into(),
        }
    }

    pub fn malformed_action(detail: impl Into<String>) -> Self {
        Self::MalformedAction {
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: &'static str, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();

        let problem_details = ProblemDetails {
            type_: format!("https://spinner.app/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}
