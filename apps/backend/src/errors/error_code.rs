//! Error codes for the tic-tac-toe backend API.
//!
//! Every error that crosses the HTTP boundary carries one of these codes.
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Stable, machine-readable error codes.
///
/// Each variant maps to the SCREAMING_SNAKE_CASE string that appears in
/// the `code` field of problem+json bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token failed signature or shape checks
    UnauthorizedInvalidJwt,
    /// Token past its expiry
    UnauthorizedExpiredJwt,

    // Request validation
    /// Body could not be parsed
    BadRequest,
    /// Body parsed but a field is out of range
    ValidationError,
    /// No route matches the request
    NotFound,

    // Game rules
    GameNotFound,
    GameNotJoinable,
    GameEnded,
    NotYourTurn,
    PositionTaken,
    InvalidPosition,

    // Concurrency
    DuplicateGameId,
    /// Optimistic-concurrency retries exhausted; the caller should retry
    Conflict,

    // System
    StoreUnavailable,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::GameNotJoinable => "GAME_NOT_JOINABLE",
            Self::GameEnded => "GAME_ENDED",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::PositionTaken => "POSITION_TAKEN",
            Self::InvalidPosition => "INVALID_POSITION",

            Self::DuplicateGameId => "DUPLICATE_GAME_ID",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
