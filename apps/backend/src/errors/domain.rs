//! Domain-level error type used by the engine and the session coordinator.
//!
//! This error type is HTTP- and storage-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert via the provided
//! `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::ErrorCode;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    Entropy,
    Signing,
    Other(String),
}

/// Every way a game action can be rejected.
///
/// Rule violations (`GameEnded`, `NotYourTurn`, `PositionTaken`,
/// `InvalidPosition`, `GameNotJoinable`) are ordinary outcomes and are
/// returned verbatim. `Conflict` means the optimistic retry budget ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    GameNotFound(String),
    GameNotJoinable,
    GameEnded,
    NotYourTurn,
    PositionTaken(usize),
    InvalidPosition(usize),
    DuplicateGameId(String),
    Conflict { attempts: usize },
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::GameNotFound(id) => write!(f, "game {id} not found"),
            DomainError::GameNotJoinable => write!(f, "game already has two players"),
            DomainError::GameEnded => write!(f, "game has already ended"),
            DomainError::NotYourTurn => write!(f, "not your turn"),
            DomainError::PositionTaken(pos) => write!(f, "position {pos} is already taken"),
            DomainError::InvalidPosition(pos) => {
                write!(f, "position {pos} is outside the board (0-8)")
            }
            DomainError::DuplicateGameId(id) => write!(f, "game id {id} already exists"),
            DomainError::Conflict { attempts } => write!(
                f,
                "game was modified concurrently; gave up after {attempts} attempts"
            ),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::GameNotFound(_) => ErrorCode::GameNotFound,
            DomainError::GameNotJoinable => ErrorCode::GameNotJoinable,
            DomainError::GameEnded => ErrorCode::GameEnded,
            DomainError::NotYourTurn => ErrorCode::NotYourTurn,
            DomainError::PositionTaken(_) => ErrorCode::PositionTaken,
            DomainError::InvalidPosition(_) => ErrorCode::InvalidPosition,
            DomainError::DuplicateGameId(_) => ErrorCode::DuplicateGameId,
            DomainError::Conflict { .. } => ErrorCode::Conflict,
            DomainError::Infra(InfraErrorKind::StoreUnavailable, _) => ErrorCode::StoreUnavailable,
            DomainError::Infra(_, _) => ErrorCode::Internal,
        }
    }
}
