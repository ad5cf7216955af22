//! Error codes for the score tracker.
//!
//! This module defines all error codes surfaced to callers (CLI output,
//! notifications in a presentation layer). Add new codes here; never pass
//! ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round validation
    /// A player has no prediction for the round
    PredictionMissing,
    /// A player has no actual for the round
    ActualMissing,
    /// A prediction exceeds the cards dealt
    PredictionOutOfRange,
    /// The "no matching prediction" rule rejected the round
    NoMatchingPrediction,
    /// Actuals do not sum to the cards dealt
    ActualMismatch,

    // Session validation
    /// Round index out of range
    InvalidRound,
    /// Player index out of range
    InvalidPlayer,
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// Blank player name
    InvalidPlayerName,
    /// Duplicate player name
    DuplicatePlayerName,
    /// No round after the current one
    NoNextRound,
    /// Finishing before the last round
    NotLastRound,
    /// Game has not been started
    GameNotActive,
    /// Game already started
    GameAlreadyStarted,

    // Resource Not Found
    /// Stored game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Store read/write failed
    PersistenceFailure,
    /// Stored data could not be decoded
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// IO error outside the store
    IoError,
    /// Serialization error
    SerdeError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PredictionMissing => "PREDICTION_MISSING",
            Self::ActualMissing => "ACTUAL_MISSING",
            Self::PredictionOutOfRange => "PREDICTION_OUT_OF_RANGE",
            Self::NoMatchingPrediction => "NO_MATCHING_PREDICTION",
            Self::ActualMismatch => "ACTUAL_MISMATCH",

            Self::InvalidRound => "INVALID_ROUND",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            Self::NoNextRound => "NO_NEXT_ROUND",
            Self::NotLastRound => "NOT_LAST_ROUND",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PersistenceFailure => "PERSISTENCE_FAILURE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerdeError => "SERDE_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    /// Map a domain error onto its code.
    pub fn for_domain(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PredictionMissing => Self::PredictionMissing,
                ValidationKind::ActualMissing => Self::ActualMissing,
                ValidationKind::PredictionOutOfRange => Self::PredictionOutOfRange,
                ValidationKind::RuleViolation(_) => Self::NoMatchingPrediction,
                ValidationKind::ActualMismatch => Self::ActualMismatch,
                ValidationKind::InvalidRound => Self::InvalidRound,
                ValidationKind::InvalidPlayer => Self::InvalidPlayer,
                ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
                ValidationKind::InvalidPlayerName => Self::InvalidPlayerName,
                ValidationKind::DuplicatePlayerName => Self::DuplicatePlayerName,
                ValidationKind::NoNextRound => Self::NoNextRound,
                ValidationKind::NotLastRound => Self::NotLastRound,
                ValidationKind::GameNotActive => Self::GameNotActive,
                ValidationKind::GameAlreadyStarted => Self::GameAlreadyStarted,
            },
            DomainError::NotFound(NotFoundKind::Game, _) => Self::GameNotFound,
            DomainError::NotFound(_, _) => Self::NotFound,
            DomainError::Infra(InfraErrorKind::Persistence, _) => Self::PersistenceFailure,
            DomainError::Infra(InfraErrorKind::DataCorruption, _) => Self::DataCorruption,
            DomainError::Infra(_, _) => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
