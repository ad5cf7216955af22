//! Domain-level error type used across the session, repository and store layers.
//!
//! Validation failures are expected user-input states (an incomplete round,
//! a broken rule) rather than faults; callers surface them as messages and
//! leave state untouched. Application code that also deals with config and
//! IO converts into `crate::error::AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::RuleId;

/// Validation kinds raised by the ledger, the rule engine and the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// At least one player has no prediction for the round.
    PredictionMissing,
    /// At least one player has no actual for the round.
    ActualMissing,
    /// A prediction exceeds the cards dealt this round.
    PredictionOutOfRange,
    /// An active house rule rejects the round.
    RuleViolation(RuleId),
    /// The actuals do not account for every dealt card.
    ActualMismatch,
    /// Round index outside the ledger.
    InvalidRound,
    /// Player index outside the seating.
    InvalidPlayer,
    /// Player count outside 2..=6.
    InvalidPlayerCount,
    /// A player name is blank.
    InvalidPlayerName,
    /// Two players share a name.
    DuplicatePlayerName,
    /// Already on the last round; finish the game instead.
    NoNextRound,
    /// Finishing requires the last round to be current.
    NotLastRound,
    /// The session has not been started.
    GameNotActive,
    /// Seating cannot change once the game has started.
    GameAlreadyStarted,
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// The key-value store could not be read or written.
    Persistence,
    /// Stored data could not be decoded.
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The validation kind, if this is a validation failure.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
