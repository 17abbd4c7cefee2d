//! Domain-level error type used across services, repos, and adapters.
//!
//! This error type is transport- and DB-agnostic. Outer edges should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Bet-intake and state-machine validation kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Bet arrived while the round is not in the betting phase
    BettingClosed,
    /// Submitted choice is not a color the wheel can land on
    InvalidChoice,
    StakeBelowMinimum,
    StakeAboveMaximum,
    InsufficientFunds,
    /// The user already has a bet in the current round
    DuplicateBet,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    User,
    Round,
    Bet,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
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
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Stable machine-readable code for callers that report reject reasons.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(ValidationKind::BettingClosed, _) => "BETTING_CLOSED",
            DomainError::Validation(ValidationKind::InvalidChoice, _) => "INVALID_CHOICE",
            DomainError::Validation(ValidationKind::StakeBelowMinimum, _) => "STAKE_BELOW_MINIMUM",
            DomainError::Validation(ValidationKind::StakeAboveMaximum, _) => "STAKE_ABOVE_MAXIMUM",
            DomainError::Validation(ValidationKind::InsufficientFunds, _) => "INSUFFICIENT_FUNDS",
            DomainError::Validation(ValidationKind::DuplicateBet, _) => "DUPLICATE_BET",
            DomainError::Validation(ValidationKind::Other(_), _) => "VALIDATION_ERROR",
            DomainError::NotFound(_, _) => "NOT_FOUND",
            DomainError::Infra(_, _) => "INFRA_ERROR",
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(d) => {
                DomainError::NotFound(NotFoundKind::Other(d.clone()), d)
            }
            sea_orm::DbErr::ConnectionAcquire(e) => DomainError::infra(
                InfraErrorKind::DbUnavailable,
                format!("connection acquire: {e}"),
            ),
            other => DomainError::infra(InfraErrorKind::Other("db".into()), other.to_string()),
        }
    }
}
