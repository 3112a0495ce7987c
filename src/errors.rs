use std::result::Result as StdResult;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Input rejected by a core operation before any state was touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveAmount { field: &'static str, value: Decimal },
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },
    #[error("category allocations ({allocated}) exceed the budget ({budget})")]
    CategoryOverAllocation { allocated: Decimal, budget: Decimal },
    #[error("{field} is too large to represent")]
    AmountOverflow { field: &'static str },
    #[error("category `{0}` is declared more than once")]
    DuplicateCategory(String),
    #[error("member not found: {0}")]
    UnknownMember(Uuid),
    #[error("{kind} not found: {id}")]
    UnknownReference { kind: &'static str, id: Uuid },
    #[error("period {id} is still active until {ends_at}")]
    ActivePeriod { id: Uuid, ends_at: DateTime<Utc> },
}

/// Unified error type for core, storage and configuration layers.
#[derive(Debug, Error)]
pub enum PocketError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, PocketError>;

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        PocketError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        PocketError::StorageError(err.to_string())
    }
}

impl PocketError {
    /// Returns the validation failure carried by this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            PocketError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
