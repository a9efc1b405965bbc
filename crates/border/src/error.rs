use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Locator;

/// Payload shared by every failure: where the check was called and the
/// caller's message, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub locator: Locator,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.locator, self.message)
    }
}

/// Error returned by a failed check. One variant per check family; the set is
/// closed and no variant wraps another.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BorderError {
    #[error("not_null at {0}")]
    NotNull(Failure),
    #[error("is_null at {0}")]
    IsNull(Failure),
    #[error("not_equal at {0}")]
    NotEqual(Failure),
    #[error("is_empty at {0}")]
    IsEmpty(Failure),
    #[error("is_false at {0}")]
    IsFalse(Failure),
    #[error("is_true at {0}")]
    IsTrue(Failure),
    #[error("too_long at {0}")]
    TooLong(Failure),
    #[error("too_short at {0}")]
    TooShort(Failure),
    #[error("pattern at {0}")]
    Pattern(Failure),
    #[error("invalid_date at {0}")]
    InvalidDate(Failure),
    #[error("no_match at {0}")]
    NoMatch(Failure),
    #[error("invalid_email at {0}")]
    InvalidEmail(Failure),
}

impl BorderError {
    pub fn new(kind: FailureKind, locator: Locator, message: impl Into<String>) -> Self {
        let failure = Failure {
            locator,
            message: message.into(),
        };
        match kind {
            FailureKind::NotNull => BorderError::NotNull(failure),
            FailureKind::IsNull => BorderError::IsNull(failure),
            FailureKind::NotEqual => BorderError::NotEqual(failure),
            FailureKind::IsEmpty => BorderError::IsEmpty(failure),
            FailureKind::IsFalse => BorderError::IsFalse(failure),
            FailureKind::IsTrue => BorderError::IsTrue(failure),
            FailureKind::TooLong => BorderError::TooLong(failure),
            FailureKind::TooShort => BorderError::TooShort(failure),
            FailureKind::Pattern => BorderError::Pattern(failure),
            FailureKind::InvalidDate => BorderError::InvalidDate(failure),
            FailureKind::NoMatch => BorderError::NoMatch(failure),
            FailureKind::InvalidEmail => BorderError::InvalidEmail(failure),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            BorderError::NotNull(_) => FailureKind::NotNull,
            BorderError::IsNull(_) => FailureKind::IsNull,
            BorderError::NotEqual(_) => FailureKind::NotEqual,
            BorderError::IsEmpty(_) => FailureKind::IsEmpty,
            BorderError::IsFalse(_) => FailureKind::IsFalse,
            BorderError::IsTrue(_) => FailureKind::IsTrue,
            BorderError::TooLong(_) => FailureKind::TooLong,
            BorderError::TooShort(_) => FailureKind::TooShort,
            BorderError::Pattern(_) => FailureKind::Pattern,
            BorderError::InvalidDate(_) => FailureKind::InvalidDate,
            BorderError::NoMatch(_) => FailureKind::NoMatch,
            BorderError::InvalidEmail(_) => FailureKind::InvalidEmail,
        }
    }

    pub fn failure(&self) -> &Failure {
        match self {
            BorderError::NotNull(f)
            | BorderError::IsNull(f)
            | BorderError::NotEqual(f)
            | BorderError::IsEmpty(f)
            | BorderError::IsFalse(f)
            | BorderError::IsTrue(f)
            | BorderError::TooLong(f)
            | BorderError::TooShort(f)
            | BorderError::Pattern(f)
            | BorderError::InvalidDate(f)
            | BorderError::NoMatch(f)
            | BorderError::InvalidEmail(f) => f,
        }
    }

    pub fn locator(&self) -> &Locator {
        &self.failure().locator
    }

    pub fn message(&self) -> &str {
        &self.failure().message
    }

    /// Serializable snapshot for handlers that log or return failures as JSON.
    #[cfg(feature = "serde")]
    pub fn report(&self) -> FailureReport {
        FailureReport {
            kind: self.kind(),
            locator: self.locator().clone(),
            message: self.message().to_string(),
        }
    }
}

/// Tag identifying which check family was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    NotNull,
    IsNull,
    NotEqual,
    IsEmpty,
    IsFalse,
    IsTrue,
    TooLong,
    TooShort,
    Pattern,
    InvalidDate,
    NoMatch,
    InvalidEmail,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NotNull => "not_null",
            FailureKind::IsNull => "is_null",
            FailureKind::NotEqual => "not_equal",
            FailureKind::IsEmpty => "is_empty",
            FailureKind::IsFalse => "is_false",
            FailureKind::IsTrue => "is_true",
            FailureKind::TooLong => "too_long",
            FailureKind::TooShort => "too_short",
            FailureKind::Pattern => "pattern",
            FailureKind::InvalidDate => "invalid_date",
            FailureKind::NoMatch => "no_match",
            FailureKind::InvalidEmail => "invalid_email",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub kind: FailureKind,
    pub locator: Locator,
    pub message: String,
}
