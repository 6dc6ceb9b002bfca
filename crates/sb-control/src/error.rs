//! Controller error type.
//!
//! Upstream errors (`InvalidSection`, `RouteError`) convert in via `From`
//! so call sites stay on `?`.  Every variant carries enough context to be
//! reported without the controller's help.

use thiserror::Error;

use sb_core::{InvalidSection, Section};
use sb_topology::RouteError;

/// Coarse error classification callers can branch on without matching
/// every variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The caller supplied a value that is meaningless against the fixed
    /// yard or the roster: bad section number, unknown or duplicate train,
    /// unreachable destination.
    Argument,
    /// The inputs are meaningful but the current state forbids the
    /// operation: the entry section is occupied.
    State,
}

/// The error type for all fallible [`SignalBox`](crate::SignalBox) operations.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("train {0:?} is already on the roster")]
    DuplicateTrain(String),

    #[error("train {0:?} has never been admitted")]
    UnknownTrain(String),

    #[error(transparent)]
    InvalidSection(#[from] InvalidSection),

    #[error(transparent)]
    NoRoute(#[from] RouteError),

    #[error("entry section {section} is occupied by train {occupant:?}")]
    EntryOccupied { section: Section, occupant: String },
}

impl ControlError {
    /// The argument/state classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ControlError::EntryOccupied { .. } => ErrorKind::State,
            ControlError::DuplicateTrain(_)
            | ControlError::UnknownTrain(_)
            | ControlError::InvalidSection(_)
            | ControlError::NoRoute(_) => ErrorKind::Argument,
        }
    }
}

/// Shorthand result type for this crate.
pub type ControlResult<T> = Result<T, ControlError>;
