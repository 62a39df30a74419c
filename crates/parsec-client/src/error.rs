//! Error taxonomy for the client facade.
//!
//! Split along the recoverable/fatal line: normalization failures are
//! values the caller always receives inside a failed envelope, while
//! faults ([`FacadeFault`]) signal that the lifecycle contract was
//! violated and are never embedded.

use thiserror::Error;

/// Why a load attempt left the lifecycle in `Failed`.
///
/// Clone is required because a single load outcome is broadcast to
/// every caller that joined the in-flight operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("module acquisition failed: {0}")]
    Acquisition(String),

    #[error("engine self-test probe returned {got}, expected 42")]
    ProbeMismatch { got: i32 },

    #[error("engine load was interrupted before completing")]
    Interrupted,
}

/// The engine handle was requested outside the `Ready` state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("engine is not loaded; call initialize() first")]
pub struct NotReadyError;

/// Programmer/integration errors raised by `evaluate` instead of
/// being folded into an envelope.
#[derive(Error, Debug)]
pub enum FacadeFault {
    #[error("engine is not loaded; call initialize() first")]
    NotReady,

    #[error("engine returned an unparseable payload ({detail}): {payload}")]
    Protocol { detail: String, payload: String },
}

/// Recoverable failures produced while normalizing a raw engine
/// result. The facade folds every variant into a failed envelope.
///
/// `Engine` and `Embedded` display as the bare engine message so the
/// text reaches the caller unmodified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// The engine reported a failure through the structured field.
    #[error("{0}")]
    Engine(String),

    /// The engine signalled failure inside a string-typed payload.
    #[error("{0}")]
    Embedded(String),

    #[error("invalid value for Boolean: \"{0}\"")]
    InvalidBoolean(String),

    #[error("invalid {kind} literal: \"{value}\"")]
    InvalidNumber { kind: &'static str, value: String },
}
