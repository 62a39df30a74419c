//! Parsec Engine Boundary: the fixed contract of the equations-parser
//!
//! The evaluation engine is an external collaborator reached through
//! exactly two entry points: `evaluate` (string in, JSON document out)
//! and `self_check` (fixed-answer integrity probe). Everything behind
//! those entry points — grammar, math library, matrix handling — is a
//! black box to this workspace.

pub mod catalog;
pub mod raw;
pub mod scripted;

pub use catalog::{supported_functions, FunctionGroup};
pub use raw::{parse_raw, RawResult};
pub use scripted::ScriptedEngine;

use std::sync::Arc;

/// The answer `self_check` must return for the engine build to be
/// considered correctly linked and initialized.
pub const PROBE_ANSWER: i32 = 42;

/// The two fixed entry points of the evaluation engine.
pub trait Engine: Send + Sync {
    /// Evaluate an expression, returning the raw JSON reply
    /// (`{"val": ..., "type": ...}` or `{"error": ...}`).
    fn evaluate(&self, expression: &str) -> String;

    /// Integrity probe. A correctly loaded engine returns [`PROBE_ANSWER`].
    fn self_check(&self) -> i32;
}

impl std::fmt::Debug for dyn Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Engine")
    }
}

/// Shared reference to a loaded engine. The handle is logically
/// immutable once acquired; components reference it, never copy it.
pub type EngineHandle = Arc<dyn Engine>;
