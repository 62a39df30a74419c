//! Scripted stand-in engine for tests.
//!
//! Maps expressions to canned JSON replies and counts evaluation
//! calls, so tests can assert both the replies flowing through the
//! facade and whether the engine was contacted at all.

use crate::{Engine, PROBE_ANSWER};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct ScriptedEngine {
    replies: HashMap<String, String>,
    probe: i32,
    calls: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            probe: PROBE_ANSWER,
            calls: AtomicUsize::new(0),
        }
    }

    /// A scripted engine whose integrity probe returns the wrong
    /// answer, for exercising the load gate.
    pub fn with_probe(answer: i32) -> Self {
        Self {
            probe: answer,
            ..Self::new()
        }
    }

    /// Script a tagged-value reply for an expression.
    pub fn value(mut self, expression: &str, val: &str, kind: &str) -> Self {
        self.replies.insert(
            expression.to_string(),
            json!({"val": val, "type": kind}).to_string(),
        );
        self
    }

    /// Script a structured-error reply for an expression.
    pub fn error(mut self, expression: &str, message: &str) -> Self {
        self.replies
            .insert(expression.to_string(), json!({"error": message}).to_string());
        self
    }

    /// Script a verbatim payload, valid JSON or not.
    pub fn raw(mut self, expression: &str, payload: &str) -> Self {
        self.replies
            .insert(expression.to_string(), payload.to_string());
        self
    }

    /// How many times `evaluate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ScriptedEngine {
    fn evaluate(&self, expression: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies.get(expression).cloned().unwrap_or_else(|| {
            json!({"error": format!("unscripted equation: {}", expression)}).to_string()
        })
    }

    fn self_check(&self) -> i32 {
        self.probe
    }
}
