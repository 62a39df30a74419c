//! Evaluation facade: input validation, engine invocation, result
//! normalization, envelope shaping.

use crate::convert::normalize;
use crate::envelope::EvaluationEnvelope;
use crate::error::{FacadeFault, LoadError};
use crate::lifecycle::EngineLifecycle;
use parsec_engine::{parse_raw, EngineHandle};
use std::future::Future;

/// The typed entry point application code talks to.
///
/// Recoverable failures (bad input, engine-reported errors, coercion
/// failures) come back inside a failed envelope; contract violations
/// (`NotReady`, unparseable engine payloads) are raised as
/// [`FacadeFault`] instead.
pub struct EvaluationFacade {
    lifecycle: EngineLifecycle,
}

impl EvaluationFacade {
    pub fn new() -> Self {
        Self {
            lifecycle: EngineLifecycle::new(),
        }
    }

    /// Load the engine. Delegates to [`EngineLifecycle::initialize`];
    /// see there for the idempotency contract.
    pub async fn initialize<F, Fut>(&self, loader: F) -> Result<(), LoadError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<EngineHandle>> + Send + 'static,
    {
        self.lifecycle.initialize(loader).await
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    /// Evaluate one expression. Synchronous once the engine is ready.
    ///
    /// No retries anywhere: an engine-level evaluation error (say,
    /// division by zero) is an expected, reportable outcome.
    pub fn evaluate(&self, expression: &str) -> Result<EvaluationEnvelope, FacadeFault> {
        let handle = self
            .lifecycle
            .handle()
            .map_err(|_| FacadeFault::NotReady)?;

        // Rejected before the engine is ever contacted.
        if expression.trim().is_empty() {
            return Ok(EvaluationEnvelope::failure(
                expression,
                "equation cannot be empty",
            ));
        }

        tracing::debug!(equation = expression, "evaluating");
        let payload = handle.evaluate(expression);

        let raw = parse_raw(&payload).map_err(|err| FacadeFault::Protocol {
            detail: err.to_string(),
            payload: payload.clone(),
        })?;

        Ok(match normalize(&raw) {
            Ok(value) => {
                tracing::debug!(equation = expression, value = %value, "evaluated");
                EvaluationEnvelope::success(expression, value)
            }
            Err(err) => {
                tracing::debug!(equation = expression, error = %err, "evaluation failed");
                EvaluationEnvelope::failure(expression, err.to_string())
            }
        })
    }
}

impl Default for EvaluationFacade {
    fn default() -> Self {
        Self::new()
    }
}
