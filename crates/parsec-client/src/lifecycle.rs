//! Engine lifecycle: load once, share the in-flight load, gate on a
//! self-test probe.

use crate::error::{LoadError, NotReadyError};
use parsec_engine::{EngineHandle, PROBE_ANSWER};
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

type LoadOutcome = Result<EngineHandle, LoadError>;

/// The loading state machine. `Loading` carries the receiver every
/// concurrent caller awaits; `Failed` is terminal per attempt but a
/// fresh `initialize` call restarts the load.
enum LifecycleState {
    Unloaded,
    Loading(watch::Receiver<Option<LoadOutcome>>),
    Ready(EngineHandle),
    Failed(String),
}

/// Owns the engine loading state machine.
///
/// `initialize` is the only suspension point in the client: once the
/// lifecycle reports ready, evaluation is synchronous.
pub struct EngineLifecycle {
    state: Arc<Mutex<LifecycleState>>,
}

impl EngineLifecycle {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LifecycleState::Unloaded)),
        }
    }

    /// Load the engine through the injected acquisition function and
    /// verify it with the self-test probe.
    ///
    /// Idempotency contract: a call during an in-flight load joins
    /// that load instead of starting a second one, and every joined
    /// caller observes the same resolution. A call after `Ready`
    /// resolves immediately; a call after `Failed` restarts the load
    /// (failures are never retried automatically).
    pub async fn initialize<F, Fut>(&self, loader: F) -> Result<(), LoadError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<EngineHandle>> + Send + 'static,
    {
        let mut rx = {
            let mut state = self.state.lock().expect("lifecycle lock poisoned");
            match &*state {
                LifecycleState::Ready(_) => return Ok(()),
                LifecycleState::Loading(rx) => rx.clone(),
                LifecycleState::Unloaded | LifecycleState::Failed(_) => {
                    let (tx, rx) = watch::channel(None);
                    *state = LifecycleState::Loading(rx.clone());
                    self.spawn_load(loader(), tx);
                    rx
                }
            }
        };

        let outcome = loop {
            if let Some(outcome) = rx.borrow_and_update().clone() {
                break outcome;
            }
            if rx.changed().await.is_err() {
                // The load task dropped its sender without reporting.
                break Err(LoadError::Interrupted);
            }
        };
        outcome.map(|_| ())
    }

    /// Drive the load on its own task: an in-flight load runs to
    /// completion even if every initiating caller goes away.
    fn spawn_load<Fut>(&self, acquisition: Fut, tx: watch::Sender<Option<LoadOutcome>>)
    where
        Fut: Future<Output = anyhow::Result<EngineHandle>> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tracing::info!("loading evaluation engine");
            let outcome = Self::acquire_and_probe(acquisition).await;

            // Settle the state before waking the callers so is_ready()
            // agrees with every resolved initialize().
            {
                let mut state = state.lock().expect("lifecycle lock poisoned");
                *state = match &outcome {
                    Ok(handle) => {
                        tracing::info!("evaluation engine loaded, self-test passed");
                        LifecycleState::Ready(handle.clone())
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "evaluation engine load failed");
                        LifecycleState::Failed(err.to_string())
                    }
                };
            }
            let _ = tx.send(Some(outcome));
        });
    }

    async fn acquire_and_probe<Fut>(acquisition: Fut) -> LoadOutcome
    where
        Fut: Future<Output = anyhow::Result<EngineHandle>>,
    {
        let handle = acquisition
            .await
            .map_err(|err| LoadError::Acquisition(err.to_string()))?;

        // The module loaded, but is it trustworthy? A wrong probe
        // answer means a corrupted or mismatched engine build.
        let got = handle.self_check();
        if got != PROBE_ANSWER {
            return Err(LoadError::ProbeMismatch { got });
        }
        Ok(handle)
    }

    /// True iff the engine is loaded and probe-verified.
    pub fn is_ready(&self) -> bool {
        matches!(
            &*self.state.lock().expect("lifecycle lock poisoned"),
            LifecycleState::Ready(_)
        )
    }

    /// The loaded engine, or `NotReadyError` outside `Ready`.
    pub fn handle(&self) -> Result<EngineHandle, NotReadyError> {
        match &*self.state.lock().expect("lifecycle lock poisoned") {
            LifecycleState::Ready(handle) => Ok(handle.clone()),
            _ => Err(NotReadyError),
        }
    }

    /// The failure reason, when the last load attempt failed.
    pub fn failure(&self) -> Option<String> {
        match &*self.state.lock().expect("lifecycle lock poisoned") {
            LifecycleState::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }
}

impl Default for EngineLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
