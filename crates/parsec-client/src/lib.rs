//! Parsec Client: typed facade over the equations-parser engine
//!
//! Sits between the string-in/JSON-out evaluation engine and
//! application code that needs strongly-typed results. Three concerns
//! live here: the engine loading state machine with in-flight load
//! dedup and probe gating ([`EngineLifecycle`]), normalization of the
//! engine's tagged-string results into native values ([`normalize`]),
//! and the uniform success/error envelope the facade returns for
//! every evaluation ([`EvaluationFacade`]).
//!
//! # Example
//!
//! ```ignore
//! use parsec_client::EvaluationFacade;
//!
//! let facade = EvaluationFacade::new();
//! facade.initialize(|| async { acquire_engine().await }).await?;
//!
//! let envelope = facade.evaluate("2 + 3 * 4")?;
//! assert!(envelope.success); // value: Integer(14)
//! ```

pub mod convert;
pub mod envelope;
pub mod error;
pub mod facade;
pub mod lifecycle;

pub use convert::{normalize, TypedValue, UnrepresentedKind};
pub use envelope::EvaluationEnvelope;
pub use error::{FacadeFault, LoadError, NormalizeError, NotReadyError};
pub use facade::EvaluationFacade;
pub use lifecycle::EngineLifecycle;
