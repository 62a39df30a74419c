//! Parsec Self-Test: regression harness with tolerant comparison
//!
//! Drives a corpus of equations through a ready
//! [`parsec_client::EvaluationFacade`] and aggregates an ordered
//! pass/fail report. Comparison is tolerant by design: numeric cases
//! match within a small threshold and boolean cases accept the
//! engine's `1`/`0` renderings, so the corpus survives harmless
//! formatting differences between engine builds.

pub mod case;
pub mod corpus;
pub mod harness;

pub use case::{TestCase, ToleranceMode, PRECISION_THRESHOLD};
pub use corpus::standard_cases;
pub use harness::{run, CaseOutcome, TestReport};
