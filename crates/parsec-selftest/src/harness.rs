//! Sequential case runner and report aggregation.

use crate::case::TestCase;
use parsec_client::EvaluationFacade;
use serde::Serialize;

/// Outcome of one case, in corpus order.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub description: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Aggregated run results. Rebuilt fresh on every run, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestReport {
    pub passed: u32,
    pub failed: u32,
    pub cases: Vec<CaseOutcome>,
}

impl TestReport {
    fn record(&mut self, outcome: CaseOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.cases.push(outcome);
    }
}

/// Run the corpus through the facade, strictly in order.
///
/// Requires a ready facade; never calls `initialize()` itself. A
/// fault on one case (as opposed to a reported engine error) is
/// recorded and the run continues — a single bad case never aborts
/// the corpus.
pub fn run(facade: &EvaluationFacade, cases: &[TestCase]) -> TestReport {
    let mut report = TestReport::default();

    for case in cases {
        let outcome = match facade.evaluate(&case.equation) {
            Err(fault) => CaseOutcome {
                description: case.description.clone(),
                passed: false,
                expected: case.expected.clone(),
                actual: fault.to_string(),
            },
            Ok(envelope) if !envelope.success => CaseOutcome {
                description: case.description.clone(),
                passed: false,
                expected: case.expected.clone(),
                actual: envelope.error.unwrap_or_default(),
            },
            Ok(envelope) => {
                let actual = envelope
                    .value
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                let passed = case.tolerance.matches(&actual, &case.expected);
                CaseOutcome {
                    description: case.description.clone(),
                    passed,
                    expected: case.expected.clone(),
                    actual,
                }
            }
        };
        report.record(outcome);
    }

    tracing::info!(
        passed = report.passed,
        failed = report.failed,
        "self-test run complete"
    );
    report
}
