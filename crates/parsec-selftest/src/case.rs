//! Test cases and the tolerant comparison rules they select.

use serde::{Deserialize, Serialize};

/// Numeric comparisons pass when the absolute difference is below
/// this threshold.
pub const PRECISION_THRESHOLD: f64 = 1e-4;

/// How a case's expected value is matched against the actual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToleranceMode {
    /// Parse both sides as floats and compare within
    /// [`PRECISION_THRESHOLD`]; fall back to exact string equality
    /// when either side does not parse.
    Numeric,
    /// Lowercase equality, or `"1"`/`"true"` and `"0"`/`"false"`
    /// equivalence.
    BooleanEquivalent,
    /// Literal string equality.
    Exact,
}

impl ToleranceMode {
    /// Apply this mode's comparison rule.
    pub fn matches(&self, actual: &str, expected: &str) -> bool {
        match self {
            ToleranceMode::Numeric => numeric_matches(actual, expected),
            ToleranceMode::BooleanEquivalent => boolean_matches(actual, expected),
            ToleranceMode::Exact => actual == expected,
        }
    }
}

fn numeric_matches(actual: &str, expected: &str) -> bool {
    // NaN parses as a float in Rust but compares unequal to itself,
    // so it is treated as non-numeric and falls back to string
    // equality along with everything else that does not parse.
    let parsed = (actual.parse::<f64>(), expected.parse::<f64>());
    if let (Ok(a), Ok(e)) = parsed {
        if !a.is_nan() && !e.is_nan() {
            return (a - e).abs() < PRECISION_THRESHOLD;
        }
    }
    actual == expected
}

fn boolean_matches(actual: &str, expected: &str) -> bool {
    actual.eq_ignore_ascii_case(expected)
        || (actual == "1" && expected == "true")
        || (actual == "0" && expected == "false")
}

/// One regression case: an equation, the expected rendering of its
/// result, and the comparison rule to apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub equation: String,
    pub expected: String,
    pub description: String,
    pub tolerance: ToleranceMode,
}

impl TestCase {
    pub fn new(
        equation: impl Into<String>,
        expected: impl Into<String>,
        description: impl Into<String>,
        tolerance: ToleranceMode,
    ) -> Self {
        Self {
            equation: equation.into(),
            expected: expected.into(),
            description: description.into(),
            tolerance,
        }
    }
}
