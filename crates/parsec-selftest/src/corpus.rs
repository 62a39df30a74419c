//! The built-in regression corpus.

use crate::case::{TestCase, ToleranceMode};

/// The standard corpus: arithmetic, precedence, a sample of the math
/// and string function library, and boolean comparisons.
pub fn standard_cases() -> Vec<TestCase> {
    use ToleranceMode::{BooleanEquivalent, Numeric};

    vec![
        // Basic arithmetic
        TestCase::new("2 + 3", "5", "Basic addition", Numeric),
        TestCase::new("10 - 4", "6", "Basic subtraction", Numeric),
        TestCase::new("7 * 8", "56", "Basic multiplication", Numeric),
        TestCase::new("15 / 3", "5", "Basic division", Numeric),
        TestCase::new("2 ^ 3", "8", "Power operation", Numeric),
        TestCase::new("2 + 3 * 4", "14", "Order of operations", Numeric),
        TestCase::new("(2 + 3) * 4", "20", "Parentheses precedence", Numeric),
        // Mathematical functions
        TestCase::new("sin(0)", "0", "Sine of zero", Numeric),
        TestCase::new("cos(0)", "1", "Cosine of zero", Numeric),
        TestCase::new("sqrt(16)", "4", "Square root", Numeric),
        TestCase::new("abs(-5)", "5", "Absolute value", Numeric),
        TestCase::new("round(3.6)", "4", "Rounding function", Numeric),
        // String functions
        TestCase::new("length(\"test\")", "4", "String length", Numeric),
        // Conditional expressions
        TestCase::new("5 > 3", "true", "Greater than comparison", BooleanEquivalent),
        TestCase::new("2 < 1", "false", "Less than comparison", BooleanEquivalent),
    ]
}
