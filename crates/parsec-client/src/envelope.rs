//! The uniform success/error wrapper returned by every evaluation.

use crate::convert::TypedValue;
use serde::Serialize;

/// Exactly one of `value`/`error` is present, according to `success`.
/// The constructors are the only way the invariant is established;
/// the original equation is always carried for traceability.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvaluationEnvelope {
    pub equation: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TypedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationEnvelope {
    pub fn success(equation: impl Into<String>, value: TypedValue) -> Self {
        Self {
            equation: equation.into(),
            success: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(equation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            equation: equation.into(),
            success: false,
            value: None,
            error: Some(error.into()),
        }
    }
}
