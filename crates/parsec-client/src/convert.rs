//! Result normalization: tagged engine strings to native values.
//!
//! The engine encodes every value as a string plus a type code, with
//! sentinel encodings for infinities/NaN and occasional error text
//! smuggled inside string-typed payloads. This module is the single
//! place that mapping is defined; every accepted alias is enumerated
//! here rather than string-matched at call sites.

use crate::error::NormalizeError;
use parsec_engine::RawResult;
use serde::Serialize;
use std::fmt;

/// A normalized engine value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TypedValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    /// Accepted but not decoded: the engine returns complex and
    /// matrix results as opaque placeholders today.
    Unrepresented {
        kind: UnrepresentedKind,
        raw: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnrepresentedKind {
    Complex,
    Matrix,
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Float(x) => write!(f, "{}", x),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Text(s) => write!(f, "{}", s),
            TypedValue::Unrepresented { kind, .. } => match kind {
                UnrepresentedKind::Complex => write!(f, "complex number"),
                UnrepresentedKind::Matrix => write!(f, "matrix value"),
            },
        }
    }
}

/// Map a raw engine result to a typed value.
///
/// Order matters: the structured error field wins, then the sentinel
/// encodings (which override the declared type code), then type-code
/// dispatch. Unknown type codes pass the raw string through.
pub fn normalize(raw: &RawResult) -> Result<TypedValue, NormalizeError> {
    let (val, kind) = match raw {
        RawResult::Failure { error } => {
            return Err(NormalizeError::Engine(error.clone()));
        }
        RawResult::Value { val, kind } => (val.as_str(), kind.as_str()),
    };

    // Sentinels take precedence over the type code: the engine tags
    // an infinite float with a numeric code that would otherwise
    // mis-parse.
    match val {
        "inf" => return Ok(TypedValue::Float(f64::INFINITY)),
        "-inf" => return Ok(TypedValue::Float(f64::NEG_INFINITY)),
        "nan" | "-nan" => return Ok(TypedValue::Float(f64::NAN)),
        _ => {}
    }

    match kind {
        "int" | "i" => val
            .parse::<i64>()
            .map(TypedValue::Integer)
            .map_err(|_| NormalizeError::InvalidNumber {
                kind: "integer",
                value: val.to_string(),
            }),
        "float" | "f" => val
            .parse::<f64>()
            .map(TypedValue::Float)
            .map_err(|_| NormalizeError::InvalidNumber {
                kind: "float",
                value: val.to_string(),
            }),
        "boolean" | "b" => coerce_boolean(val).map(TypedValue::Boolean),
        "string" | "s" => check_embedded_error(val).map(TypedValue::Text),
        "complex" => Ok(TypedValue::Unrepresented {
            kind: UnrepresentedKind::Complex,
            raw: val.to_string(),
        }),
        "matrix" => Ok(TypedValue::Unrepresented {
            kind: UnrepresentedKind::Matrix,
            raw: val.to_string(),
        }),
        _ => Ok(TypedValue::Text(val.to_string())),
    }
}

/// Boolean coercion table (case-insensitive, whitespace-trimmed).
fn coerce_boolean(value: &str) -> Result<bool, NormalizeError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "f" | "no" | "n" | "0" | "off" | "" => Ok(false),
        _ => Err(NormalizeError::InvalidBoolean(value.to_string())),
    }
}

/// The engine sometimes signals failure through a string-typed
/// payload instead of the structured error field. An `Error:` prefix
/// marks those; the `"Error: "` prefix is stripped from the message.
fn check_embedded_error(value: &str) -> Result<String, NormalizeError> {
    if value.starts_with("Error:") {
        let message = value.strip_prefix("Error: ").unwrap_or(value);
        return Err(NormalizeError::Embedded(message.to_string()));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(val: &str, kind: &str) -> RawResult {
        RawResult::Value {
            val: val.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_structured_error_short_circuits() {
        let raw = RawResult::Failure {
            error: "Division by zero".to_string(),
        };
        assert_eq!(
            normalize(&raw),
            Err(NormalizeError::Engine("Division by zero".to_string()))
        );
    }

    #[test]
    fn test_integer_aliases() {
        assert_eq!(normalize(&value("14", "i")), Ok(TypedValue::Integer(14)));
        assert_eq!(normalize(&value("-3", "int")), Ok(TypedValue::Integer(-3)));
    }

    #[test]
    fn test_float_aliases() {
        assert_eq!(normalize(&value("2.5", "f")), Ok(TypedValue::Float(2.5)));
        assert_eq!(normalize(&value("0.1", "float")), Ok(TypedValue::Float(0.1)));
    }

    #[test]
    fn test_sentinels_override_type_code() {
        assert_eq!(
            normalize(&value("inf", "float")),
            Ok(TypedValue::Float(f64::INFINITY))
        );
        assert_eq!(
            normalize(&value("-inf", "f")),
            Ok(TypedValue::Float(f64::NEG_INFINITY))
        );
        // Even a string-typed sentinel is taken as the float marker.
        assert_eq!(
            normalize(&value("inf", "s")),
            Ok(TypedValue::Float(f64::INFINITY))
        );
        match normalize(&value("nan", "f")).unwrap() {
            TypedValue::Float(x) => assert!(x.is_nan()),
            other => panic!("expected NaN float, got {:?}", other),
        }
        match normalize(&value("-nan", "f")).unwrap() {
            TypedValue::Float(x) => assert!(x.is_nan()),
            other => panic!("expected NaN float, got {:?}", other),
        }
    }

    #[test]
    fn test_boolean_truthy_aliases() {
        for v in ["true", "TRUE", "t", "yes", "Y", "1", "on", " on "] {
            assert_eq!(
                normalize(&value(v, "b")),
                Ok(TypedValue::Boolean(true)),
                "value: {:?}",
                v
            );
        }
    }

    #[test]
    fn test_boolean_falsy_aliases() {
        for v in ["false", "F", "no", "n", "0", "off", "", "   "] {
            assert_eq!(
                normalize(&value(v, "boolean")),
                Ok(TypedValue::Boolean(false)),
                "value: {:?}",
                v
            );
        }
    }

    #[test]
    fn test_boolean_rejects_everything_else() {
        assert_eq!(
            normalize(&value("maybe", "b")),
            Err(NormalizeError::InvalidBoolean("maybe".to_string()))
        );
    }

    #[test]
    fn test_string_passthrough() {
        assert_eq!(
            normalize(&value("Hello World", "s")),
            Ok(TypedValue::Text("Hello World".to_string()))
        );
    }

    #[test]
    fn test_embedded_error_detected() {
        assert_eq!(
            normalize(&value("Error: bad input", "s")),
            Err(NormalizeError::Embedded("bad input".to_string()))
        );
    }

    #[test]
    fn test_embedded_error_without_space_keeps_full_text() {
        assert_eq!(
            normalize(&value("Error:bad", "string")),
            Err(NormalizeError::Embedded("Error:bad".to_string()))
        );
    }

    #[test]
    fn test_complex_and_matrix_are_unrepresented() {
        assert_eq!(
            normalize(&value("1+2i", "complex")),
            Ok(TypedValue::Unrepresented {
                kind: UnrepresentedKind::Complex,
                raw: "1+2i".to_string()
            })
        );
        assert_eq!(
            normalize(&value("[[1,0],[0,1]]", "matrix")),
            Ok(TypedValue::Unrepresented {
                kind: UnrepresentedKind::Matrix,
                raw: "[[1,0],[0,1]]".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_type_code_falls_back_to_text() {
        assert_eq!(
            normalize(&value("whatever", "mystery")),
            Ok(TypedValue::Text("whatever".to_string()))
        );
    }

    #[test]
    fn test_unparseable_number_fails() {
        assert!(matches!(
            normalize(&value("fourteen", "i")),
            Err(NormalizeError::InvalidNumber { kind: "integer", .. })
        ));
        assert!(matches!(
            normalize(&value("1.2.3", "f")),
            Err(NormalizeError::InvalidNumber { kind: "float", .. })
        ));
    }

    #[test]
    fn test_display_renders_native_forms() {
        assert_eq!(TypedValue::Integer(14).to_string(), "14");
        assert_eq!(TypedValue::Float(2.5).to_string(), "2.5");
        assert_eq!(TypedValue::Float(4.0).to_string(), "4");
        assert_eq!(TypedValue::Boolean(true).to_string(), "true");
        assert_eq!(
            TypedValue::Unrepresented {
                kind: UnrepresentedKind::Matrix,
                raw: String::new()
            }
            .to_string(),
            "matrix value"
        );
    }
}
