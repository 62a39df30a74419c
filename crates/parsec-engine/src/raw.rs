//! Wire shape of a single engine reply.

use serde::Deserialize;

/// One evaluation reply as the engine encodes it: either a tagged
/// value or a structured error. Transient; normalized immediately and
/// never retained.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawResult {
    /// The engine reported a failure through the structured field.
    Failure { error: String },
    /// A successful evaluation: string-encoded value plus a type code
    /// (`i`/`int`, `f`/`float`, `b`/`boolean`, `s`/`string`,
    /// `complex`, `matrix`).
    Value {
        val: String,
        #[serde(rename = "type")]
        kind: String,
    },
}

/// Parse the engine's JSON payload. A parse failure here means the
/// engine contract itself is broken, not that the expression was bad.
pub fn parse_raw(payload: &str) -> Result<RawResult, serde_json::Error> {
    serde_json::from_str(payload)
}
