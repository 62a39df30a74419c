//! End-to-end tests for the facade with a scripted engine.
//!
//! Exercises the full path: lifecycle initialization, engine
//! invocation, payload parsing, normalization, envelope shaping.

use parsec_client::{EvaluationFacade, FacadeFault, TypedValue, UnrepresentedKind};
use parsec_engine::{EngineHandle, ScriptedEngine};
use std::sync::Arc;

async fn ready_facade(engine: ScriptedEngine) -> (EvaluationFacade, Arc<ScriptedEngine>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let engine = Arc::new(engine);
    let facade = EvaluationFacade::new();
    let handle = engine.clone();
    facade
        .initialize(move || async move { Ok(handle as EngineHandle) })
        .await
        .unwrap();
    (facade, engine)
}

// =============================================================================
// Typed results
// =============================================================================

#[tokio::test]
async fn test_integer_result() {
    let (facade, _) = ready_facade(ScriptedEngine::new().value("2 + 3 * 4", "14", "i")).await;

    let envelope = facade.evaluate("2 + 3 * 4").unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.value, Some(TypedValue::Integer(14)));
    assert_eq!(envelope.equation, "2 + 3 * 4");
    assert_eq!(envelope.error, None);
}

#[tokio::test]
async fn test_float_result() {
    let (facade, _) = ready_facade(ScriptedEngine::new().value("sin(pi/2)", "1", "f")).await;

    let envelope = facade.evaluate("sin(pi/2)").unwrap();
    assert_eq!(envelope.value, Some(TypedValue::Float(1.0)));
}

#[tokio::test]
async fn test_boolean_result() {
    let (facade, _) = ready_facade(ScriptedEngine::new().value("5 > 3", "true", "b")).await;

    let envelope = facade.evaluate("5 > 3").unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.value, Some(TypedValue::Boolean(true)));
}

#[tokio::test]
async fn test_string_result() {
    let (facade, _) = ready_facade(
        ScriptedEngine::new().value("concat('Hello', ' World')", "Hello World", "s"),
    )
    .await;

    let envelope = facade.evaluate("concat('Hello', ' World')").unwrap();
    assert_eq!(
        envelope.value,
        Some(TypedValue::Text("Hello World".to_string()))
    );
}

#[tokio::test]
async fn test_infinite_float_result() {
    let (facade, _) = ready_facade(ScriptedEngine::new().value("1e400", "inf", "float")).await;

    let envelope = facade.evaluate("1e400").unwrap();
    assert_eq!(envelope.value, Some(TypedValue::Float(f64::INFINITY)));
}

#[tokio::test]
async fn test_matrix_result_is_accepted_but_opaque() {
    let (facade, _) =
        ready_facade(ScriptedEngine::new().value("eye(2)", "[[1,0],[0,1]]", "matrix")).await;

    let envelope = facade.evaluate("eye(2)").unwrap();
    assert!(envelope.success);
    assert_eq!(
        envelope.value,
        Some(TypedValue::Unrepresented {
            kind: UnrepresentedKind::Matrix,
            raw: "[[1,0],[0,1]]".to_string()
        })
    );
}

// =============================================================================
// Failure paths
// =============================================================================

#[tokio::test]
async fn test_engine_error_envelope() {
    let (facade, _) = ready_facade(ScriptedEngine::new().error("5 / 0", "Division by zero")).await;

    let envelope = facade.evaluate("5 / 0").unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Division by zero"));
    assert_eq!(envelope.value, None);
}

#[tokio::test]
async fn test_empty_equation_rejected_without_engine_call() {
    let (facade, engine) = ready_facade(ScriptedEngine::new()).await;

    let envelope = facade.evaluate("   ").unwrap();
    assert!(!envelope.success);
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_unparseable_payload_is_a_fault_not_an_envelope() {
    let (facade, _) = ready_facade(ScriptedEngine::new().raw("x", "<<binary junk>>")).await;

    assert!(matches!(
        facade.evaluate("x"),
        Err(FacadeFault::Protocol { .. })
    ));
}

#[tokio::test]
async fn test_evaluate_before_initialize_is_a_fault() {
    let facade = EvaluationFacade::new();
    assert!(!facade.is_ready());
    assert!(matches!(
        facade.evaluate("1 + 1"),
        Err(FacadeFault::NotReady)
    ));
}

// =============================================================================
// Envelope serialization
// =============================================================================

#[tokio::test]
async fn test_envelope_serializes_one_branch_only() {
    let (facade, _) = ready_facade(
        ScriptedEngine::new()
            .value("2 + 3", "5", "i")
            .error("5 / 0", "Division by zero"),
    )
    .await;

    let ok = serde_json::to_value(facade.evaluate("2 + 3").unwrap()).unwrap();
    assert_eq!(ok["success"], true);
    assert_eq!(ok["value"], 5);
    assert!(ok.get("error").is_none());

    let err = serde_json::to_value(facade.evaluate("5 / 0").unwrap()).unwrap();
    assert_eq!(err["success"], false);
    assert_eq!(err["error"], "Division by zero");
    assert!(err.get("value").is_none());
}
