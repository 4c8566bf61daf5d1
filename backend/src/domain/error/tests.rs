//! Tests for the domain error payload.

use super::*;
use crate::domain::TraceId;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let error = Error::invalid_request("bad");
    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(value, json!({"code": "invalid_request", "message": "bad"}));
}

#[rstest]
fn deserialises_snake_case_trace_alias(expected_trace_id: String) {
    let payload = json!({
        "code": "not_found",
        "message": "missing",
        "trace_id": expected_trace_id,
        "details": {"id": "x"},
    });
    let error: Error = serde_json::from_value(payload).expect("error deserialises");

    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert_eq!(error.details(), Some(&json!({"id": "x"})));
}
