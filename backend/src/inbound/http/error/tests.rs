//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn body_of(error: &Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("resident details are invalid")
        .with_details(json!({ "fields": { "flat": { "code": "duplicate_flat" } } }));

    let (status, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "resident details are invalid");
    assert_eq!(body["details"]["fields"]["flat"]["code"], "duplicate_flat");
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("visitor repository error: disk full")
        .with_details(json!({ "secret": "x" }));

    let (status, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "code": "internal_error", "message": "Internal server error" })
    );
}
