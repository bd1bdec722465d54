#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        login_id: "jdoe".into(),
        password: "hunter2".into(),
    }
}

#[tokio::test]
async fn signup_posts_camel_case_payload_exactly_once() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/signup")
            .header("content-type", "application/json")
            .json_body(json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "loginId": "jdoe",
                "password": "hunter2"
            }));
        then.status(200)
            .body("User created successfully with ID: 1");
    });

    api_client(&server).signup(signup_request()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn signup_ignores_success_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/signup");
        then.status(201).body("{\"unexpected\": \"shape\"}");
    });

    // Any 2xx counts as accepted regardless of what the body holds.
    assert!(api_client(&server).signup(signup_request()).await.is_ok());
}

#[tokio::test]
async fn signup_surfaces_rejection_body_verbatim() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/signup");
        then.status(400).body("loginId taken");
    });

    let err = api_client(&server)
        .signup(signup_request())
        .await
        .unwrap_err();
    assert_eq!(err.code, "SIGNUP_REJECTED");
    assert_eq!(err.error, "loginId taken");
    assert_eq!(err.to_string(), "loginId taken");
}

#[tokio::test]
async fn signup_passes_korean_rejection_message_through() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/signup");
        then.status(400).body("이미 존재하는 ID 입니다.");
    });

    let err = api_client(&server)
        .signup(signup_request())
        .await
        .unwrap_err();
    assert_eq!(err.error, "이미 존재하는 ID 입니다.");
}

#[tokio::test]
async fn signup_maps_transport_failure_to_request_failed() {
    // Nothing listens on port 9 (discard); the connect fails immediately.
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");

    let err = client.signup(signup_request()).await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.starts_with("Request failed:"));
}
