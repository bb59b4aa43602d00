use super::*;

#[test]
fn status_error_extracts_server_message() {
    let err = status_error(409, r#"{"message":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 409, message: Some("Email already registered".to_owned()) }
    );
    assert_eq!(err.server_message(), Some("Email already registered"));
}

#[test]
fn status_error_tolerates_non_json_body() {
    let err = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.server_message(), None);
}

#[test]
fn blank_server_message_is_ignored() {
    let err = status_error(400, r#"{"message":"   "}"#);
    assert_eq!(err.server_message(), None);
}

#[test]
fn network_errors_have_no_server_message() {
    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
    assert_eq!(ApiError::Unavailable.server_message(), None);
}

#[test]
fn error_display_is_descriptive() {
    assert_eq!(
        ApiError::Status { status: 401, message: None }.to_string(),
        "request failed with status 401"
    );
    assert_eq!(ApiError::Network("timeout".to_owned()).to_string(), "network error: timeout");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_client_is_unavailable_without_browser() {
    let client = HttpAuthClient::new(ClientConfig::with_api_base_url("/api"));
    let result = futures::executor::block_on(client.me());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(client.logout());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn http_client_endpoints_use_configured_base() {
    let client = HttpAuthClient::new(ClientConfig::with_api_base_url("https://api.example.com/"));
    assert_eq!(client.endpoint(ME_PATH), "https://api.example.com/students/me");
    assert_eq!(client.endpoint(LOGOUT_PATH), "https://api.example.com/students/logout");
}
