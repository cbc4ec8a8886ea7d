use super::*;

#[test]
fn auth_endpoint_formats_path() {
    assert_eq!(auth_endpoint("sign-in"), "/api/auth/sign-in");
    assert_eq!(auth_endpoint("session"), "/api/auth/session");
}

#[test]
fn failure_message_prefers_server_error_field() {
    let body = r#"{"error":"Invalid login credentials"}"#;
    assert_eq!(failure_message("sign-in", 401, body), "Invalid login credentials");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message("sign-in", 502, "<html>bad gateway</html>"), "sign-in failed: 502");
    assert_eq!(failure_message("refresh", 500, r#"{"error":"  "}"#), "refresh failed: 500");
}

#[test]
fn session_response_accepts_null() {
    let body: SessionResponse = serde_json::from_str(r#"{"session":null}"#).unwrap();
    assert!(body.session.is_none());
}

#[test]
fn sign_up_outcome_parses_pending_confirmation() {
    let outcome: SignUpOutcome = serde_json::from_str(r#"{"session":null,"confirmation_required":true}"#).unwrap();
    assert_eq!(outcome, SignUpOutcome { session: None, confirmation_required: true });
}

#[test]
fn sign_up_outcome_parses_session() {
    let body = r#"{"session":{"user":{"id":"u1","email":"a@b.com"},"expires_at":10},"confirmation_required":false}"#;
    let outcome: SignUpOutcome = serde_json::from_str(body).unwrap();
    assert_eq!(outcome.session.and_then(|s| s.user.email), Some("a@b.com".to_owned()));
}
