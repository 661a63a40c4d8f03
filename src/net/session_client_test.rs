use super::*;
use crate::net::types::UserProfile;

fn profile() -> UserProfile {
    UserProfile {
        name: "Dana Reeve".to_owned(),
        email: "dana@example.com".to_owned(),
    }
}

fn login_response(token: Option<&str>) -> AuthResponse {
    AuthResponse {
        message: Some("welcome".to_owned()),
        token: token.map(ToOwned::to_owned),
        user: Some(profile()),
    }
}

// =============================================================
// failure_message
// =============================================================

#[test]
fn failure_message_prefers_service_message() {
    let err = ApiError::Service("Email already registered".to_owned());
    assert_eq!(failure_message(&err, REGISTER_FAILED), "Email already registered");
}

#[test]
fn failure_message_falls_back_on_transport_errors() {
    let err = ApiError::Transport("request error: connection refused".to_owned());
    assert_eq!(failure_message(&err, LOGIN_FAILED), "Login failed");
    assert_eq!(failure_message(&err, RESET_PASSWORD_FAILED), "Invalid or expired token");
    assert_eq!(failure_message(&err, CHANGE_PASSWORD_FAILED), "Unable to change password");
}

// =============================================================
// Outcome folding
// =============================================================

#[test]
fn apply_login_returns_token_for_persistence() {
    let mut state = SessionState::default();
    let token = apply_login(&mut state, login_response(Some("T")));

    assert_eq!(token.as_deref(), Some("T"));
    assert!(state.is_authenticated);
    assert_eq!(state.message.as_deref(), Some("welcome"));
}

#[test]
fn apply_login_without_token_persists_nothing() {
    let mut state = SessionState::default();
    let token = apply_login(&mut state, login_response(None));

    assert!(token.is_none());
    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
}

#[test]
fn apply_google_uses_the_google_transition() {
    let mut state = SessionState::default();
    let resp = AuthResponse {
        token: Some("T".to_owned()),
        user: Some(profile()),
        message: None,
    };
    let token = apply_google(&mut state, resp);

    assert_eq!(token.as_deref(), Some("T"));
    assert_eq!(state.message.as_deref(), Some("Signed in with Google."));
}

#[test]
fn apply_verify_with_token_logs_in_and_persists() {
    let mut state = SessionState::default();
    let token = apply_verify(&mut state, login_response(Some("T")));

    assert_eq!(token.as_deref(), Some("T"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(profile()));
}

#[test]
fn apply_verify_without_token_keeps_prior_identity() {
    let mut state = SessionState::restore(Some("tok-0".to_owned()));
    let resp = AuthResponse {
        message: None,
        token: None,
        user: None,
    };
    let token = apply_verify(&mut state, resp);

    assert!(token.is_none());
    assert_eq!(state.token.as_deref(), Some("tok-0"));
    assert!(state.is_authenticated);
    assert_eq!(state.message.as_deref(), Some("Email verified."));
}
