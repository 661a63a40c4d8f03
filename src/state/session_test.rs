use super::*;

fn profile() -> UserProfile {
    UserProfile {
        name: "Dana Reeve".to_owned(),
        email: "dana@example.com".to_owned(),
    }
}

fn authenticated() -> SessionState {
    let mut state = SessionState::default();
    state.login_succeeded(Some(profile()), Some("tok-1".to_owned()), None);
    state
}

fn assert_auth_invariant(state: &SessionState) {
    assert_eq!(state.is_authenticated, state.token.is_some());
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn restore_with_token_is_authenticated() {
    let state = SessionState::restore(Some("tok-1".to_owned()));
    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_auth_invariant(&state);
}

#[test]
fn restore_without_token_is_anonymous() {
    let state = SessionState::restore(None);
    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
    assert_auth_invariant(&state);
}

// =============================================================
// begin_request
// =============================================================

#[test]
fn begin_request_sets_loading_and_clears_feedback() {
    let mut state = SessionState::default();
    state.request_failed("old error".to_owned());
    state.message = Some("old message".to_owned());

    state.begin_request();

    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.message.is_none());
}

#[test]
fn begin_request_keeps_identity_fields() {
    let mut state = authenticated();
    state.begin_request();

    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(profile()));
    assert_auth_invariant(&state);
}

// =============================================================
// Login-shaped transitions
// =============================================================

#[test]
fn login_success_populates_session() {
    let mut state = SessionState::default();
    state.begin_request();
    state.login_succeeded(Some(profile()), Some("T".to_owned()), Some("hi".to_owned()));

    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("T"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(profile()));
    assert_eq!(state.message.as_deref(), Some("hi"));
    assert!(state.error.is_none());
    assert_auth_invariant(&state);
}

#[test]
fn login_success_without_token_is_not_authenticated() {
    let mut state = SessionState::default();
    state.login_succeeded(Some(profile()), None, None);

    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
    assert_eq!(state.message.as_deref(), Some("Login successful."));
    assert_auth_invariant(&state);
}

#[test]
fn google_success_has_its_own_default_message() {
    let mut state = SessionState::default();
    state.google_succeeded(Some(profile()), Some("T".to_owned()), None);

    assert!(state.is_authenticated);
    assert_eq!(state.message.as_deref(), Some("Signed in with Google."));
    assert_auth_invariant(&state);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logged_out_resets_session_unconditionally() {
    let mut state = authenticated();
    state.error = Some("stale".to_owned());

    state.logged_out();

    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.message.as_deref(), Some("Logged out."));
    assert_auth_invariant(&state);
}

// =============================================================
// Message-only transitions
// =============================================================

#[test]
fn register_success_prefers_service_message() {
    let mut state = SessionState::default();
    state.register_succeeded(Some("Check your inbox.".to_owned()));
    assert_eq!(state.message.as_deref(), Some("Check your inbox."));

    let mut state = SessionState::default();
    state.register_succeeded(None);
    assert_eq!(state.message.as_deref(), Some("Registration successful."));
}

#[test]
fn message_only_transitions_keep_identity_fields() {
    let mut state = authenticated();
    state.password_changed(None);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.message.as_deref(), Some("Password changed."));

    let mut state = SessionState::default();
    state.reset_email_sent(None);
    assert_eq!(state.message.as_deref(), Some("Reset email sent."));
    assert!(!state.is_authenticated);

    let mut state = SessionState::default();
    state.password_reset(None);
    assert_eq!(state.message.as_deref(), Some("Password reset successful."));
    assert_auth_invariant(&state);
}

// =============================================================
// Email verification
// =============================================================

#[test]
fn email_verified_with_token_logs_in() {
    let mut state = SessionState::default();
    state.email_verified(Some(profile()), Some("T".to_owned()), None);

    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("T"));
    assert_eq!(state.user, Some(profile()));
    assert_eq!(state.message.as_deref(), Some("Email verified."));
    assert_auth_invariant(&state);
}

#[test]
fn email_verified_without_token_keeps_identity() {
    let mut state = authenticated();
    state.email_verified(None, None, Some("Verified.".to_owned()));

    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(profile()));
    assert_eq!(state.message.as_deref(), Some("Verified."));
    assert_auth_invariant(&state);
}

// =============================================================
// Failure and dismissal
// =============================================================

#[test]
fn request_failed_preserves_identity_fields() {
    let mut state = authenticated();
    state.begin_request();
    state.request_failed("Login failed".to_owned());

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Login failed"));
    assert!(state.message.is_none());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(profile()));
    assert_auth_invariant(&state);
}

#[test]
fn terminal_transitions_never_leave_both_error_and_message() {
    let mut state = SessionState::default();
    state.request_failed("boom".to_owned());
    state.login_succeeded(None, Some("T".to_owned()), None);
    assert!(state.error.is_none());
    assert!(state.message.is_some());

    state.request_failed("boom again".to_owned());
    assert!(state.message.is_none());
    assert!(state.error.is_some());
}

#[test]
fn clear_messages_touches_only_feedback() {
    let mut state = authenticated();
    state.request_failed("boom".to_owned());

    state.clear_messages();

    assert!(state.error.is_none());
    assert!(state.message.is_none());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(profile()));
    assert!(!state.loading);
}
