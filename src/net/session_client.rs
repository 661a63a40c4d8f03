//! Session operations bridging the auth endpoints and [`SessionState`].
//!
//! Each operation applies the `begin_request` transition, performs exactly
//! one endpoint call, then applies exactly one terminal transition. A
//! failed call never propagates: it lands in `SessionState::error`, as the
//! service's own message when it sent one or as the operation's fixed
//! fallback string.
//!
//! Operations are independent. Two in flight at once race, and whichever
//! completes last wins the `loading`/`error`/`message` fields; there is no
//! de-duplication, queuing, or cancellation.

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

use leptos::prelude::{RwSignal, Update};

use crate::state::session::SessionState;
use crate::util::storage;

use super::api::{self, ApiError};
use super::types::{
    AuthResponse, ChangePasswordPayload, ForgotPasswordPayload, GoogleProfile, LoginPayload,
    RegisterPayload, ResetPasswordPayload,
};

const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";
const GOOGLE_FAILED: &str = "Google sign-in failed";
const CHANGE_PASSWORD_FAILED: &str = "Unable to change password";
const FORGOT_PASSWORD_FAILED: &str = "Unable to send reset email";
const RESET_PASSWORD_FAILED: &str = "Invalid or expired token";
const VERIFY_EMAIL_FAILED: &str = "Email verification failed";

/// Initial session state for application start, with the bearer token
/// seeded from durable storage.
#[must_use]
pub fn restore_session() -> SessionState {
    SessionState::restore(storage::read_token())
}

/// Create an account. Success leaves the visitor logged out with a
/// confirmation message.
pub async fn register(session: RwSignal<SessionState>, payload: RegisterPayload) {
    session.update(SessionState::begin_request);
    match api::register(&payload).await {
        Ok(resp) => session.update(|s| s.register_succeeded(resp.message)),
        Err(e) => fail(session, &e, REGISTER_FAILED),
    }
}

/// Log in with email and password. A token in the response is persisted
/// and flips the session to authenticated.
pub async fn login(session: RwSignal<SessionState>, payload: LoginPayload) {
    session.update(SessionState::begin_request);
    match api::login(&payload).await {
        Ok(resp) => session.update(|s| {
            if let Some(token) = apply_login(s, resp) {
                storage::write_token(&token);
            }
        }),
        Err(e) => fail(session, &e, LOGIN_FAILED),
    }
}

/// Sign in with a Google-provided profile; otherwise identical to
/// [`login`].
pub async fn google_sign_in(session: RwSignal<SessionState>, profile: GoogleProfile) {
    session.update(SessionState::begin_request);
    match api::google(&profile).await {
        Ok(resp) => session.update(|s| {
            if let Some(token) = apply_google(s, resp) {
                storage::write_token(&token);
            }
        }),
        Err(e) => fail(session, &e, GOOGLE_FAILED),
    }
}

/// End the session. The remote invalidation is best-effort: the stored
/// token and local state are cleared whether or not it succeeds.
pub async fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::begin_request);
    if let Err(e) = api::logout().await {
        leptos::logging::warn!("logout request failed, clearing session anyway: {e:?}");
    }
    storage::clear_token();
    session.update(SessionState::logged_out);
}

/// Change the signed-in user's password.
pub async fn change_password(session: RwSignal<SessionState>, payload: ChangePasswordPayload) {
    session.update(SessionState::begin_request);
    match api::change_password(&payload).await {
        Ok(resp) => session.update(|s| s.password_changed(resp.message)),
        Err(e) => fail(session, &e, CHANGE_PASSWORD_FAILED),
    }
}

/// Ask the service to mail a password-reset link.
pub async fn forgot_password(session: RwSignal<SessionState>, email: String) {
    session.update(SessionState::begin_request);
    match api::forgot_password(&ForgotPasswordPayload { email }).await {
        Ok(resp) => session.update(|s| s.reset_email_sent(resp.message)),
        Err(e) => fail(session, &e, FORGOT_PASSWORD_FAILED),
    }
}

/// Replace the password using a reset token from an emailed link.
pub async fn reset_password(
    session: RwSignal<SessionState>,
    token: String,
    payload: ResetPasswordPayload,
) {
    session.update(SessionState::begin_request);
    match api::reset_password(&token, &payload).await {
        Ok(resp) => session.update(|s| s.password_reset(resp.message)),
        Err(e) => fail(session, &e, RESET_PASSWORD_FAILED),
    }
}

/// Confirm an email address from an out-of-band link. Some service
/// responses carry a token, logging the user in as part of verification.
pub async fn verify_email(session: RwSignal<SessionState>, token: String) {
    session.update(SessionState::begin_request);
    match api::verify_email(&token).await {
        Ok(resp) => session.update(|s| {
            if let Some(issued) = apply_verify(s, resp) {
                storage::write_token(&issued);
            }
        }),
        Err(e) => fail(session, &e, VERIFY_EMAIL_FAILED),
    }
}

/// Fold a login response into the session. Returns the token to persist,
/// present only when the service actually issued one.
fn apply_login(state: &mut SessionState, resp: AuthResponse) -> Option<String> {
    let token = resp.token.clone();
    state.login_succeeded(resp.user, resp.token, resp.message);
    token
}

/// As [`apply_login`], for the federated sign-in transition.
fn apply_google(state: &mut SessionState, resp: AuthResponse) -> Option<String> {
    let token = resp.token.clone();
    state.google_succeeded(resp.user, resp.token, resp.message);
    token
}

/// As [`apply_login`], for the email-verification transition; responses
/// without a token verify the address but issue nothing to persist.
fn apply_verify(state: &mut SessionState, resp: AuthResponse) -> Option<String> {
    let token = resp.token.clone();
    state.email_verified(resp.user, resp.token, resp.message);
    token
}

/// Apply the failure transition, logging transport detail that is not fit
/// for display.
fn fail(session: RwSignal<SessionState>, error: &ApiError, fallback: &str) {
    if let ApiError::Transport(detail) = error {
        leptos::logging::warn!("auth request failed: {detail}");
    }
    session.update(|s| s.request_failed(failure_message(error, fallback)));
}

/// The string surfaced for a failed call: the service's own message when
/// it sent one, the operation's fallback otherwise.
fn failure_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Service(message) => message.clone(),
        ApiError::Transport(_) => fallback.to_owned(),
    }
}
