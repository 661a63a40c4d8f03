#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

/// Authentication session for the admin dashboard.
///
/// Owned by the app root as an `RwSignal` and mutated only through the
/// named transitions below, applied by the operations in
/// [`crate::net::session_client`]. Every transition upholds
/// `is_authenticated == token.is_some()`, and `error`/`message` are never
/// both present after a terminal transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub loading: bool,
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl SessionState {
    /// Initial state at application start, seeded from durable storage.
    #[must_use]
    pub fn restore(token: Option<String>) -> Self {
        Self {
            is_authenticated: token.is_some(),
            token,
            ..Self::default()
        }
    }

    /// A request is in flight; stale feedback from earlier operations is
    /// dropped.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.message = None;
    }

    /// Account created. The visitor stays logged out until they log in.
    pub fn register_succeeded(&mut self, message: Option<String>) {
        self.finish_with_message(message, "Registration successful.");
    }

    /// Credentials accepted. `is_authenticated` follows token presence: a
    /// success response that carries no token does not authenticate.
    pub fn login_succeeded(
        &mut self,
        user: Option<UserProfile>,
        token: Option<String>,
        message: Option<String>,
    ) {
        self.user = user;
        self.is_authenticated = token.is_some();
        self.token = token;
        self.finish_with_message(message, "Login successful.");
    }

    /// Federated sign-in accepted; same shape as [`Self::login_succeeded`].
    pub fn google_succeeded(
        &mut self,
        user: Option<UserProfile>,
        token: Option<String>,
        message: Option<String>,
    ) {
        self.user = user;
        self.is_authenticated = token.is_some();
        self.token = token;
        self.finish_with_message(message, "Signed in with Google.");
    }

    /// Local session cleared, whatever the remote invalidation said.
    pub fn logged_out(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.finish_with_message(None, "Logged out.");
    }

    /// Password change confirmed for the signed-in user.
    pub fn password_changed(&mut self, message: Option<String>) {
        self.finish_with_message(message, "Password changed.");
    }

    /// The service accepted a reset request and mailed a link.
    pub fn reset_email_sent(&mut self, message: Option<String>) {
        self.finish_with_message(message, "Reset email sent.");
    }

    /// Password replaced via a reset link.
    pub fn password_reset(&mut self, message: Option<String>) {
        self.finish_with_message(message, "Password reset successful.");
    }

    /// Email address confirmed. A response token means the service logged
    /// the user in as part of verification; without one the current
    /// identity fields are left alone.
    pub fn email_verified(
        &mut self,
        user: Option<UserProfile>,
        token: Option<String>,
        message: Option<String>,
    ) {
        if token.is_some() {
            self.user = user;
            self.is_authenticated = true;
            self.token = token;
        }
        self.finish_with_message(message, "Email verified.");
    }

    /// The operation's call failed; identity fields are untouched.
    pub fn request_failed(&mut self, error: String) {
        self.loading = false;
        self.message = None;
        self.error = Some(error);
    }

    /// Dismiss transient feedback without touching anything else.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.message = None;
    }

    fn finish_with_message(&mut self, message: Option<String>, default: &str) {
        self.loading = false;
        self.error = None;
        self.message = Some(message.unwrap_or_else(|| default.to_owned()));
    }
}
