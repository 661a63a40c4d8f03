//! Wire types for the remote authentication service.

use serde::{Deserialize, Serialize};

/// Authenticated identity as reported by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Response body shared by every auth endpoint: a human-readable message,
/// plus `token`/`user` on login-shaped responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Payload for account creation.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for email/password login.
#[derive(Clone, Debug, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Profile obtained out-of-band from the Google sign-in flow, replayed to
/// the service's federated-login endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct GoogleProfile {
    pub name: String,
    pub email: String,
}

/// Payload for an authenticated password change.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    pub old_password: String,
    pub new_password: String,
}

/// Payload requesting a password-reset email.
#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

/// Payload carrying the replacement password for a reset link.
#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordPayload {
    pub password: String,
}
