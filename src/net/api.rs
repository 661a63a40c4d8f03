//! REST calls to the remote authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get [`ApiError`] instead of panics. `Service` carries the
//! service's own message, fit for display; `Transport` carries detail that
//! is only worth logging. No call is retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthResponse, ChangePasswordPayload, ForgotPasswordPayload, GoogleProfile, LoginPayload,
    RegisterPayload, ResetPasswordPayload,
};

/// Base address of the authentication service, overridable at build time
/// for deployments where the API is not served under the site origin.
pub const API_BASE: &str = match option_env!("OAKLINE_API_BASE") {
    Some(base) => base,
    None => "/api/v1",
};

/// Failure from an auth endpoint call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered and reported a problem in its body.
    Service(String),
    /// The request never produced a usable service response.
    Transport(String),
}

/// Create an account via `POST /auth/register`.
pub async fn register(payload: &RegisterPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("{API_BASE}/auth/register"), payload, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(server_stub())
    }
}

/// Authenticate with email and password via `POST /auth/login`.
pub async fn login(payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("{API_BASE}/auth/login"), payload, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(server_stub())
    }
}

/// Federated sign-in via `POST /auth/google`.
pub async fn google(profile: &GoogleProfile) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("{API_BASE}/auth/google"), profile, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err(server_stub())
    }
}

/// Invalidate the server-side session via `POST /auth/logout`.
/// Sends the bearer header when a token is stored.
pub async fn logout() -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&format!("{API_BASE}/auth/logout"), true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_stub())
    }
}

/// Change the signed-in user's password via `POST /auth/change-password`.
/// Sends the bearer header when a token is stored.
pub async fn change_password(payload: &ChangePasswordPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("{API_BASE}/auth/change-password"), payload, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(server_stub())
    }
}

/// Request a password-reset email via `POST /auth/forgot-password`.
pub async fn forgot_password(payload: &ForgotPasswordPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("{API_BASE}/auth/forgot-password"), payload, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(server_stub())
    }
}

/// Replace the password via `POST /auth/reset-password/{token}`, with the
/// reset token from the emailed link in the request path.
pub async fn reset_password(
    token: &str,
    payload: &ResetPasswordPayload,
) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("{API_BASE}/auth/reset-password/{token}"), payload, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(server_stub())
    }
}

/// Confirm an email address via `POST /auth/verify-email/{token}`.
pub async fn verify_email(token: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&format!("{API_BASE}/auth/verify-email/{token}"), false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(server_stub())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

/// Build a POST request with cookies included and, when asked and
/// available, the stored bearer token as a credential header.
#[cfg(feature = "hydrate")]
fn request_for(url: &str, with_bearer: bool) -> gloo_net::http::RequestBuilder {
    let mut req = gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include);
    if with_bearer {
        if let Some(token) = crate::util::storage::read_token() {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
    }
    req
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(
    url: &str,
    body: &T,
    with_bearer: bool,
) -> Result<AuthResponse, ApiError> {
    let resp = request_for(url, with_bearer)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("request build error: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("request error: {e}")))?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_empty(url: &str, with_bearer: bool) -> Result<AuthResponse, ApiError> {
    let resp = request_for(url, with_bearer)
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("request error: {e}")))?;
    read_response(resp).await
}

/// Interpret a response: non-success statuses become `Service` errors when
/// the body carries a usable message, `Transport` otherwise.
#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<AuthResponse, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        if let Ok(body) = resp.json::<serde_json::Value>().await {
            if let Some(message) = body_message(&body) {
                return Err(ApiError::Service(message.to_owned()));
            }
        }
        return Err(ApiError::Transport(format!("HTTP error: {status}")));
    }
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Transport(format!("parse error: {e}")))
}

/// Pull the service's human-readable message out of an error body,
/// preferring `message` over `error`.
#[cfg(any(test, feature = "hydrate"))]
fn body_message(body: &serde_json::Value) -> Option<&str> {
    body.get("message")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("error").and_then(|v| v.as_str()))
}
