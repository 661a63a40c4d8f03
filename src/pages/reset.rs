//! Reset-password page, reached from an emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status_banner::StatusBanner;
use crate::net::session_client;
use crate::net::types::ResetPasswordPayload;
use crate::state::session::SessionState;

/// New-password form. Reads the reset token from the route parameter; the
/// service rejects the request if the token is invalid or expired.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let password = RwSignal::new(String::new());

    let submit = move || {
        let Some(token) = params.read_untracked().get("token") else {
            return;
        };
        let payload = ResetPasswordPayload {
            password: password.get(),
        };
        if payload.password.is_empty() {
            return;
        }
        password.set(String::new());
        leptos::task::spawn_local(session_client::reset_password(session, token, payload));
    };

    view! {
        <div class="auth-page">
            <h1>"Reset password"</h1>
            <StatusBanner/>
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="auth-form__label">
                    "New password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || session.get().loading
                >
                    "Reset password"
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
