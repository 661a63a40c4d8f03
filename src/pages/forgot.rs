//! Forgot-password page.

use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::net::session_client;
use crate::state::session::SessionState;

/// Requests a password-reset email. The service mails a link containing
/// the reset token; the link lands on the reset page.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());

    let submit = move || {
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            return;
        }
        leptos::task::spawn_local(session_client::forgot_password(session, address));
    };

    view! {
        <div class="auth-page">
            <h1>"Forgot password"</h1>
            <p>"We will email you a link to reset it."</p>
            <StatusBanner/>
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || session.get().loading
                >
                    "Send reset email"
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
