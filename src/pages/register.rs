//! Registration page.

use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::net::session_client;
use crate::net::types::RegisterPayload;
use crate::state::session::SessionState;

/// Account creation form. A successful registration does not log in; the
/// confirmation message points the visitor back to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move || {
        let payload = RegisterPayload {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
            return;
        }
        leptos::task::spawn_local(session_client::register(session, payload));
    };

    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>
            <StatusBanner/>
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
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
                    "Create account"
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
