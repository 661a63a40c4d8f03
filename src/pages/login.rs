//! Login page for the admin dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banner::StatusBanner;
use crate::net::session_client;
use crate::net::types::LoginPayload;
use crate::state::session::SessionState;

/// Email/password login form with links into the other auth flows.
/// Redirects to the account page once the session is authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    Effect::new(move || {
        if session.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let submit = move || {
        let payload = LoginPayload {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if payload.email.is_empty() || payload.password.is_empty() {
            return;
        }
        leptos::task::spawn_local(session_client::login(session, payload));
    };

    view! {
        <div class="auth-page">
            <h1>"Oakline"</h1>
            <p>"Sign in to manage site content"</p>
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
                    {move || if session.get().loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/register">"Create an account"</a>
                " · "
                <a href="/forgot-password">"Forgot password?"</a>
            </p>
        </div>
    }
}
