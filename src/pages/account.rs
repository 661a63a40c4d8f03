//! Account page — signed-in identity, password change, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banner::StatusBanner;
use crate::net::session_client;
use crate::net::types::ChangePasswordPayload;
use crate::state::session::SessionState;

/// Account page for the signed-in administrator.
/// Redirects to `/login` when the session is not authenticated.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let submit = move || {
        let payload = ChangePasswordPayload {
            old_password: old_password.get(),
            new_password: new_password.get(),
        };
        if payload.old_password.is_empty() || payload.new_password.is_empty() {
            return;
        }
        old_password.set(String::new());
        new_password.set(String::new());
        leptos::task::spawn_local(session_client::change_password(session, payload));
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(session_client::logout(session));
    };

    view! {
        <div class="account-page">
            <header class="account-page__header">
                <h1>"Account"</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <StatusBanner/>
            <p class="account-page__identity">
                {move || {
                    session
                        .get()
                        .user
                        .map(|u| format!("{} ({})", u.name, u.email))
                        .unwrap_or_else(|| "Signed in".to_owned())
                }}
            </p>
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h2>"Change password"</h2>
                <label class="auth-form__label">
                    "Current password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "New password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || session.get().loading
                >
                    "Change password"
                </button>
            </form>
        </div>
    }
}
