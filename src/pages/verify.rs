//! Email-verification page, reached from an emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status_banner::StatusBanner;
use crate::net::session_client;
use crate::state::session::SessionState;

/// Fires the verification call once for the token in the route parameter
/// and shows the outcome. A response that carries a token signs the user
/// in directly.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    // Verify once per token, including client-side navigations between
    // verification links.
    let requested = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(token) = params.read().get("token") else {
            return;
        };
        if requested.get_untracked().as_deref() == Some(token.as_str()) {
            return;
        }
        requested.set(Some(token.clone()));
        leptos::task::spawn_local(session_client::verify_email(session, token));
    });

    view! {
        <div class="auth-page">
            <h1>"Email verification"</h1>
            <StatusBanner/>
            <Show when=move || session.get().loading>
                <p>"Verifying..."</p>
            </Show>
            <p class="auth-page__links">
                <a href="/login">"Go to sign in"</a>
            </p>
        </div>
    }
}
