//! Dismissible banner for transient session feedback.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Shows the session's `error` or `message` when one is present. The
/// dismiss control clears both, leaving the rest of the session alone.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let text = move || {
        let state = session.get();
        state.error.or(state.message)
    };
    let is_error = move || session.get().error.is_some();

    view! {
        <Show when=move || text().is_some()>
            <div class=move || {
                if is_error() { "status-banner status-banner--error" } else { "status-banner" }
            }>
                <span class="status-banner__text">{move || text().unwrap_or_default()}</span>
                <button
                    class="status-banner__dismiss"
                    on:click=move |_| session.update(SessionState::clear_messages)
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
