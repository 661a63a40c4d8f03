//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::session_client;
use crate::pages::{
    account::AccountPage, forgot::ForgotPasswordPage, login::LoginPage, register::RegisterPage,
    reset::ResetPasswordPage, verify::VerifyEmailPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, seeded from durable storage, and
/// sets up client-side routing for the auth flows. Only the operations in
/// [`session_client`] mutate the session signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session_client::restore_session());
    provide_context::<RwSignal<SessionState>>(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/oakline.css"/>
        <Title text="Oakline"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AccountPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=(StaticSegment("reset-password"), ParamSegment("token"))
                    view=ResetPasswordPage
                />
                <Route
                    path=(StaticSegment("verify-email"), ParamSegment("token"))
                    view=VerifyEmailPage
                />
            </Routes>
        </Router>
    }
}
