//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::components::route_guard::RouteGuard;
use crate::pages::{
    login::LoginPage, session_detail::SessionDetailPage, sessions::SessionListPage,
};
use crate::state::auth::AuthState;

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
/// Provides the shared authentication context and sets up client-side
/// routing. The navigation chrome sits above the routed content and derives
/// its own visibility from the auth state and current path; protected
/// routes are wrapped in [`RouteGuard`], so an unauthenticated visit to
/// any of them redirects to `/login` without mounting the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single auth context shared by the guard, the chrome, and the login
    // page. Created once per application session.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/honeypot-monitor.css"/>
        <Title text="SSH Honeypot Monitor"/>

        <Router>
            <div class="app-container">
                <Navigation/>
                <main class="content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <RouteGuard><SessionListPage/></RouteGuard> }
                        />
                        <Route
                            path=(StaticSegment("sessions"), ParamSegment("id"))
                            view=|| view! { <RouteGuard><SessionDetailPage/></RouteGuard> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
