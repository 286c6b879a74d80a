//! Navigation chrome shown around protected content.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::route::chrome_visible;

/// Title bar with the product name and the logout control.
///
/// Visibility follows the chrome rule: an authenticated operator sees the
/// bar everywhere except on the login page. Logout only clears the auth
/// state; the route guard on whichever protected view is mounted turns
/// that into the redirect to `/login`.
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let visible =
        move || chrome_visible(auth.get().is_authenticated(), &location.pathname.get());

    view! {
        <Show when=visible>
            <nav class="main-nav">
                <span class="nav-title">"SSH Honeypot Monitor"</span>
                <button class="logout-button" on:click=move |_| auth.update(|a| a.logout())>
                    "Logout"
                </button>
            </nav>
        </Show>
    }
}
