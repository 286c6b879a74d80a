//! Capability gate wrapping views that require authentication.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::state::route::LOGIN_PATH;

/// Renders its children only while a credential token is present.
///
/// Without a token the children are never built; a [`Redirect`] to the
/// login page is rendered instead, so no protected content flashes before
/// the redirect lands. The decision tracks the auth signal rather than
/// being taken once at mount: a logout while the protected view is mounted
/// swaps it for the redirect on the next evaluation. The attempted path is
/// not remembered across the redirect.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <Redirect path=LOGIN_PATH/> }
        >
            {children()}
        </Show>
    }
}
