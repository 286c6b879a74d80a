//! Login page with the operator credential form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Login page — verifies credentials against the backend and, on success,
/// stores the returned token in [`AuthState`] and navigates to the session
/// list. A rejected login leaves the auth state untouched and shows an
/// inline message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(user.trim(), &pass).await {
                    Ok(token) => {
                        auth.update(|a| a.login(token));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message)),
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    });

    view! {
        <div class="login-page">
            <h1>"SSH Honeypot Monitor"</h1>
            <p>"Sign in to review captured sessions"</p>
            <form
                class="login-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="login-form__label">
                    "Username"
                    <input
                        class="login-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__label">
                    "Password"
                    <input
                        class="login-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
