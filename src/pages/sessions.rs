//! Session list page — the dashboard of captured attacker sessions.

use leptos::prelude::*;

use crate::components::session_card::SessionCard;
use crate::state::auth::AuthState;

/// Session list page — fetches the captured sessions and renders one card
/// per session, in the order the backend serves them.
#[component]
pub fn SessionListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Session list resource — refetches if the token changes.
    let sessions = LocalResource::new(move || {
        let token = auth.get().token().map(str::to_owned);
        crate::net::api::fetch_sessions(token)
    });

    view! {
        <div class="sessions-page">
            <header class="sessions-page__header">
                <h1>"Captured Sessions"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading sessions..."</p> }>
                {move || {
                    sessions
                        .get()
                        .map(|list| match list {
                            None => {
                                view! {
                                    <p class="sessions-page__error">"Could not load sessions."</p>
                                }
                                    .into_any()
                            }
                            Some(list) if list.is_empty() => {
                                view! {
                                    <p class="sessions-page__empty">"No sessions captured yet."</p>
                                }
                                    .into_any()
                            }
                            Some(list) => {
                                view! {
                                    <div class="sessions-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|s| view! { <SessionCard session=s/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
