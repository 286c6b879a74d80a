//! Session detail page — capture metadata, commands, and the transcript.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::SessionDetail;
use crate::state::auth::AuthState;

/// Session detail page — reads the session id from the route parameter and
/// fetches the full capture document.
#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    // Refetches when the route param or the token changes.
    let session = LocalResource::new(move || {
        let token = auth.get().token().map(str::to_owned);
        let id = params.read().get("id").unwrap_or_default();
        crate::net::api::fetch_session(token, id)
    });

    view! {
        <div class="session-page">
            <a class="session-page__back" href="/">
                "\u{2190} All sessions"
            </a>
            <Suspense fallback=move || view! { <p>"Loading session..."</p> }>
                {move || {
                    session
                        .get()
                        .map(|detail| match detail {
                            None => {
                                view! { <p class="session-page__error">"Session not found."</p> }
                                    .into_any()
                            }
                            Some(detail) => view! { <SessionView session=detail/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Rendered body of one capture document.
#[component]
fn SessionView(session: SessionDetail) -> impl IntoView {
    view! {
        <article class="session">
            <header class="session__meta">
                <h1>{format!("Session {}", session.id)}</h1>
                <dl>
                    <dt>"Source IP"</dt>
                    <dd>{session.src_ip}</dd>
                    <dt>"Username"</dt>
                    <dd>{session.username}</dd>
                    <dt>"Password"</dt>
                    <dd>{session.password}</dd>
                    <dt>"Started"</dt>
                    <dd>{session.start_time}</dd>
                </dl>
            </header>

            <section class="session__commands">
                <h2>"Commands"</h2>
                {if session.commands.is_empty() {
                    view! { <p>"No commands extracted."</p> }.into_any()
                } else {
                    view! {
                        <ol>
                            {session
                                .commands
                                .into_iter()
                                .map(|c| view! { <li><code>{c}</code></li> })
                                .collect::<Vec<_>>()}
                        </ol>
                    }
                        .into_any()
                }}
            </section>

            <section class="session__transcript">
                <h2>"Transcript"</h2>
                <div class="session__events">
                    {session
                        .events
                        .into_iter()
                        .map(|e| {
                            view! {
                                <div class="session__event">
                                    <span class="session__event-time">
                                        {format!("{:.1}s", e.time_offset)}
                                    </span>
                                    <pre class="session__event-data">{e.data}</pre>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </article>
    }
}
