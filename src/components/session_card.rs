//! Card component for one captured session in the list.

use leptos::prelude::*;

use crate::net::types::SessionSummary;

/// A clickable card linking to the session's detail page.
#[component]
pub fn SessionCard(session: SessionSummary) -> impl IntoView {
    let href = format!("/sessions/{}", session.id);

    view! {
        <a class="session-card" href=href>
            <span class="session-card__ip">{session.src_ip}</span>
            <span class="session-card__user">{session.username}</span>
            <span class="session-card__time">{session.start_time}</span>
            <span class="session-card__commands">
                {format!("{} commands", session.command_count)}
            </span>
        </a>
    }
}
