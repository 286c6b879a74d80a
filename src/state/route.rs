#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Path of the login page, the redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/login";

/// The known routes of the application.
///
/// Routing itself is handled by `leptos_router`; this enum exists so that
/// decisions keyed on "which page are we on" (chrome visibility, guard
/// coverage) are exhaustive matches instead of string comparisons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/login` — the only unguarded page.
    Login,
    /// `/` — the captured-session list.
    Sessions,
    /// `/sessions/:id` — detail view for one captured session.
    SessionDetail { id: String },
}

impl AppRoute {
    /// Parse a raw `location.pathname` into a known route.
    ///
    /// Trailing slashes are tolerated; anything unknown yields `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Self::Sessions),
            LOGIN_PATH => Some(Self::Login),
            _ => {
                let id = path.strip_prefix("/sessions/")?;
                if id.is_empty() || id.contains('/') {
                    None
                } else {
                    Some(Self::SessionDetail { id: id.to_owned() })
                }
            }
        }
    }

    /// Whether reaching this route requires a credential token.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// Whether the navigation chrome is shown for the given token presence and
/// current path.
///
/// Unknown paths count like any other non-login path, so the not-found
/// fallback still carries the chrome for a logged-in operator.
pub fn chrome_visible(authenticated: bool, path: &str) -> bool {
    match (authenticated, AppRoute::from_path(path)) {
        (false, _) | (true, Some(AppRoute::Login)) => false,
        (true, _) => true,
    }
}
