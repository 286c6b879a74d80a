#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state holding the operator's credential token.
///
/// Provided to the component tree as an `RwSignal` context from `App`, so
/// every consumer (route guard, chrome, login page) re-evaluates when the
/// token changes. The token itself is opaque: credential verification
/// happens against the backend before [`AuthState::login`] is ever called.
/// The field is private so the token can only change through `login` and
/// `logout`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    /// Store a credential token. Any stored token counts as logged in.
    pub fn login(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clear the stored token. Calling this while logged out is a no-op.
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
