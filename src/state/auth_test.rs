use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_token() {
    let state = AuthState::default();
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_stores_token() {
    let mut state = AuthState::default();
    state.login("abc");
    assert_eq!(state.token(), Some("abc"));
    assert!(state.is_authenticated());
}

#[test]
fn login_replaces_previous_token() {
    let mut state = AuthState::default();
    state.login("abc");
    state.login("def");
    assert_eq!(state.token(), Some("def"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_token() {
    let mut state = AuthState::default();
    state.login("abc");
    state.logout();
    assert_eq!(state, AuthState::default());
}

#[test]
fn logout_twice_leaves_same_state_as_once() {
    let mut once = AuthState::default();
    once.login("abc");
    once.logout();

    let mut twice = AuthState::default();
    twice.login("abc");
    twice.logout();
    twice.logout();

    assert_eq!(once, twice);
}

#[test]
fn logout_while_logged_out_is_a_no_op() {
    let mut state = AuthState::default();
    state.logout();
    assert_eq!(state, AuthState::default());
}
