use super::*;

fn detail(id: &str) -> AppRoute {
    AppRoute::SessionDetail { id: id.to_owned() }
}

// =============================================================
// Path parsing
// =============================================================

#[test]
fn root_is_the_session_list() {
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Sessions));
}

#[test]
fn login_path_parses() {
    assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
}

#[test]
fn session_detail_carries_the_id() {
    assert_eq!(AppRoute::from_path("/sessions/42"), Some(detail("42")));
}

#[test]
fn trailing_slashes_are_tolerated() {
    assert_eq!(AppRoute::from_path("/login/"), Some(AppRoute::Login));
    assert_eq!(AppRoute::from_path("/sessions/42/"), Some(detail("42")));
}

#[test]
fn unknown_paths_do_not_parse() {
    assert_eq!(AppRoute::from_path("/nope"), None);
    assert_eq!(AppRoute::from_path("/sessions"), None);
    assert_eq!(AppRoute::from_path("/sessions/42/extra"), None);
}

// =============================================================
// Guard coverage
// =============================================================

#[test]
fn only_login_is_unprotected() {
    assert!(!AppRoute::Login.is_protected());
    assert!(AppRoute::Sessions.is_protected());
    assert!(detail("42").is_protected());
}

// =============================================================
// Chrome visibility truth table
// =============================================================

#[test]
fn chrome_hidden_without_token_on_any_path() {
    assert!(!chrome_visible(false, "/"));
    assert!(!chrome_visible(false, "/login"));
    assert!(!chrome_visible(false, "/sessions/42"));
}

#[test]
fn chrome_hidden_on_login_page_even_when_authenticated() {
    assert!(!chrome_visible(true, "/login"));
}

#[test]
fn chrome_shown_when_authenticated_off_the_login_page() {
    assert!(chrome_visible(true, "/"));
    assert!(chrome_visible(true, "/sessions/42"));
}

// =============================================================
// Navigation scenarios
// =============================================================

#[test]
fn unauthenticated_visit_to_the_list_redirects_with_chrome_hidden() {
    let route = AppRoute::from_path("/").unwrap();
    assert!(route.is_protected());
    assert!(!chrome_visible(false, "/"));
}

#[test]
fn authenticated_visit_to_the_list_renders_with_chrome() {
    let route = AppRoute::from_path("/").unwrap();
    assert_eq!(route, AppRoute::Sessions);
    assert!(chrome_visible(true, "/"));
}

#[test]
fn authenticated_visit_to_login_keeps_chrome_hidden() {
    assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
    assert!(!chrome_visible(true, "/login"));
}

#[test]
fn authenticated_visit_to_detail_renders_with_chrome() {
    let route = AppRoute::from_path("/sessions/42").unwrap();
    assert_eq!(route, detail("42"));
    assert!(route.is_protected());
    assert!(chrome_visible(true, "/sessions/42"));
}

#[test]
fn logout_on_a_mounted_detail_page_flips_both_decisions() {
    let path = "/sessions/42";
    assert!(chrome_visible(true, path));

    // After logout the very same evaluation yields redirect + hidden chrome.
    assert!(AppRoute::from_path(path).unwrap().is_protected());
    assert!(!chrome_visible(false, path));
}
