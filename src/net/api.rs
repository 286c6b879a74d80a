//! REST API helpers for communicating with the capture backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so login and
//! session fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{SessionDetail, SessionSummary};

/// Exchange operator credentials for a token via `POST /api/login`.
///
/// # Errors
///
/// Returns a user-displayable message if the request fails or the
/// credentials are rejected.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct LoginResponse {
            token: String,
        }

        let resp = gloo_net::http::Request::post("/api/login")
            .json(&LoginRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("Invalid username or password".to_owned());
        }
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the captured session list from `/api/sessions`.
/// Returns `None` on failure or on the server.
pub async fn fetch_sessions(token: Option<String>) -> Option<Vec<SessionSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized_get("/api/sessions", token.as_deref())
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("session list fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<SessionSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch one session's capture document from `/api/sessions/{id}`.
/// Returns `None` if the session is missing, on failure, or on the server.
pub async fn fetch_session(token: Option<String>, id: String) -> Option<SessionDetail> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/sessions/{id}");
        let resp = authorized_get(&url, token.as_deref()).send().await.ok()?;
        if !resp.ok() {
            log::warn!("session {id} fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<SessionDetail>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        None
    }
}

/// GET request builder with the bearer token attached when present.
#[cfg(feature = "hydrate")]
fn authorized_get(url: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    let req = gloo_net::http::Request::get(url);
    match token {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}
