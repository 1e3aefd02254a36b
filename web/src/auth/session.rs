//! Cookie session middleware

use axum::{
    body::Body,
    http::{header::COOKIE, HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::Session;
use crate::error::AppError;

/// Cookie holding the URL-encoded JSON user
pub const USER_COOKIE: &str = "user";
/// Cookie holding the backend token
pub const JWT_COOKIE: &str = "jwt";

/// Find a cookie value by name across every `Cookie` header
fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Read the session from the request cookies, `None` if absent or invalid
pub fn read_session(headers: &HeaderMap) -> Option<Session> {
    let raw = cookie(headers, USER_COOKIE)?;
    let json = match urlencoding::decode(raw) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, "User cookie is not valid UTF-8");
            return None;
        }
    };

    let jwt = cookie(headers, JWT_COOKIE)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    match Session::from_user_json(&json, jwt) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::debug!(error = %e, "User cookie is not a valid user");
            None
        }
    }
}

/// Session middleware
///
/// Injects the `Session` into request extensions, or answers 401.
pub async fn session_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = read_session(request.headers()).ok_or(AppError::Unauthorized)?;

    tracing::debug!(email = %session.email(), user_type = %session.user.user_type, "Session");
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
