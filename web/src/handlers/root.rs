//! Landing handler

use axum::{
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::app::Route;
use crate::auth::read_session;
use crate::views::render_login_page;

/// GET /
///
/// Signed-in users go to their home page; everyone else sees the landing.
pub async fn root(headers: HeaderMap) -> Response {
    match read_session(&headers) {
        Some(session) if session.is_employee() => Redirect::to(Route::Bills.path()).into_response(),
        Some(_) => Redirect::to(Route::Dashboard.path()).into_response(),
        None => Html(render_login_page()).into_response(),
    }
}
