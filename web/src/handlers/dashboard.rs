//! Admin dashboard handler

use axum::{extract::State, response::Html, Extension};

use crate::app::{Navigator, Route};
use crate::domain::entities::Session;
use crate::AppState;

use super::page_router;

/// GET /admin/dashboard
pub async fn dashboard_page(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Html<String> {
    let (router, screen) = page_router(&state, &session);
    router.on_navigate(Route::Dashboard).await;
    Html(screen.body())
}
