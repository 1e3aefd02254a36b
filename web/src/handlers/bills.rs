//! Bills list handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use serde::Deserialize;

use crate::app::{EyeIcon, Outcome, Route, UiCommand, UiController};
use crate::domain::entities::Session;
use crate::error::AppError;
use crate::AppState;

use super::page_router;

#[derive(Debug, Default, Deserialize)]
pub struct BillsQuery {
    /// Receipt URL of a clicked eye icon
    pub receipt: Option<String>,
}

/// GET /employee/bills?receipt=
///
/// The list, or the error page when the store failed. Both are 200: the
/// error is part of the page. With `receipt`, the receipt modal is shown on
/// top of the list.
pub async fn bills_page(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<BillsQuery>,
) -> Result<Html<String>, AppError> {
    let (router, screen) = page_router(&state, &session);
    let mut controller = UiController::new(
        state.store.scoped(&session),
        router,
        screen.clone(),
        &session,
        state.config.view_settings(),
    );

    controller.dispatch(UiCommand::Navigate(Route::Bills)).await?;

    if let Some(receipt) = query.receipt {
        let icon = EyeIcon {
            bill_url: Some(receipt),
        };
        controller.dispatch(UiCommand::ClickIconEye(icon)).await?;
    }

    Ok(Html(screen.html()))
}

#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    pub url: Option<String>,
}

/// GET /employee/bills/receipt?url=
///
/// Modal fragment for an eye icon; 204 when the icon carried no URL.
pub async fn receipt_modal(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Response, AppError> {
    let (router, screen) = page_router(&state, &session);
    let mut controller = UiController::new(
        state.store.scoped(&session),
        router,
        screen.clone(),
        &session,
        state.config.view_settings(),
    );

    let icon = EyeIcon {
        bill_url: query.url,
    };

    match controller.dispatch(UiCommand::ClickIconEye(icon)).await? {
        Outcome::ModalShown => Ok(Html(screen.modal().unwrap_or_default()).into_response()),
        _ => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
