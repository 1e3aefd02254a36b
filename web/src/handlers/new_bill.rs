//! New bill handlers

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};

use crate::app::{
    FileSelection, Navigator, NewBillForm, Outcome, RedirectNavigator, Route, Screen, UiCommand,
    UiController,
};
use crate::domain::entities::{ExpenseType, Session};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::page_router;

/// GET /employee/bill/new
pub async fn new_bill_page(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Html<String> {
    let (router, screen) = page_router(&state, &session);
    router.on_navigate(Route::NewBill).await;
    Html(screen.body())
}

/// Read the form fields and the chosen file
async fn read_form(
    mut multipart: Multipart,
) -> Result<(NewBillForm, Option<FileSelection>), AppError> {
    let mut form = NewBillForm::default();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            // An empty file input still sends a part with no file name
            if !file_name.is_empty() {
                file = Some(FileSelection {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match name.as_str() {
            "type" => {
                if !value.is_empty() && value.parse::<ExpenseType>().is_err() {
                    return Err(DomainError::Validation(format!(
                        "type de dépense inconnu : {}",
                        value
                    ))
                    .into());
                }
                form.expense_type = value
            }
            "name" => form.name = value,
            "date" => form.date = value,
            "amount" => form.amount = value,
            "vat" => form.vat = value,
            "pct" => form.pct = value,
            "commentary" => form.commentary = value,
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok((form, file))
}

/// POST /employee/bill/new
///
/// Uploads the receipt, then submits the bill and redirects to the list.
/// A refused file re-renders the form with its message (422).
pub async fn submit_new_bill(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (form, file) = read_form(multipart).await?;

    let navigator = Arc::new(RedirectNavigator::new());
    let screen = Arc::new(Screen::new());
    let mut controller = UiController::new(
        state.store.scoped(&session),
        navigator.clone(),
        screen.clone(),
        &session,
        state.config.view_settings(),
    );

    if let Some(file) = file {
        if let Outcome::FileRejected(_) = controller.dispatch(UiCommand::ChangeFile(file)).await? {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(screen.body())).into_response());
        }
    }

    controller.dispatch(UiCommand::SubmitNewBill(form)).await?;

    let target = navigator.target().unwrap_or(Route::Bills);
    Ok(Redirect::to(target.path()).into_response())
}

