//! UI commands
//!
//! User interactions as values. A `UiController` owns the containers for one
//! session and dispatches each command to the right handler.

use std::sync::Arc;

use crate::config::ViewSettings;
use crate::domain::entities::{Bill, Session, UploadedReceipt};
use crate::domain::ports::BillStore;
use crate::error::AppError;

use super::bills_container::{BillsContainer, EyeIcon};
use super::new_bill_container::{FileChange, FileSelection, NewBillContainer, NewBillForm};
use super::router::{Navigator, Route};
use super::screen::Screen;

/// Something the user did
#[derive(Debug, Clone)]
pub enum UiCommand {
    Navigate(Route),
    ClickNewBill,
    ClickIconEye(EyeIcon),
    ChangeFile(FileSelection),
    SubmitNewBill(NewBillForm),
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::Navigate(_) => "navigate",
            UiCommand::ClickNewBill => "click_new_bill",
            UiCommand::ClickIconEye(_) => "click_icon_eye",
            UiCommand::ChangeFile(_) => "change_file",
            UiCommand::SubmitNewBill(_) => "submit_new_bill",
        }
    }
}

/// What a command did
#[derive(Debug)]
pub enum Outcome {
    Navigated(Route),
    ModalShown,
    Ignored,
    FileAccepted(UploadedReceipt),
    FileRejected(String),
    Submitted(Bill),
}

pub struct UiController {
    navigator: Arc<dyn Navigator>,
    bills: BillsContainer,
    new_bill: NewBillContainer,
}

impl UiController {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        screen: Arc<Screen>,
        session: &Session,
        settings: ViewSettings,
    ) -> Self {
        Self {
            bills: BillsContainer::new(
                store.clone(),
                navigator.clone(),
                screen.clone(),
                session,
                settings,
            ),
            new_bill: NewBillContainer::new(store, navigator.clone(), screen, session),
            navigator,
        }
    }

    pub async fn dispatch(&mut self, command: UiCommand) -> Result<Outcome, AppError> {
        tracing::debug!(command = command.name(), "Dispatching UI command");

        match command {
            UiCommand::Navigate(route) => {
                self.navigator.on_navigate(route).await;
                Ok(Outcome::Navigated(route))
            }
            UiCommand::ClickNewBill => {
                self.bills.handle_click_new_bill().await;
                Ok(Outcome::Navigated(Route::NewBill))
            }
            UiCommand::ClickIconEye(icon) => {
                if self.bills.handle_click_icon_eye(&icon) {
                    Ok(Outcome::ModalShown)
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            UiCommand::ChangeFile(file) => match self.new_bill.handle_change_file(file).await {
                FileChange::Uploaded(receipt) => Ok(Outcome::FileAccepted(receipt)),
                FileChange::Rejected(message) => Ok(Outcome::FileRejected(message)),
                FileChange::UploadFailed(e) => Err(e.into()),
            },
            UiCommand::SubmitNewBill(form) => {
                let bill = self.new_bill.handle_submit(form).await?;
                Ok(Outcome::Submitted(bill))
            }
        }
    }
}
