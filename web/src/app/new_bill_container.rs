//! New bill container
//!
//! Validates and uploads the receipt when a file is chosen, then turns the
//! submitted form into a bill record and returns the user to the list.
//! Required fields are left to the form's `required` attributes.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::domain::entities::{
    Bill, BillDraft, BillStatus, ReceiptUpload, Session, UploadedReceipt,
};
use crate::domain::ports::BillStore;
use crate::error::StoreError;
use crate::views::{render_new_bill_page, Layout, NavIcon};

use super::router::{Navigator, Route};
use super::screen::Screen;

/// Default VAT percentage when the form leaves it empty
pub const DEFAULT_PCT: i64 = 20;

/// Message shown under the file input for a refused file
pub const REJECTED_FILE_MESSAGE: &str =
    "Format de fichier non supporté : choisissez une image jpg, jpeg ou png.";

const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

static RECEIPT_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpe?g|png)$").expect("valid receipt file pattern"));

/// Raw values of the named form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    /// Build the record to store. Numeric fields that do not parse fall back
    /// to 0 (amount) and 20 (pct).
    pub fn into_draft(self, email: &str) -> BillDraft {
        BillDraft {
            email: email.to_string(),
            expense_type: self.expense_type,
            name: self.name,
            date: self.date,
            amount: parse_int(&self.amount).unwrap_or(0),
            vat: self.vat,
            pct: parse_int(&self.pct).unwrap_or(DEFAULT_PCT),
            commentary: self.commentary,
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        }
    }
}

/// Leading integer of a numeric input, decimals truncated
fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
}

/// A file chosen in the file input
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Outcome of choosing a file
#[derive(Debug)]
pub enum FileChange {
    Uploaded(UploadedReceipt),
    Rejected(String),
    UploadFailed(StoreError),
}

/// Whether a file may be used as a receipt: `.jpg`, `.jpeg` or `.png`,
/// and an image MIME type when the browser sent one.
pub fn is_accepted_receipt(file_name: &str, content_type: Option<&str>) -> bool {
    let extension_ok = RECEIPT_FILE_NAME.is_match(file_name);

    let mime_ok = match content_type.map(str::trim).filter(|m| !m.is_empty()) {
        Some(mime) => ACCEPTED_MIME_TYPES.contains(&mime.to_lowercase().as_str()),
        None => true,
    };

    extension_ok && mime_ok
}

#[derive(Debug, Clone)]
struct AttachedReceipt {
    receipt: UploadedReceipt,
    file_name: String,
}

/// Container for the new bill page
pub struct NewBillContainer {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    screen: Arc<Screen>,
    session: Session,
    layout: Layout,
    attached: Option<AttachedReceipt>,
    file_error: Option<String>,
}

impl NewBillContainer {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        screen: Arc<Screen>,
        session: &Session,
    ) -> Self {
        Self {
            store,
            navigator,
            screen,
            session: session.clone(),
            layout: Layout::for_session(session, Some(NavIcon::Mail)),
            attached: None,
            file_error: None,
        }
    }

    pub fn render(&self) -> String {
        render_new_bill_page(&self.layout, self.file_error.as_deref())
    }

    /// The receipt uploaded for this form, if any
    pub fn uploaded_receipt(&self) -> Option<&UploadedReceipt> {
        self.attached.as_ref().map(|a| &a.receipt)
    }

    /// Validate the chosen file and upload it.
    ///
    /// A refused file clears any previous upload and redraws the form with an
    /// inline message; nothing is sent to the store.
    pub async fn handle_change_file(&mut self, file: FileSelection) -> FileChange {
        if !is_accepted_receipt(&file.file_name, file.content_type.as_deref()) {
            tracing::info!(file_name = %file.file_name, "Rejected receipt file type");
            self.attached = None;
            self.file_error = Some(REJECTED_FILE_MESSAGE.to_string());
            self.screen.replace(Route::NewBill, self.render());
            return FileChange::Rejected(REJECTED_FILE_MESSAGE.to_string());
        }

        if self.file_error.take().is_some() {
            self.screen.replace(Route::NewBill, self.render());
        }

        let upload = ReceiptUpload {
            file_name: file.file_name.clone(),
            content_type: file.content_type,
            bytes: file.bytes,
            email: self.session.email().to_string(),
        };

        match self.store.upload_receipt(upload).await {
            Ok(receipt) => {
                tracing::info!(key = %receipt.key, file_name = %file.file_name, "Receipt uploaded");
                self.attached = Some(AttachedReceipt {
                    receipt: receipt.clone(),
                    file_name: file.file_name,
                });
                FileChange::Uploaded(receipt)
            }
            Err(e) => {
                tracing::error!(error = %e, "Receipt upload failed");
                FileChange::UploadFailed(e)
            }
        }
    }

    /// Store the submitted bill and go back to the list.
    ///
    /// Completes the record created by the upload when there is one,
    /// otherwise creates a new record. On failure the user stays on the form.
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<Bill, StoreError> {
        let draft = form.into_draft(self.session.email());

        let result = match &self.attached {
            Some(attached) => {
                let draft = draft.with_receipt(&attached.receipt, &attached.file_name);
                self.store.update(&attached.receipt.key, draft).await
            }
            None => self.store.create(draft).await,
        };

        match result {
            Ok(bill) => {
                tracing::info!(bill_id = %bill.id, "Bill submitted");
                self.navigator.on_navigate(Route::Bills).await;
                Ok(bill)
            }
            Err(e) => {
                tracing::error!(error = %e, "Bill submission failed");
                Err(e)
            }
        }
    }
}
