//! Bill store port
//!
//! The remote persistence API for bills and receipt uploads.
//! Implemented over HTTP for production and in memory for tests and local runs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{Bill, BillDraft, BillId, ReceiptUpload, Session, UploadedReceipt};
use crate::error::StoreError;

/// Store for bill records
#[async_trait]
pub trait BillStore: Send + Sync {
    /// List every bill visible to the caller
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a receipt file. The backend answers with the file URL and the
    /// key of the bill record that now owns it.
    async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, StoreError>;

    /// Create a bill record without a prior upload
    async fn create(&self, draft: BillDraft) -> Result<Bill, StoreError>;

    /// Complete or overwrite the bill with the given id
    async fn update(&self, id: &BillId, draft: BillDraft) -> Result<Bill, StoreError>;

    /// A handle acting with the session's credentials
    fn scoped(&self, session: &Session) -> Arc<dyn BillStore>;
}
