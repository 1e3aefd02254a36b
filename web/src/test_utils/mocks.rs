//! Mock implementations of port traits
//!
//! In-memory store that can be told to fail or stall, and records the
//! calls made to it so tests can verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{
    Bill, BillDraft, BillId, ReceiptUpload, Session, UploadedReceipt,
};
use crate::domain::ports::BillStore;
use crate::error::StoreError;

#[derive(Default)]
struct Calls {
    uploads: Vec<String>,
    creates: usize,
    updates: Vec<BillId>,
}

/// Configurable `BillStore` for tests
#[derive(Clone, Default)]
pub struct MockBillStore {
    bills: Arc<RwLock<Vec<Bill>>>,
    calls: Arc<RwLock<Calls>>,
    list_error: Option<(u16, String)>,
    write_error: Option<(u16, String)>,
    list_delay: Option<Duration>,
}

impl MockBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a bill
    pub fn with_bill(self, bill: Bill) -> Self {
        self.bills.write().unwrap().push(bill);
        self
    }

    /// A store whose `list` answers with the given status
    pub fn failing_list(status: u16, message: &str) -> Self {
        Self {
            list_error: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    /// Make uploads, creates and updates fail with the given status
    pub fn failing_writes(mut self, status: u16, message: &str) -> Self {
        self.write_error = Some((status, message.to_string()));
        self
    }

    /// Delay every `list` call
    pub fn with_list_delay_ms(mut self, ms: u64) -> Self {
        self.list_delay = Some(Duration::from_millis(ms));
        self
    }

    pub fn upload_count(&self) -> usize {
        self.calls.read().unwrap().uploads.len()
    }

    /// Emails sent alongside each upload
    pub fn uploaded_emails(&self) -> Vec<String> {
        self.calls.read().unwrap().uploads.clone()
    }

    pub fn create_count(&self) -> usize {
        self.calls.read().unwrap().creates
    }

    pub fn update_count(&self) -> usize {
        self.calls.read().unwrap().updates.len()
    }

    pub fn updated_ids(&self) -> Vec<BillId> {
        self.calls.read().unwrap().updates.clone()
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        match &self.write_error {
            Some((status, message)) => Err(StoreError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn upsert(&self, bill: Bill) {
        let mut bills = self.bills.write().unwrap();
        match bills.iter_mut().find(|b| b.id == bill.id) {
            Some(slot) => *slot = bill,
            None => bills.push(bill),
        }
    }
}

fn bill_from_draft(id: BillId, draft: BillDraft) -> Bill {
    Bill {
        id,
        email: draft.email,
        expense_type: draft.expense_type,
        name: draft.name,
        date: draft.date,
        amount: draft.amount,
        vat: draft.vat,
        pct: draft.pct,
        commentary: draft.commentary,
        file_url: draft.file_url,
        file_name: draft.file_name,
        status: draft.status,
        comment_admin: None,
    }
}

#[async_trait]
impl BillStore for MockBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some((status, message)) = &self.list_error {
            return Err(StoreError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(self.bills.read().unwrap().clone())
    }

    async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, StoreError> {
        self.check_writes()?;
        let n = {
            let mut calls = self.calls.write().unwrap();
            calls.uploads.push(upload.email.clone());
            calls.uploads.len()
        };

        let key = BillId(format!("upload-{}", n));
        let file_url = format!("https://localhost:3456/images/{}", upload.file_name);
        self.upsert(Bill {
            id: key.clone(),
            email: upload.email,
            expense_type: String::new(),
            name: String::new(),
            date: String::new(),
            amount: 0,
            vat: String::new(),
            pct: 0,
            commentary: String::new(),
            file_url: Some(file_url.clone()),
            file_name: Some(upload.file_name.clone()),
            status: Default::default(),
            comment_admin: None,
        });

        Ok(UploadedReceipt {
            file_url,
            key,
            file_name: Some(upload.file_name),
        })
    }

    async fn create(&self, draft: BillDraft) -> Result<Bill, StoreError> {
        self.check_writes()?;
        let n = {
            let mut calls = self.calls.write().unwrap();
            calls.creates += 1;
            calls.creates
        };

        let bill = bill_from_draft(BillId(format!("created-{}", n)), draft);
        self.upsert(bill.clone());
        Ok(bill)
    }

    async fn update(&self, id: &BillId, draft: BillDraft) -> Result<Bill, StoreError> {
        self.check_writes()?;
        self.calls.write().unwrap().updates.push(id.clone());

        let bill = bill_from_draft(id.clone(), draft);
        self.upsert(bill.clone());
        Ok(bill)
    }

    fn scoped(&self, _session: &Session) -> Arc<dyn BillStore> {
        Arc::new(self.clone())
    }
}
