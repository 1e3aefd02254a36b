//! In-memory bill store
//!
//! Behaves like the backend: an upload creates a skeleton pending bill and
//! returns its key, which a later update completes. A store scoped to an
//! employee lists only that employee's bills; admins see every bill.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{
    Bill, BillDraft, BillId, BillStatus, ReceiptUpload, Session, UploadedReceipt,
};
use crate::domain::ports::BillStore;
use crate::error::StoreError;

const STORAGE_URL: &str = "https://storage.billed.local/receipts";

#[derive(Clone, Default)]
pub struct InMemoryBillStore {
    bills: Arc<RwLock<Vec<Bill>>>,
    /// Email whose bills `list` returns, `None` for all bills
    owner: Option<String>,
}

impl InMemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Arc::new(RwLock::new(bills)),
            owner: None,
        }
    }

    /// A store holding a few sample bills for local runs
    pub fn demo() -> Self {
        let sample = |id: &str, date: &str, expense_type: &str, name: &str, amount: i64, status: BillStatus| Bill {
            id: BillId::from(id),
            email: "employee@test.tld".to_string(),
            expense_type: expense_type.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            amount,
            vat: "20".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some(format!("{}/{}/receipt.jpg", STORAGE_URL, id)),
            file_name: Some("receipt.jpg".to_string()),
            status,
            comment_admin: None,
        };

        Self::with_bills(vec![
            sample("demo-1", "2004-04-04", "Hôtel et logement", "encore", 400, BillStatus::Pending),
            sample("demo-2", "2003-03-03", "Services en ligne", "test3", 300, BillStatus::Accepted),
            sample("demo-3", "2002-02-02", "Restaurants et bars", "test2", 200, BillStatus::Refused),
            sample("demo-4", "2001-01-01", "Transports", "test1", 100, BillStatus::Pending),
        ])
    }

    fn insert(&self, bill: Bill) {
        self.bills
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(bill);
    }
}

fn draft_to_bill(id: BillId, draft: BillDraft, comment_admin: Option<String>) -> Bill {
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
        comment_admin,
    }
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let bills = self.bills.read().unwrap_or_else(PoisonError::into_inner);
        Ok(bills
            .iter()
            .filter(|b| self.owner.as_deref().map_or(true, |owner| b.email == owner))
            .cloned()
            .collect())
    }

    async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, StoreError> {
        let key = BillId(Uuid::new_v4().to_string());
        let file_url = format!(
            "{}/{}/{}",
            STORAGE_URL,
            key,
            urlencoding::encode(&upload.file_name)
        );

        self.insert(Bill {
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
            status: BillStatus::Pending,
            comment_admin: None,
        });

        tracing::debug!(key = %key, bytes = upload.bytes.len(), "Stored receipt in memory");

        Ok(UploadedReceipt {
            file_url,
            key,
            file_name: Some(upload.file_name),
        })
    }

    async fn create(&self, draft: BillDraft) -> Result<Bill, StoreError> {
        let bill = draft_to_bill(BillId(Uuid::new_v4().to_string()), draft, None);
        self.insert(bill.clone());
        Ok(bill)
    }

    async fn update(&self, id: &BillId, draft: BillDraft) -> Result<Bill, StoreError> {
        let mut bills = self.bills.write().unwrap_or_else(PoisonError::into_inner);
        let slot = bills
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("bill {} not found", id)))?;

        let updated = draft_to_bill(id.clone(), draft, slot.comment_admin.take());
        *slot = updated.clone();
        Ok(updated)
    }

    fn scoped(&self, session: &Session) -> Arc<dyn BillStore> {
        let owner = session.is_employee().then(|| session.email().to_string());
        Arc::new(Self {
            bills: self.bills.clone(),
            owner,
        })
    }
}
