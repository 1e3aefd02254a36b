//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use crate::adapters::InMemoryBillStore;
use crate::app::{FileSelection, NewBillForm};
use crate::domain::entities::{Bill, BillId, BillStatus};
use crate::domain::ports::BillStore;

/// Create a pending test bill with a receipt
pub fn test_bill(id: &str, date: &str) -> Bill {
    Bill {
        id: BillId::from(id),
        email: "a@a".to_string(),
        expense_type: "Hôtel et logement".to_string(),
        name: "encore".to_string(),
        date: date.to_string(),
        amount: 400,
        vat: "80".to_string(),
        pct: 20,
        commentary: "séminaire billed".to_string(),
        file_url: Some(format!("https://test.storage.tld/v0/b/{}.jpg", id)),
        file_name: Some(format!("{}.jpg", id)),
        status: BillStatus::Pending,
        comment_admin: None,
    }
}

fn with_status(mut bill: Bill, status: BillStatus) -> Bill {
    bill.status = status;
    bill
}

/// Four bills, one per year 2001 to 2004, out of order
pub fn seeded_bills() -> Vec<Bill> {
    vec![
        with_status(
            test_bill("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01"),
            BillStatus::Pending,
        ),
        with_status(
            test_bill("47qAXb6fIm2zOKkLzMro", "2004-04-04"),
            BillStatus::Pending,
        ),
        with_status(
            test_bill("UIUZtnPQvnbFnB0ozvJh", "2003-03-03"),
            BillStatus::Refused,
        ),
        with_status(
            test_bill("qcCK3SzECmaZAGRrHjaC", "2002-02-02"),
            BillStatus::Accepted,
        ),
    ]
}

/// In-memory store holding `seeded_bills()`
pub fn seeded_store() -> Arc<dyn BillStore> {
    Arc::new(InMemoryBillStore::with_bills(seeded_bills()))
}

/// A filled-in new bill form
pub fn complete_form() -> NewBillForm {
    NewBillForm {
        expense_type: "Transports".to_string(),
        name: "Vol Paris Londres".to_string(),
        date: "2022-02-22".to_string(),
        amount: "348".to_string(),
        vat: "70".to_string(),
        pct: "20".to_string(),
        commentary: "séminaire".to_string(),
    }
}

/// A small png file selection
pub fn png_file(name: &str) -> FileSelection {
    FileSelection {
        file_name: name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a],
    }
}
