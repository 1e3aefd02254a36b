//! Domain entities
//!
//! Pure domain models for bills and the signed-in user.

pub mod bill;
pub mod user;

pub use bill::{
    parse_iso_date, Bill, BillDraft, BillId, BillStatus, ExpenseType, ReceiptUpload,
    UploadedReceipt,
};
pub use user::Session;
