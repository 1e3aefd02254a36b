//! Bill domain entity
//!
//! An employee's expense-reimbursement record, as stored by the remote
//! bills backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(pub String);

impl From<&str> for BillId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BillId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of a bill
///
/// Always `Pending` on creation. Only the admin workflow moves it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub const ALL: [BillStatus; 3] = [
        BillStatus::Pending,
        BillStatus::Accepted,
        BillStatus::Refused,
    ];

    /// Label shown to employees
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Accepted => write!(f, "accepted"),
            BillStatus::Refused => write!(f, "refused"),
        }
    }
}

impl std::str::FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            _ => Err(format!("Unknown bill status: {}", s)),
        }
    }
}

/// Expense categories offered by the new-bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseType {
    Transports,
    Restaurants,
    Lodging,
    OnlineServices,
    Electronics,
    Equipment,
    OfficeSupplies,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::Restaurants,
        ExpenseType::Lodging,
        ExpenseType::OnlineServices,
        ExpenseType::Electronics,
        ExpenseType::Equipment,
        ExpenseType::OfficeSupplies,
    ];

    /// The value stored in a bill's `type` field
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::Restaurants => "Restaurants et bars",
            ExpenseType::Lodging => "Hôtel et logement",
            ExpenseType::OnlineServices => "Services en ligne",
            ExpenseType::Electronics => "IT et électronique",
            ExpenseType::Equipment => "Equipement et matériel",
            ExpenseType::OfficeSupplies => "Fournitures de bureau",
        }
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ExpenseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| format!("Unknown expense type: {}", s))
    }
}

/// A bill as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Parse the stored date, `None` if the backend sent something else
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// URL of the attached receipt, if one was uploaded
    pub fn receipt_url(&self) -> Option<&str> {
        self.file_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Parse a `YYYY-MM-DD` date, tolerating a trailing time component
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// The record sent to the store when creating or completing a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: i64,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

impl BillDraft {
    /// Attach an uploaded receipt. URL and name always travel together.
    pub fn with_receipt(mut self, receipt: &UploadedReceipt, file_name: &str) -> Self {
        self.file_url = Some(receipt.file_url.clone());
        self.file_name = Some(
            receipt
                .file_name
                .clone()
                .unwrap_or_else(|| file_name.to_string()),
        );
        self
    }
}

/// A receipt file to upload
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Submitter, sent alongside the file
    pub email: String,
}

/// Result of a receipt upload
///
/// The backend creates a skeleton bill for the file; `key` is its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedReceipt {
    pub file_url: String,
    pub key: BillId,
    #[serde(default)]
    pub file_name: Option<String>,
}
