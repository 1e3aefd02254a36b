//! Views
//!
//! Pure functions from display data to HTML. No I/O, no state.

pub mod bills;
pub mod dashboard;
pub mod layout;
pub mod new_bill;
pub mod pages;

pub use bills::{render_bills_page, render_receipt_modal, BillRow, BILLS_PATH};
pub use dashboard::{render_dashboard_page, DashboardCard, DashboardSection};
pub use layout::{Layout, NavIcon};
pub use new_bill::{render_new_bill_page, NEW_BILL_ACTION};
pub use pages::{render_error_page, render_loading_page, render_login_page};
