//! Bills container
//!
//! Fetches the employee's bills, orders and formats them for the list view,
//! and handles the list page interactions.

use std::sync::Arc;

use crate::config::ViewSettings;
use crate::domain::entities::{Bill, Session};
use crate::domain::ports::BillStore;
use crate::error::StoreError;
use crate::views::{
    render_bills_page, render_error_page, render_receipt_modal, BillRow, Layout, NavIcon,
};

use super::format::{format_date, sort_by_date_desc};
use super::router::{Navigator, Route};
use super::screen::Screen;

/// The eye icon a user clicked, with its `data-bill-url` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EyeIcon {
    pub bill_url: Option<String>,
}

impl EyeIcon {
    pub fn new(bill_url: impl Into<String>) -> Self {
        Self {
            bill_url: Some(bill_url.into()),
        }
    }
}

/// Container for the bills list page
pub struct BillsContainer {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    screen: Arc<Screen>,
    layout: Layout,
    settings: ViewSettings,
}

impl BillsContainer {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        screen: Arc<Screen>,
        session: &Session,
        settings: ViewSettings,
    ) -> Self {
        Self {
            store,
            navigator,
            screen,
            layout: Layout::for_session(session, Some(NavIcon::Window)),
            settings,
        }
    }

    /// Fetch bills, most recent first, formatted for display
    pub async fn get_bills(&self) -> Result<Vec<BillRow>, StoreError> {
        let mut bills = self.store.list().await?;
        sort_by_date_desc(&mut bills);
        Ok(bills.iter().map(to_row).collect())
    }

    /// Render the page: the list, or the error page if the fetch failed
    pub async fn render(&self) -> String {
        match self.get_bills().await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Rendering bills");
                render_bills_page(&self.layout, &rows)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch bills");
                render_error_page(&self.layout, &e.to_string())
            }
        }
    }

    pub async fn handle_click_new_bill(&self) {
        self.navigator.on_navigate(Route::NewBill).await;
    }

    /// Open the receipt preview for the clicked icon.
    ///
    /// Returns whether a modal was shown; an icon without a URL does nothing.
    pub fn handle_click_icon_eye(&self, icon: &EyeIcon) -> bool {
        let Some(bill_url) = icon.bill_url.as_deref().filter(|url| !url.is_empty()) else {
            tracing::debug!("Eye icon without bill url, ignoring");
            return false;
        };

        self.screen.show_modal(render_receipt_modal(
            bill_url,
            self.settings.receipt_preview_width,
        ));
        true
    }
}

fn to_row(bill: &Bill) -> BillRow {
    let date = format_date(&bill.date).unwrap_or_else(|| {
        tracing::warn!(bill_id = %bill.id, date = %bill.date, "Unparseable bill date");
        bill.date.clone()
    });

    BillRow {
        id: bill.id.to_string(),
        expense_type: bill.expense_type.clone(),
        name: bill.name.clone(),
        date,
        amount: bill.amount,
        status: bill.status.label().to_string(),
        file_url: bill.receipt_url().map(str::to_string),
    }
}
