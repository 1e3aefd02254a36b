//! Admin dashboard container
//!
//! Read-only: groups every bill by status. Validating or refusing a bill is
//! not offered here.

use std::sync::Arc;

use crate::domain::entities::{Bill, BillStatus, Session};
use crate::domain::ports::BillStore;
use crate::error::StoreError;
use crate::views::{
    render_dashboard_page, render_error_page, DashboardCard, DashboardSection, Layout,
};

use super::format::{format_date, sort_by_date_desc};

/// Section title for a status column
pub fn section_title(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Validé",
        BillStatus::Refused => "Refusé",
    }
}

pub struct DashboardContainer {
    store: Arc<dyn BillStore>,
    layout: Layout,
}

impl DashboardContainer {
    pub fn new(store: Arc<dyn BillStore>, session: &Session) -> Self {
        Self {
            store,
            layout: Layout::for_session(session, None),
        }
    }

    /// One section per status, in `BillStatus::ALL` order, most recent first
    pub async fn get_sections(&self) -> Result<Vec<DashboardSection>, StoreError> {
        let mut bills = self.store.list().await?;
        sort_by_date_desc(&mut bills);

        Ok(BillStatus::ALL
            .into_iter()
            .map(|status| DashboardSection {
                title: section_title(status).to_string(),
                cards: bills
                    .iter()
                    .filter(|b| b.status == status)
                    .map(to_card)
                    .collect(),
            })
            .collect())
    }

    pub async fn render(&self) -> String {
        match self.get_sections().await {
            Ok(sections) => render_dashboard_page(&self.layout, &sections),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch bills for dashboard");
                render_error_page(&self.layout, &e.to_string())
            }
        }
    }
}

fn to_card(bill: &Bill) -> DashboardCard {
    DashboardCard {
        id: bill.id.to_string(),
        email: bill.email.clone(),
        name: bill.name.clone(),
        date: format_date(&bill.date).unwrap_or_else(|| bill.date.clone()),
        amount: bill.amount,
        expense_type: bill.expense_type.clone(),
    }
}
