//! Admin dashboard view
//!
//! Read-only overview of bills grouped by status.

use super::layout::{escape, render_page, Layout};

/// A bill card on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub id: String,
    pub email: String,
    pub name: String,
    pub date: String,
    pub amount: i64,
    pub expense_type: String,
}

/// One status column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSection {
    pub title: String,
    pub cards: Vec<DashboardCard>,
}

/// Render the dashboard
pub fn render_dashboard_page(layout: &Layout, sections: &[DashboardSection]) -> String {
    let mut content = String::new();

    content.push_str("  <div class=\"dashboard-content\">\n");
    for (i, section) in sections.iter().enumerate() {
        content.push_str(&format!(
            "    <div class=\"status-bills-header\" id=\"status-bills-header{}\">\n      <h3>{} ({})</h3>\n    </div>\n",
            i + 1,
            escape(&section.title),
            section.cards.len()
        ));
        content.push_str(&format!(
            "    <div class=\"status-bills-container\" id=\"status-bills-container{}\">\n",
            i + 1
        ));
        for card in &section.cards {
            content.push_str(&render_card(card));
        }
        content.push_str("    </div>\n");
    }
    content.push_str("  </div>\n");

    render_page(layout, "Validations", &content)
}

fn render_card(card: &DashboardCard) -> String {
    format!(
        "      <div class=\"bill-card\" id=\"open-bill{}\" data-testid=\"open-bill{}\">\n        <div class=\"bill-card-name-container\"><div class=\"bill-card-name\">{}</div><span class=\"bill-card-grey\">...</span></div>\n        <div class=\"name-price-container\"><span>{}</span><span>{} €</span></div>\n        <div class=\"date-type-container\"><span>{}</span><span>{}</span></div>\n      </div>\n",
        escape(&card.id),
        escape(&card.id),
        escape(&card.email),
        escape(&card.name),
        card.amount,
        escape(&card.date),
        escape(&card.expense_type),
    )
}
