//! Bills list view
//!
//! Renders already ordered and formatted rows. Ordering and formatting are
//! the container's job.

use super::layout::{escape, render_page, Layout};
use super::new_bill::NEW_BILL_ACTION;

/// Where the bills list is served
pub const BILLS_PATH: &str = "/employee/bills";

/// Query parameter opening the receipt modal on top of the list
const RECEIPT_PARAM: &str = "receipt";

/// One table row, display-ready
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRow {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    /// Formatted date
    pub date: String,
    pub amount: i64,
    /// Status label
    pub status: String,
    pub file_url: Option<String>,
}

/// Render the bills page
pub fn render_bills_page(layout: &Layout, rows: &[BillRow]) -> String {
    let mut content = String::new();

    content.push_str(&format!(
        "  <a href=\"{}\" data-testid=\"btn-new-bill\" class=\"btn btn-primary\" role=\"button\">Nouvelle note de frais</a>\n",
        NEW_BILL_ACTION
    ));
    content.push_str("  <div id=\"data-table\">\n");
    content.push_str("    <table id=\"example\" class=\"table table-striped\">\n");
    content.push_str("      <thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead>\n");
    content.push_str("      <tbody data-testid=\"tbody\">\n");

    if rows.is_empty() {
        content.push_str(
            "        <tr class=\"empty-state\"><td colspan=\"6\">Aucune note de frais</td></tr>\n",
        );
    } else {
        for row in rows {
            content.push_str(&render_row(row));
        }
    }

    content.push_str("      </tbody>\n");
    content.push_str("    </table>\n");
    content.push_str("  </div>\n");
    content.push_str("  <div class=\"modal fade\" id=\"modaleFile\" tabindex=\"-1\" role=\"dialog\"></div>\n");

    render_page(layout, "Mes notes de frais", &content)
}

fn render_row(row: &BillRow) -> String {
    format!(
        "        <tr data-bill-id=\"{}\">\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{} €</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n",
        escape(&row.id),
        escape(&row.expense_type),
        escape(&row.name),
        escape(&row.date),
        row.amount,
        escape(&row.status),
        render_actions(row.file_url.as_deref()),
    )
}

fn render_actions(file_url: Option<&str>) -> String {
    match file_url {
        Some(url) => format!(
            "<div class=\"icon-actions\"><a id=\"eye\" href=\"{}\" data-testid=\"icon-eye\" data-bill-url=\"{}\" title=\"Justificatif\"></a></div>",
            escape(&receipt_href(url)),
            escape(url)
        ),
        None => "<div class=\"icon-actions\"></div>".to_string(),
    }
}

/// Link that reopens the list with the receipt modal shown
fn receipt_href(bill_url: &str) -> String {
    format!(
        "{}?{}={}",
        BILLS_PATH,
        RECEIPT_PARAM,
        urlencoding::encode(bill_url)
    )
}

/// Render the receipt preview modal
pub fn render_receipt_modal(bill_url: &str, image_width: u32) -> String {
    format!(
        "<div class=\"modal fade show\" id=\"modaleFile\" data-testid=\"modal\" role=\"dialog\">\n  <div class=\"modal-dialog modal-dialog-centered modal-lg\">\n    <div class=\"modal-content\">\n      <div class=\"modal-header\"><h5 class=\"modal-title\">Justificatif</h5></div>\n      <div class=\"modal-body\"><div style=\"text-align: center;\" class=\"bill-proof-container\"><img width=\"{}\" src=\"{}\" alt=\"Bill\" /></div></div>\n    </div>\n  </div>\n</div>\n",
        image_width,
        escape(bill_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, date: &str, file_url: Option<&str>) -> BillRow {
        BillRow {
            id: id.to_string(),
            expense_type: "Transports".to_string(),
            name: format!("bill {}", id),
            date: date.to_string(),
            amount: 100,
            status: "En attente".to_string(),
            file_url: file_url.map(str::to_string),
        }
    }

    #[test]
    fn render_empty_list_has_no_eye_icon() {
        let result = render_bills_page(&Layout::bare(), &[]);

        assert!(result.contains("Mes notes de frais"));
        assert!(result.contains("data-testid=\"tbody\""));
        assert!(result.contains("Aucune note de frais"));
        assert!(!result.contains("icon-eye"));
    }

    #[test]
    fn render_rows_in_given_order() {
        let rows = vec![
            row("a", "2004-04-04", Some("https://a.png")),
            row("b", "2003-03-03", Some("https://b.png")),
        ];

        let result = render_bills_page(&Layout::bare(), &rows);

        let a = result.find("data-bill-id=\"a\"").unwrap();
        let b = result.find("data-bill-id=\"b\"").unwrap();
        assert!(a < b);
        assert_eq!(result.matches("data-testid=\"icon-eye\"").count(), 2);
        assert!(result.contains("100 €"));
    }

    #[test]
    fn eye_icon_only_for_bills_with_receipt() {
        let rows = vec![row("a", "2004-04-04", Some("https://a.png")), row("b", "2003-03-03", None)];

        let result = render_bills_page(&Layout::bare(), &rows);

        assert_eq!(result.matches("data-testid=\"icon-eye\"").count(), 1);
        assert!(result.contains("data-bill-url=\"https://a.png\""));
    }

    #[test]
    fn row_content_is_escaped() {
        let mut r = row("a", "2004-04-04", None);
        r.name = "<script>".to_string();

        let result = render_bills_page(&Layout::bare(), &[r]);

        assert!(result.contains("&lt;script&gt;"));
        assert!(!result.contains("<script>"));
    }

    #[test]
    fn new_bill_button_links_to_form() {
        let result = render_bills_page(&Layout::bare(), &[]);
        assert!(result.contains(r#"<a href="/employee/bill/new" data-testid="btn-new-bill""#));
    }

    #[test]
    fn eye_icon_links_to_receipt_modal() {
        let rows = vec![row("a", "2004-04-04", Some("https://test.storage.tld/a b.jpg?x=1&y=2"))];

        let result = render_bills_page(&Layout::bare(), &rows);

        assert!(result.contains(
            r#"href="/employee/bills?receipt=https%3A%2F%2Ftest.storage.tld%2Fa%20b.jpg%3Fx%3D1%26y%3D2""#
        ));
    }

    #[test]
    fn receipt_modal_contains_image() {
        let result = render_receipt_modal("https://test.storage.tld/bill.jpg", 400);

        assert!(result.contains("data-testid=\"modal\""));
        assert!(result.contains("src=\"https://test.storage.tld/bill.jpg\""));
        assert!(result.contains("width=\"400\""));
    }
}
