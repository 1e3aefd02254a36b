//! New bill form view

use crate::domain::entities::ExpenseType;

use super::layout::{escape, render_page, Layout};

/// Path the form posts to
pub const NEW_BILL_ACTION: &str = "/employee/bill/new";

/// Render the bill submission form
///
/// `file_error` is shown under the file input after a rejected selection.
pub fn render_new_bill_page(layout: &Layout, file_error: Option<&str>) -> String {
    let mut content = String::new();

    content.push_str("  <div class=\"form-newbill-container content-inner\">\n");
    content.push_str(&format!(
        "    <form data-testid=\"form-new-bill\" method=\"post\" action=\"{}\" enctype=\"multipart/form-data\">\n",
        NEW_BILL_ACTION
    ));

    content.push_str("      <label for=\"expense-type\">Type de dépense</label>\n");
    content.push_str(
        "      <select required name=\"type\" id=\"expense-type\" data-testid=\"expense-type\">\n",
    );
    for expense_type in ExpenseType::ALL {
        content.push_str(&format!(
            "        <option>{}</option>\n",
            escape(expense_type.label())
        ));
    }
    content.push_str("      </select>\n");

    content.push_str(&text_input(
        "expense-name",
        "name",
        "text",
        "Nom de la dépense",
        "Vol Paris Londres",
        false,
    ));
    content.push_str(&text_input("datepicker", "date", "date", "Date", "", true));
    content.push_str(&text_input(
        "amount",
        "amount",
        "number",
        "Montant TTC",
        "348",
        true,
    ));
    content.push_str(&text_input("vat", "vat", "number", "TVA", "70", false));
    content.push_str(&text_input("pct", "pct", "number", "%", "20", true));

    content.push_str("      <label for=\"commentary\">Commentaire</label>\n");
    content.push_str(
        "      <textarea name=\"commentary\" id=\"commentary\" data-testid=\"commentary\" rows=\"3\"></textarea>\n",
    );

    content.push_str("      <label for=\"file\">Justificatif</label>\n");
    content.push_str(
        "      <input required type=\"file\" name=\"file\" id=\"file\" data-testid=\"file\" accept=\".jpg,.jpeg,.png,image/jpeg,image/png\" />\n",
    );
    if let Some(message) = file_error {
        content.push_str(&format!(
            "      <p class=\"file-error\" data-testid=\"file-error\">{}</p>\n",
            escape(message)
        ));
    }

    content.push_str(
        "      <button type=\"submit\" id=\"btn-send-bill\" class=\"btn btn-primary\">Envoyer</button>\n",
    );
    content.push_str("    </form>\n");
    content.push_str("  </div>\n");

    render_page(layout, "Envoyer une note de frais", &content)
}

fn text_input(
    test_id: &str,
    name: &str,
    input_type: &str,
    label: &str,
    placeholder: &str,
    required: bool,
) -> String {
    let required = if required { "required " } else { "" };
    let placeholder = if placeholder.is_empty() {
        String::new()
    } else {
        format!(" placeholder=\"{}\"", placeholder)
    };
    format!(
        "      <label for=\"{test_id}\">{label}</label>\n      <input {required}type=\"{input_type}\" name=\"{name}\" id=\"{test_id}\" data-testid=\"{test_id}\"{placeholder} />\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_has_every_field_hook() {
        let result = render_new_bill_page(&Layout::bare(), None);

        assert!(result.contains("Envoyer une note de frais"));
        for test_id in [
            "form-new-bill",
            "expense-type",
            "expense-name",
            "datepicker",
            "amount",
            "vat",
            "pct",
            "commentary",
            "file",
        ] {
            assert!(
                result.contains(&format!("data-testid=\"{}\"", test_id)),
                "missing {}",
                test_id
            );
        }
    }

    #[test]
    fn form_lists_expense_types() {
        let result = render_new_bill_page(&Layout::bare(), None);

        assert!(result.contains("<option>Transports</option>"));
        assert!(result.contains("<option>Fournitures de bureau</option>"));
        assert_eq!(result.matches("<option>").count(), ExpenseType::ALL.len());
    }

    #[test]
    fn required_fields_are_marked() {
        let result = render_new_bill_page(&Layout::bare(), None);

        assert!(result.contains("required type=\"date\""));
        assert!(result.contains("required type=\"number\" name=\"amount\""));
        assert!(result.contains("required type=\"file\""));
        assert!(result.contains("<input type=\"text\" name=\"name\""));
    }

    #[test]
    fn file_error_shown_when_present() {
        let without = render_new_bill_page(&Layout::bare(), None);
        let with = render_new_bill_page(&Layout::bare(), Some("Format non supporté"));

        assert!(!without.contains("file-error"));
        assert!(with.contains("data-testid=\"file-error\">Format non supporté</p>"));
    }

    #[test]
    fn form_posts_multipart() {
        let result = render_new_bill_page(&Layout::bare(), None);

        assert!(result.contains("enctype=\"multipart/form-data\""));
        assert!(result.contains(&format!("action=\"{}\"", NEW_BILL_ACTION)));
    }
}
