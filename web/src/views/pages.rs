//! Standalone pages: error, loading, login landing

use super::layout::{escape, render_page, Layout};

/// Render the error page shown instead of a failed page
pub fn render_error_page(layout: &Layout, message: &str) -> String {
    let content = format!(
        "  <div data-testid=\"error-message\">{}</div>\n",
        escape(message)
    );
    render_page(layout, "Erreur", &content)
}

/// Render the placeholder shown while a page is fetched
pub fn render_loading_page(layout: &Layout) -> String {
    render_page(
        layout,
        "Chargement",
        "  <div id=\"loading\" data-testid=\"loading\">Loading...</div>\n",
    )
}

/// Render the login landing page
pub fn render_login_page() -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"login-page\">\n");
    buf.push_str("  <h1>Billed</h1>\n");
    buf.push_str("  <p>Bienvenue sur Billed, l'application de notes de frais.</p>\n");
    buf.push_str("  <div data-testid=\"form-employee\">Employé : connectez-vous pour accéder à vos notes de frais.</div>\n");
    buf.push_str("  <div data-testid=\"form-admin\">Administration : connectez-vous pour valider les notes de frais.</div>\n");
    buf.push_str("</div>\n");

    buf
}
