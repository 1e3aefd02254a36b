//! Page chrome shared by every view
//!
//! The vertical navigation bar and the HTML escaping helper.

use crate::domain::entities::Session;

use super::bills::BILLS_PATH;
use super::new_bill::NEW_BILL_ACTION;

/// Navigation icons of the vertical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    /// Bills list
    Window,
    /// New bill form
    Mail,
}

/// How to draw the vertical layout around a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Employees get the navigation icons, admins only the logo
    pub employee_nav: bool,
    pub active: Option<NavIcon>,
}

impl Layout {
    /// Logo only, nothing highlighted
    pub fn bare() -> Self {
        Self {
            employee_nav: false,
            active: None,
        }
    }

    pub fn for_session(session: &Session, active: Option<NavIcon>) -> Self {
        Self {
            employee_nav: session.is_employee(),
            active,
        }
    }
}

/// Render the vertical navigation bar
pub fn render_vertical_layout(layout: &Layout) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"vertical-navbar\">\n");
    buf.push_str("  <div class=\"layout-title\"><span>Billed</span></div>\n");

    if layout.employee_nav {
        buf.push_str(&render_icon(
            "layout-icon1",
            BILLS_PATH,
            "icon-window",
            "Mes notes de frais",
            layout.active == Some(NavIcon::Window),
        ));
        buf.push_str(&render_icon(
            "layout-icon2",
            NEW_BILL_ACTION,
            "icon-mail",
            "Nouvelle note de frais",
            layout.active == Some(NavIcon::Mail),
        ));
    }

    buf.push_str("</div>\n");
    buf
}

fn render_icon(id: &str, href: &str, test_id: &str, title: &str, active: bool) -> String {
    let class = if active { " class=\"active-icon\"" } else { "" };
    format!(
        "  <a id=\"{}\" href=\"{}\" data-testid=\"{}\"{} title=\"{}\"></a>\n",
        id, href, test_id, class, title
    )
}

/// Wrap page content with the layout and a content header
pub(crate) fn render_page(layout: &Layout, title: &str, content: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"layout\">\n");
    buf.push_str(&render_vertical_layout(layout));
    buf.push_str("<div class=\"content\">\n");
    buf.push_str("  <div class=\"content-header\">\n");
    buf.push_str(&format!(
        "    <div class=\"content-title\">{}</div>\n",
        escape(title)
    ));
    buf.push_str("  </div>\n");
    buf.push_str(content);
    buf.push_str("</div>\n");
    buf.push_str("</div>\n");

    buf
}

/// Escape text for HTML element content and quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
