//! HTTP handlers
//!
//! Each request gets its own `Screen` and `PageRouter` over the shared store.

pub mod bills;
pub mod dashboard;
pub mod new_bill;
pub mod root;

use std::sync::Arc;

use crate::app::{PageRouter, Screen};
use crate::domain::entities::Session;
use crate::AppState;

pub use bills::{bills_page, receipt_modal};
pub use dashboard::dashboard_page;
pub use new_bill::{new_bill_page, submit_new_bill};
pub use root::root;

/// Router and screen for one request, acting with the session's credentials
pub(crate) fn page_router(state: &AppState, session: &Session) -> (Arc<PageRouter>, Arc<Screen>) {
    let screen = Arc::new(Screen::new());
    let router = PageRouter::new(
        state.store.scoped(session),
        session.clone(),
        screen.clone(),
        state.config.view_settings(),
    );
    (router, screen)
}
