//! Screen
//!
//! The rendered document: the current page body, the route it belongs to,
//! and an optional modal shown on top. Navigations take a generation number
//! so a slow render cannot overwrite a newer page.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::router::Route;

#[derive(Debug, Default)]
struct ScreenState {
    body: String,
    route: Option<Route>,
    modal: Option<String>,
    generation: u64,
}

/// The document a router renders into
#[derive(Debug, Default)]
pub struct Screen {
    state: RwLock<ScreenState>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, ScreenState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ScreenState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a navigation; the returned generation supersedes every older one
    pub fn begin_navigation(&self) -> u64 {
        let mut state = self.write();
        state.generation += 1;
        state.generation
    }

    /// Install a page rendered for `generation`.
    ///
    /// Returns `false` and leaves the screen untouched if a newer navigation
    /// has started since.
    pub fn commit(&self, generation: u64, route: Route, html: String) -> bool {
        let mut state = self.write();
        if state.generation != generation {
            return false;
        }
        state.body = html;
        state.route = Some(route);
        state.modal = None;
        true
    }

    /// Replace the current page in place, as an event handler would
    pub fn replace(&self, route: Route, html: String) {
        let mut state = self.write();
        state.body = html;
        state.route = Some(route);
    }

    pub fn show_modal(&self, html: String) {
        self.write().modal = Some(html);
    }

    pub fn body(&self) -> String {
        self.read().body.clone()
    }

    pub fn route(&self) -> Option<Route> {
        self.read().route
    }

    pub fn modal(&self) -> Option<String> {
        self.read().modal.clone()
    }

    /// Full document: body followed by the open modal, if any
    pub fn html(&self) -> String {
        let state = self.read();
        match &state.modal {
            Some(modal) => format!("{}{}", state.body, modal),
            None => state.body.clone(),
        }
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.html().contains(text)
    }

    /// Number of elements carrying `data-testid="<id>"`
    pub fn count_test_id(&self, test_id: &str) -> usize {
        self.html()
            .matches(&format!("data-testid=\"{}\"", test_id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_installs_page() {
        let screen = Screen::new();
        let generation = screen.begin_navigation();

        assert!(screen.commit(generation, Route::Bills, "<p>bills</p>".to_string()));

        assert_eq!(screen.body(), "<p>bills</p>");
        assert_eq!(screen.route(), Some(Route::Bills));
    }

    #[test]
    fn stale_commit_is_discarded() {
        let screen = Screen::new();
        let first = screen.begin_navigation();
        let second = screen.begin_navigation();

        assert!(screen.commit(second, Route::NewBill, "new".to_string()));
        assert!(!screen.commit(first, Route::Bills, "old".to_string()));

        assert_eq!(screen.body(), "new");
        assert_eq!(screen.route(), Some(Route::NewBill));
    }

    #[test]
    fn commit_closes_modal() {
        let screen = Screen::new();
        screen.show_modal("<div data-testid=\"modal\"></div>".to_string());
        assert_eq!(screen.count_test_id("modal"), 1);

        let generation = screen.begin_navigation();
        screen.commit(generation, Route::Bills, String::new());

        assert!(screen.modal().is_none());
        assert_eq!(screen.count_test_id("modal"), 0);
    }

    #[test]
    fn html_appends_modal() {
        let screen = Screen::new();
        screen.replace(Route::Bills, "body".to_string());
        screen.show_modal("modal".to_string());

        assert_eq!(screen.html(), "bodymodal");
        assert!(screen.contains_text("modal"));
    }
}
