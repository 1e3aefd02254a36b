//! Router
//!
//! Maps routes to containers and renders the result onto a `Screen`.
//! Containers receive a `Navigator` at construction instead of calling a
//! global navigation function.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use async_trait::async_trait;

use crate::config::ViewSettings;
use crate::domain::entities::Session;
use crate::domain::ports::BillStore;
use crate::views::{
    render_loading_page, render_login_page, Layout, NavIcon, BILLS_PATH, NEW_BILL_ACTION,
};

use super::bills_container::BillsContainer;
use super::dashboard_container::DashboardContainer;
use super::new_bill_container::NewBillContainer;
use super::screen::Screen;

/// Pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

/// Route names and their paths
pub const ROUTES_PATH: [(&str, Route); 4] = [
    ("Login", Route::Login),
    ("Bills", Route::Bills),
    ("NewBill", Route::NewBill),
    ("Dashboard", Route::Dashboard),
];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => BILLS_PATH,
            Route::NewBill => NEW_BILL_ACTION,
            Route::Dashboard => "/admin/dashboard",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Bills => "Bills",
            Route::NewBill => "NewBill",
            Route::Dashboard => "Dashboard",
        }
    }

    /// Look a route up by name, as in `ROUTES_PATH`
    pub fn from_name(name: &str) -> Option<Self> {
        ROUTES_PATH
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, route)| *route)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        ROUTES_PATH
            .iter()
            .map(|(_, route)| *route)
            .find(|route| route.path() == path)
    }

    /// Navigation icon highlighted while this route is shown
    pub fn nav_icon(&self) -> Option<NavIcon> {
        match self {
            Route::Bills => Some(NavIcon::Window),
            Route::NewBill => Some(NavIcon::Mail),
            Route::Login | Route::Dashboard => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Moves the user to another page
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn on_navigate(&self, route: Route);
}

/// Renders routes onto a screen for one session
pub struct PageRouter {
    me: Weak<PageRouter>,
    store: Arc<dyn BillStore>,
    session: Session,
    screen: Arc<Screen>,
    settings: ViewSettings,
}

impl PageRouter {
    pub fn new(
        store: Arc<dyn BillStore>,
        session: Session,
        screen: Arc<Screen>,
        settings: ViewSettings,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            store,
            session,
            screen,
            settings,
        })
    }

    pub fn screen(&self) -> Arc<Screen> {
        self.screen.clone()
    }

    fn navigator(&self) -> Arc<dyn Navigator> {
        match self.me.upgrade() {
            Some(router) => router as Arc<dyn Navigator>,
            None => Arc::new(RedirectNavigator::new()) as Arc<dyn Navigator>,
        }
    }

    async fn render(&self, route: Route) -> String {
        match route {
            Route::Login => render_login_page(),
            Route::Bills => {
                BillsContainer::new(
                    self.store.clone(),
                    self.navigator(),
                    self.screen.clone(),
                    &self.session,
                    self.settings,
                )
                .render()
                .await
            }
            Route::NewBill => NewBillContainer::new(
                self.store.clone(),
                self.navigator(),
                self.screen.clone(),
                &self.session,
            )
            .render(),
            Route::Dashboard => {
                DashboardContainer::new(self.store.clone(), &self.session)
                    .render()
                    .await
            }
        }
    }
}

#[async_trait]
impl Navigator for PageRouter {
    async fn on_navigate(&self, route: Route) {
        let generation = self.screen.begin_navigation();
        let layout = Layout::for_session(&self.session, route.nav_icon());
        self.screen
            .commit(generation, route, render_loading_page(&layout));

        let html = self.render(route).await;

        if self.screen.commit(generation, route, html) {
            tracing::debug!(route = %route, "Navigated");
        } else {
            tracing::debug!(route = %route, generation, "Discarding stale render");
        }
    }
}

/// Records where a handler wanted to go instead of rendering it.
/// HTTP handlers turn the recorded route into a redirect.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    target: Mutex<Option<Route>>,
    calls: AtomicUsize,
}

impl RedirectNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last requested route
    pub fn target(&self) -> Option<Route> {
        *self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// How many navigations were requested
    #[cfg(test)]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Navigator for RedirectNavigator {
    async fn on_navigate(&self, route: Route) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seeded_store, MockBillStore};

    fn router_for(store: Arc<dyn BillStore>, session: Session) -> Arc<PageRouter> {
        PageRouter::new(
            store,
            session,
            Arc::new(Screen::new()),
            ViewSettings::default(),
        )
    }

    #[test]
    fn route_paths_round_trip() {
        for (name, route) in ROUTES_PATH {
            assert_eq!(Route::from_name(name), Some(route));
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/employee/bills/"), Some(Route::Bills));
        assert_eq!(Route::from_path(""), Some(Route::Login));
        assert!(Route::from_path("/nope").is_none());
        assert!(Route::from_name("Nope").is_none());
    }

    #[tokio::test]
    async fn navigate_to_bills_highlights_window_icon() {
        let router = router_for(seeded_store(), Session::employee("a@a"));

        router.on_navigate(Route::Bills).await;

        let screen = router.screen();
        assert_eq!(screen.route(), Some(Route::Bills));
        assert!(screen.contains_text(r#"data-testid="icon-window" class="active-icon""#));
        assert!(screen.contains_text("Mes notes de frais"));
    }

    #[tokio::test]
    async fn navigate_to_new_bill_highlights_mail_icon() {
        let router = router_for(seeded_store(), Session::employee("a@a"));

        router.on_navigate(Route::NewBill).await;

        let screen = router.screen();
        assert_eq!(screen.count_test_id("form-new-bill"), 1);
        assert!(screen.contains_text(r#"data-testid="icon-mail" class="active-icon""#));
    }

    #[tokio::test]
    async fn navigate_to_login_renders_landing() {
        let router = router_for(seeded_store(), Session::employee("a@a"));

        router.on_navigate(Route::Login).await;

        assert!(router.screen().contains_text("Bienvenue sur Billed"));
    }

    #[tokio::test]
    async fn dashboard_failure_shows_error_message() {
        let store = Arc::new(MockBillStore::failing_list(500, "Erreur 500"));
        let router = router_for(store, Session::employee("a@a"));

        router.on_navigate(Route::Dashboard).await;

        let screen = router.screen();
        assert!(screen.contains_text("Erreur 500"));
        assert_eq!(screen.count_test_id("error-message"), 1);
    }

    #[tokio::test]
    async fn slow_render_does_not_overwrite_newer_page() {
        let store = Arc::new(MockBillStore::new().with_list_delay_ms(50));
        let router = router_for(store, Session::employee("a@a"));

        let slow = {
            let router = router.clone();
            tokio::spawn(async move { router.on_navigate(Route::Bills).await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        router.on_navigate(Route::NewBill).await;
        slow.await.unwrap();

        let screen = router.screen();
        assert_eq!(screen.route(), Some(Route::NewBill));
        assert_eq!(screen.count_test_id("form-new-bill"), 1);
        assert_eq!(screen.count_test_id("tbody"), 0);
    }

    #[tokio::test]
    async fn redirect_navigator_records_target() {
        let navigator = RedirectNavigator::new();
        assert!(navigator.target().is_none());
        assert_eq!(navigator.call_count(), 0);

        navigator.on_navigate(Route::NewBill).await;
        navigator.on_navigate(Route::Bills).await;

        assert_eq!(navigator.target(), Some(Route::Bills));
        assert_eq!(navigator.call_count(), 2);
    }
}
