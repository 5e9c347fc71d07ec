//! Navigation controller.
//!
//! # Responsibilities
//! - Own the navigation state (current page, auth flag)
//! - Resolve the location fragment through the router
//! - Apply the auth redirect policy
//! - Hand committed pages to the page loader and nav highlighter
//!
//! # Design Decisions
//! - Synchronous: a call returns only once the page is committed or given up
//! - Redirects run in a bounded loop instead of recursing through `navigate`
//! - Persisting the auth flag is best-effort; a failed write is logged and
//!   the in-memory flag still changes

use crate::navigation::guard::{self, Decision};
use crate::navigation::highlight::NavHighlighter;
use crate::navigation::location::{route_from_hash, Location};
use crate::navigation::state::{NavigationState, AUTH_KEY};
use crate::observability::metrics;
use crate::routing::{MatchResult, Page, RouteParams, Router};
use crate::storage::SharedStore;

/// Redirects allowed within one route handling pass.
pub const MAX_REDIRECTS: usize = 1;

/// Renders a committed page.
pub trait PageLoader {
    fn load_page(&mut self, page: Page, params: &RouteParams);
}

impl<F> PageLoader for F
where
    F: FnMut(Page, &RouteParams),
{
    fn load_page(&mut self, page: Page, params: &RouteParams) {
        self(page, params)
    }
}

/// Result of one route handling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page was committed and loaded.
    Loaded {
        page: Page,
        redirected_from: Option<Page>,
    },
    /// The redirect budget ran out. Nothing was committed.
    RedirectLimit { page: Page },
}

impl Outcome {
    pub fn page(&self) -> Page {
        match self {
            Outcome::Loaded { page, .. } | Outcome::RedirectLimit { page } => *page,
        }
    }
}

/// Drives page changes for one client session.
pub struct NavigationController<L, P, H> {
    router: Router,
    state: NavigationState,
    store: SharedStore,
    location: L,
    loader: P,
    highlighter: H,
}

impl<L, P, H> NavigationController<L, P, H>
where
    L: Location,
    P: PageLoader,
    H: NavHighlighter,
{
    /// Create a controller with the application's route table.
    pub fn new(store: SharedStore, location: L, loader: P, highlighter: H) -> Self {
        Self::with_router(Router::default(), store, location, loader, highlighter)
    }

    /// Create a controller over a custom route table.
    pub fn with_router(router: Router, store: SharedStore, location: L, loader: P, highlighter: H) -> Self {
        let state = NavigationState::init(&*store);
        tracing::debug!(authenticated = state.authenticated, "Navigation state initialized");
        Self {
            router,
            state,
            store,
            location,
            loader,
            highlighter,
        }
    }

    /// Route encoded in the current location fragment.
    pub fn current_route(&self) -> String {
        route_from_hash(&self.location.hash())
    }

    pub fn current_page(&self) -> Page {
        self.state.current_page
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access for hosts that change the location themselves
    /// before calling [`handle_route_change`](Self::handle_route_change).
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn loader(&self) -> &P {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut P {
        &mut self.loader
    }

    pub fn highlighter(&self) -> &H {
        &self.highlighter
    }

    /// Update the auth flag and persist it. Does not navigate.
    pub fn set_authenticated(&mut self, value: bool) {
        self.state.authenticated = value;
        let encoded = if value { "true" } else { "false" };
        if let Err(e) = self.store.set(AUTH_KEY, encoded) {
            tracing::error!(error = %e, authenticated = value, "Failed to persist auth flag");
        }
        tracing::info!(authenticated = value, "Authentication changed");
    }

    /// Point the location at `path` and handle it immediately.
    pub fn navigate(&mut self, path: &str) -> Outcome {
        self.location.set_hash(path);
        self.handle_route_change()
    }

    /// Resolve the current location and commit, redirect, or give up.
    pub fn handle_route_change(&mut self) -> Outcome {
        let mut redirects = 0;
        let mut redirected_from = None;

        loop {
            let route = self.current_route();
            let MatchResult { page, params } = self.router.resolve(&route);
            tracing::debug!(route = %route, page = %page, "Route resolved");

            match guard::evaluate(page, self.state.authenticated) {
                Decision::Allow => {
                    self.commit(page, &params);
                    return Outcome::Loaded {
                        page,
                        redirected_from,
                    };
                }
                Decision::Redirect(target) => {
                    if redirects >= MAX_REDIRECTS {
                        tracing::error!(
                            route = %route,
                            page = %page,
                            to = target,
                            "Redirect limit reached, keeping current page"
                        );
                        return Outcome::RedirectLimit { page };
                    }
                    redirects += 1;
                    redirected_from.get_or_insert(page);
                    tracing::info!(
                        page = %page,
                        to = target,
                        authenticated = self.state.authenticated,
                        "Redirecting"
                    );
                    metrics::record_redirect(page, target);
                    self.location.set_hash(target);
                }
            }
        }
    }

    fn commit(&mut self, page: Page, params: &RouteParams) {
        self.state.current_page = page;
        self.loader.load_page(page, params);
        self.highlighter.highlight(self.state.current_page);
        metrics::record_navigation(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::highlight::NavBar;
    use crate::navigation::location::MemoryLocation;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    struct Recorder(Vec<(Page, RouteParams)>);

    impl PageLoader for Recorder {
        fn load_page(&mut self, page: Page, params: &RouteParams) {
            self.0.push((page, params.clone()));
        }
    }

    fn build(store: &MemoryStore) -> NavigationController<MemoryLocation, Recorder, NavBar> {
        NavigationController::new(
            Arc::new(store.clone()),
            MemoryLocation::new(),
            Recorder(Vec::new()),
            NavBar::default(),
        )
    }

    #[test]
    fn test_empty_hash_loads_home() {
        let store = MemoryStore::new();
        let mut nav = build(&store);
        assert_eq!(nav.current_route(), "/");
        let outcome = nav.handle_route_change();
        assert_eq!(outcome, Outcome::Loaded { page: Page::Home, redirected_from: None });
        assert_eq!(nav.loader().0, vec![(Page::Home, RouteParams::new())]);
    }

    #[test]
    fn test_protected_page_redirects_to_login() {
        let store = MemoryStore::new();
        let mut nav = build(&store);

        let outcome = nav.navigate("/dashboard");
        assert_eq!(
            outcome,
            Outcome::Loaded { page: Page::Login, redirected_from: Some(Page::Dashboard) }
        );
        assert_eq!(nav.current_page(), Page::Login);
        assert_eq!(nav.current_route(), "/login");
        assert!(nav.loader().0.iter().all(|(page, _)| *page != Page::Dashboard));
    }

    #[test]
    fn test_login_redirects_when_authenticated() {
        let store = MemoryStore::new();
        let mut nav = build(&store);
        nav.set_authenticated(true);

        nav.navigate("/login");
        assert_eq!(nav.current_page(), Page::Dashboard);
        assert_eq!(nav.location().hash(), "#/dashboard");
        assert_eq!(nav.highlighter().active_pages(), vec![Page::Dashboard, Page::Dashboard]);
    }

    #[test]
    fn test_set_authenticated_persists_without_navigating() {
        let store = MemoryStore::new();
        let mut nav = build(&store);
        nav.set_authenticated(true);

        assert!(nav.loader().0.is_empty());
        assert_eq!(store.get(AUTH_KEY).as_deref(), Some("true"));
        assert!(build(&store).is_authenticated());

        nav.set_authenticated(false);
        assert_eq!(store.get(AUTH_KEY).as_deref(), Some("false"));
        assert!(!build(&store).is_authenticated());
    }

    #[test]
    fn test_redirect_limit_stops_loop() {
        // Broken table: the login route resolves to a protected page.
        let router = Router::new([("/login", Page::Settings), ("/a", Page::Dashboard)]);
        let store = MemoryStore::new();
        let mut nav = NavigationController::with_router(
            router,
            Arc::new(store.clone()),
            MemoryLocation::new(),
            Recorder(Vec::new()),
            NavBar::default(),
        );

        let outcome = nav.navigate("/a");
        assert_eq!(outcome, Outcome::RedirectLimit { page: Page::Settings });
        assert_eq!(nav.current_page(), Page::Home);
        assert!(nav.loader().0.is_empty());
    }

    #[test]
    fn test_closure_loader() {
        let store = MemoryStore::new();
        let mut seen = Vec::new();
        {
            let mut nav = NavigationController::new(
                Arc::new(store.clone()),
                MemoryLocation::new(),
                |page: Page, params: &RouteParams| seen.push((page, params.get("id").map(str::to_string))),
                NavBar::default(),
            );
            nav.navigate("/invoices/42");
        }
        assert_eq!(seen, vec![(Page::InvoiceDetail, Some("42".to_string()))]);
    }
}
