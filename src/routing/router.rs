//! Route lookup.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Resolve a path to a page and its parameters
//! - Fall back to the home page when nothing matches
//!
//! # Design Decisions
//! - Immutable after construction
//! - Declaration order is the only precedence rule (first match wins)
//! - Unknown paths degrade silently to `Page::Home`

use crate::routing::matcher::{RouteParams, RoutePattern};
use crate::routing::page::Page;

/// The application's route table, in precedence order.
pub const ROUTES: [(&str, Page); 16] = [
    ("/", Page::Home),
    ("/login", Page::Login),
    ("/signup", Page::Signup),
    ("/onboarding", Page::Onboarding),
    ("/dashboard", Page::Dashboard),
    ("/invoices", Page::Invoices),
    ("/invoices/new", Page::InvoiceNew),
    ("/invoices/:id", Page::InvoiceDetail),
    ("/expenses", Page::Expenses),
    ("/expenses/new", Page::ExpenseNew),
    ("/products", Page::Products),
    ("/products/new", Page::ProductNew),
    ("/clients", Page::Clients),
    ("/clients/new", Page::ClientNew),
    ("/reports", Page::Reports),
    ("/settings", Page::Settings),
];

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub page: Page,
    pub params: RouteParams,
}

impl MatchResult {
    fn fallback() -> Self {
        Self {
            page: Page::Home,
            params: RouteParams::new(),
        }
    }
}

/// A single table entry.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: Page,
}

/// Ordered route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build a router from `(pattern, page)` pairs, keeping their order.
    pub fn new<'a>(table: impl IntoIterator<Item = (&'a str, Page)>) -> Self {
        let routes = table
            .into_iter()
            .map(|(pattern, page)| Route {
                pattern: RoutePattern::new(pattern),
                page,
            })
            .collect();
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve `path` to a page.
    pub fn resolve(&self, path: &str) -> MatchResult {
        for route in &self.routes {
            if route.pattern.is_exact(path) {
                return MatchResult {
                    page: route.page,
                    params: RouteParams::new(),
                };
            }
            if let Some(params) = route.pattern.match_path(path) {
                return MatchResult {
                    page: route.page,
                    params,
                };
            }
        }

        tracing::debug!(path, "No route matched, falling back to home");
        MatchResult::fallback()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_matches_itself() {
        let router = Router::default();
        for (pattern, page) in ROUTES {
            let result = router.resolve(pattern);
            assert_eq!(result.page, page, "pattern {pattern}");
            assert!(result.params.is_empty(), "pattern {pattern}");
        }
    }

    #[test]
    fn test_dynamic_segment() {
        let result = Router::default().resolve("/invoices/abc123");
        assert_eq!(result.page, Page::InvoiceDetail);
        assert_eq!(result.params, [("id", "abc123")].into_iter().collect::<RouteParams>());
    }

    #[test]
    fn test_static_route_beats_param_route() {
        let result = Router::default().resolve("/invoices/new");
        assert_eq!(result.page, Page::InvoiceNew);
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_declaration_order_decides() {
        // Param route declared first shadows the literal one.
        let router = Router::new([
            ("/items/:id", Page::InvoiceDetail),
            ("/items/new", Page::InvoiceNew),
        ]);
        let result = router.resolve("/items/new");
        assert_eq!(result.page, Page::InvoiceDetail);
        assert_eq!(result.params.get("id"), Some("new"));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        let router = Router::default();
        for path in ["/does/not/exist", "", "dashboard", "/dashboard/", "/invoices?x=1", "/expenses/42"] {
            let result = router.resolve(path);
            assert_eq!(result, MatchResult::fallback(), "path {path:?}");
        }
    }

    #[test]
    fn test_empty_router_falls_back() {
        let router = Router::new(Vec::<(&str, Page)>::new());
        assert_eq!(router.resolve("/").page, Page::Home);
    }

    #[test]
    fn test_routes_keep_declaration_order() {
        let router = Router::default();
        let table: Vec<(&str, Page)> = router.routes().iter().map(|r| (r.pattern.as_str(), r.page)).collect();
        assert_eq!(table, ROUTES.to_vec());
    }
}
