//! Navigation state.
//!
//! # States
//! - Unauthenticated × any page
//! - Authenticated × any page
//!
//! # State Transitions
//! ```text
//! auth axis: set_authenticated(bool), persisted on every change
//! page axis: handle_route_change commits the resolved page
//! ```
//!
//! # Design Decisions
//! - Initial auth flag comes from the store; anything but "true" is false
//! - No teardown: the state lives as long as its controller

use crate::routing::Page;
use crate::storage::KeyValueStore;

/// Store key holding the auth flag.
pub const AUTH_KEY: &str = "isAuthenticated";

/// Current page and session flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: Page,
    pub authenticated: bool,
}

impl NavigationState {
    /// Build the initial state from the persisted auth flag.
    pub fn init(store: &dyn KeyValueStore) -> Self {
        let authenticated = store.get(AUTH_KEY).as_deref() == Some("true");
        Self {
            current_page: Page::Home,
            authenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_init_reads_flag() {
        let store = MemoryStore::new();
        assert!(!NavigationState::init(&store).authenticated);

        store.set(AUTH_KEY, "true").unwrap();
        let state = NavigationState::init(&store);
        assert!(state.authenticated);
        assert_eq!(state.current_page, Page::Home);

        for value in ["false", "TRUE", "1", ""] {
            store.set(AUTH_KEY, value).unwrap();
            assert!(!NavigationState::init(&store).authenticated, "{value:?}");
        }
    }
}
