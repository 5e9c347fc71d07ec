//! Shared helpers for integration tests.

use std::sync::Arc;

use daftar::navigation::{MemoryLocation, NavBar, NavigationController, PageLoader};
use daftar::routing::{Page, RouteParams};
use daftar::storage::{MemoryStore, SharedStore};

/// Page loader that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub loads: Vec<(Page, RouteParams)>,
}

#[allow(dead_code)]
impl RecordingLoader {
    pub fn pages(&self) -> Vec<Page> {
        self.loads.iter().map(|(page, _)| *page).collect()
    }

    pub fn last(&self) -> Option<&(Page, RouteParams)> {
        self.loads.last()
    }
}

impl PageLoader for RecordingLoader {
    fn load_page(&mut self, page: Page, params: &RouteParams) {
        self.loads.push((page, params.clone()));
    }
}

pub type TestController = NavigationController<MemoryLocation, RecordingLoader, NavBar>;

/// Controller over `store`, starting at an empty hash.
#[allow(dead_code)]
pub fn controller(store: SharedStore) -> TestController {
    NavigationController::new(store, MemoryLocation::new(), RecordingLoader::default(), NavBar::default())
}

/// Controller over `store`, starting at the hash of `url`.
#[allow(dead_code)]
pub fn controller_at(store: SharedStore, url: &str) -> TestController {
    NavigationController::new(
        store,
        MemoryLocation::from_url(url),
        RecordingLoader::default(),
        NavBar::default(),
    )
}

/// A fresh in-memory store, returned both concretely and shared.
#[allow(dead_code)]
pub fn memory_store() -> (MemoryStore, SharedStore) {
    let store = MemoryStore::new();
    let shared: SharedStore = Arc::new(store.clone());
    (store, shared)
}
