//! Console host.
//!
//! # Data Flow
//! ```text
//! stdin line
//!     → command.rs (parse)
//!     → runtime.rs (mpsc → navigation actor)
//!     → NavigationController
//!     → loader.rs (ConsolePageLoader renders lines)
//!     → Reply { lines } → stdout
//! ```
//!
//! # Design Decisions
//! - The shell stands in for a browser window: `MemoryLocation` is the
//!   address bar, `NavBar` the two nav menus
//! - `build_controller` wires store, data and config the same way for the
//!   binary and the integration tests

pub mod command;
pub mod loader;
pub mod runtime;

use crate::config::AppConfig;
use crate::data::{DataError, DataStore};
use crate::navigation::{Location, MemoryLocation, NavBar, NavigationController};
use crate::storage::SharedStore;

pub use command::{Command, CommandError};
pub use loader::ConsolePageLoader;
pub use runtime::{apply, spawn, Reply, ShellController, ShellError, ShellHandle};

/// Build a controller whose location starts at the configured route.
///
/// The route is not handled yet; the caller runs the first pass.
pub fn build_controller(config: &AppConfig, store: SharedStore) -> Result<ShellController, DataError> {
    let data = DataStore::load(store.clone(), config.data.seed_sample_data)?;
    let loader = ConsolePageLoader::new(data, config.locale.clone());

    let mut location = MemoryLocation::new();
    location.set_hash(&config.shell.start_route);

    Ok(NavigationController::new(store, location, loader, NavBar::default()))
}
