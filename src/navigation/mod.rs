//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(path) / external hash change
//!     → location.rs (fragment after '#', default "/")
//!     → routing::Router (page + params)
//!     → guard.rs (auth policy: allow or redirect)
//!         redirect → set location, resolve again (bounded)
//!     → controller.rs commits current page
//!     → PageLoader::load_page(page, params)
//!     → highlight.rs marks nav items for the page
//! ```
//!
//! # Design Decisions
//! - One controller owns the state; no globals
//! - Collaborators are traits so hosts plug in their own rendering

pub mod controller;
pub mod guard;
pub mod highlight;
pub mod location;
pub mod state;

pub use controller::{NavigationController, Outcome, PageLoader, MAX_REDIRECTS};
pub use guard::{Decision, DASHBOARD_ROUTE, LOGIN_ROUTE};
pub use highlight::{NavBar, NavHighlighter, NavItem};
pub use location::{Location, MemoryLocation};
pub use state::{NavigationState, AUTH_KEY};
