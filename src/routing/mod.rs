//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location fragment ("/invoices/abc123")
//!     → router.rs (ordered table scan)
//!     → matcher.rs (segment-by-segment comparison)
//!     → Return: MatchResult { page, params }, or the home fallback
//!
//! Route table (at build time):
//!     ROUTES: [(pattern, Page)]
//!     → Compile patterns into segments
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable afterwards
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod page;
pub mod router;

pub use matcher::{RouteParams, RoutePattern, Segment};
pub use page::Page;
pub use router::{MatchResult, Router, ROUTES};
