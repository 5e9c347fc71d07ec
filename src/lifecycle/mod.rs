//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     signal → watch flag → stdin loop stops, handle drops, actor drains
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop reading input, drain the actor, save data

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
