//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters and gauges via the `metrics` facade)
//!
//! Consumers:
//!     → stderr (fmt layer, filtered by RUST_LOG or config)
//!     → whatever metrics recorder the host installs (none by default)
//! ```
//!
//! # Design Decisions
//! - Subscriber installed once, by the binaries, never by the library
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
