//! Hash-routed business client core.
//!
//! Invoices, expenses, clients and products behind a hash-fragment router
//! with a single authenticated/unauthenticated guard, plus the Jalali
//! calendar and fa-IR formatting used to display the records.

pub mod calendar;
pub mod config;
pub mod data;
pub mod lifecycle;
pub mod locale;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod shell;
pub mod storage;

pub use config::AppConfig;
pub use navigation::NavigationController;
pub use routing::{MatchResult, Page, Router};
