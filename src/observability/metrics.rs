//! Metrics collection.
//!
//! # Metrics
//! - `daftar_navigations_total` (counter): committed page loads by page
//! - `daftar_redirects_total` (counter): policy redirects by target route
//! - `daftar_store_writes_total` (counter): file store rewrites
//! - `daftar_store_keys` (gauge): keys in the file store after a write
//!
//! # Design Decisions
//! - Labels are static page identifiers, so cardinality is bounded

use crate::routing::Page;

/// Record a committed navigation.
pub fn record_navigation(page: Page) {
    ::metrics::counter!("daftar_navigations_total", "page" => page.as_str()).increment(1);
}

/// Record a policy redirect.
pub fn record_redirect(from: Page, to: &'static str) {
    ::metrics::counter!("daftar_redirects_total", "from" => from.as_str(), "to" => to).increment(1);
}

/// Record a store file rewrite.
pub fn record_store_write(keys: usize) {
    ::metrics::counter!("daftar_store_writes_total").increment(1);
    ::metrics::gauge!("daftar_store_keys").set(keys as f64);
}
