//! Authentication redirect policy.
//!
//! # Rules
//! ```text
//! protected page  && !authenticated → /login
//! login | signup  &&  authenticated → /dashboard
//! otherwise                         → allow
//! ```
//!
//! The two rules never fire for the same auth state, so a redirect
//! target can never itself redirect.

use crate::routing::Page;

/// Route unauthenticated users are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Route authenticated users are sent to.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Outcome of the policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

/// Apply the policy to a resolved page.
pub fn evaluate(page: Page, authenticated: bool) -> Decision {
    if page.is_protected() && !authenticated {
        Decision::Redirect(LOGIN_ROUTE)
    } else if page.is_auth_entry() && authenticated {
        Decision::Redirect(DASHBOARD_ROUTE)
    } else {
        Decision::Allow
    }
}
