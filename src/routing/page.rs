//! Page identifiers.
//!
//! # Design Decisions
//! - Closed enum: every screen the client can show is a variant
//! - The camelCase identifier is the wire form (nav item tags, logs)
//! - Access policy lives on the page itself (protected / auth entry)

use std::fmt;
use std::str::FromStr;

/// A logical screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Signup,
    Onboarding,
    Dashboard,
    Invoices,
    InvoiceNew,
    InvoiceDetail,
    Expenses,
    ExpenseNew,
    Products,
    ProductNew,
    Clients,
    ClientNew,
    Reports,
    Settings,
}

impl Page {
    /// Every page, in route table order.
    pub const ALL: [Page; 16] = [
        Page::Home,
        Page::Login,
        Page::Signup,
        Page::Onboarding,
        Page::Dashboard,
        Page::Invoices,
        Page::InvoiceNew,
        Page::InvoiceDetail,
        Page::Expenses,
        Page::ExpenseNew,
        Page::Products,
        Page::ProductNew,
        Page::Clients,
        Page::ClientNew,
        Page::Reports,
        Page::Settings,
    ];

    /// The page identifier used to tag nav items.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Signup => "signup",
            Page::Onboarding => "onboarding",
            Page::Dashboard => "dashboard",
            Page::Invoices => "invoices",
            Page::InvoiceNew => "invoiceNew",
            Page::InvoiceDetail => "invoiceDetail",
            Page::Expenses => "expenses",
            Page::ExpenseNew => "expenseNew",
            Page::Products => "products",
            Page::ProductNew => "productNew",
            Page::Clients => "clients",
            Page::ClientNew => "clientNew",
            Page::Reports => "reports",
            Page::Settings => "settings",
        }
    }

    /// Pages that require an authenticated session.
    ///
    /// Only the section landing pages are gated; the `new` and detail
    /// screens are reachable directly.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Page::Dashboard
                | Page::Invoices
                | Page::Expenses
                | Page::Products
                | Page::Clients
                | Page::Reports
                | Page::Settings
        )
    }

    /// Pages an authenticated user is bounced away from.
    pub fn is_auth_entry(&self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown page identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
