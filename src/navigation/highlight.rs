//! Active nav item tracking.
//!
//! Two independent surfaces (desktop sidebar, mobile bottom bar) each hold
//! items tagged with a page. After every committed navigation exactly the
//! items tagged with the current page are active.

use crate::routing::Page;

/// Marks nav items for the current page.
pub trait NavHighlighter {
    fn highlight(&mut self, current: Page);
}

/// A single nav entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

impl NavItem {
    pub fn new(page: Page, label: &'static str) -> Self {
        Self {
            page,
            label,
            active: false,
        }
    }
}

/// Desktop and mobile navigation lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub desktop: Vec<NavItem>,
    pub mobile: Vec<NavItem>,
}

impl NavBar {
    pub fn new(desktop: Vec<NavItem>, mobile: Vec<NavItem>) -> Self {
        Self { desktop, mobile }
    }

    /// Pages currently marked active, desktop first.
    pub fn active_pages(&self) -> Vec<Page> {
        self.desktop
            .iter()
            .chain(&self.mobile)
            .filter(|item| item.active)
            .map(|item| item.page)
            .collect()
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(
            vec![
                NavItem::new(Page::Dashboard, "داشبورد"),
                NavItem::new(Page::Invoices, "فاکتورها"),
                NavItem::new(Page::Expenses, "هزینه‌ها"),
                NavItem::new(Page::Clients, "مشتریان"),
                NavItem::new(Page::Products, "محصولات"),
                NavItem::new(Page::Reports, "گزارش‌ها"),
                NavItem::new(Page::Settings, "تنظیمات"),
            ],
            vec![
                NavItem::new(Page::Dashboard, "خانه"),
                NavItem::new(Page::Invoices, "فاکتورها"),
                NavItem::new(Page::Expenses, "هزینه‌ها"),
                NavItem::new(Page::Reports, "گزارش‌ها"),
                NavItem::new(Page::Settings, "تنظیمات"),
            ],
        )
    }
}

impl NavHighlighter for NavBar {
    fn highlight(&mut self, current: Page) {
        for item in self.desktop.iter_mut().chain(self.mobile.iter_mut()) {
            item.active = item.page == current;
        }
    }
}
