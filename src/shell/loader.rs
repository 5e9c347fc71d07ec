//! Console page rendering.
//!
//! Each page renders to a handful of text lines built from the
//! [`DataStore`]. Amounts use fa-IR formatting and dates are shown in the
//! Jalali calendar.

use std::collections::BTreeMap;

use crate::calendar::format_jalali_str;
use crate::config::LocaleConfig;
use crate::data::seed::{EXPENSE_CATEGORIES, PRODUCT_CATEGORIES};
use crate::data::{DataStore, Invoice};
use crate::locale::{format_currency, format_number, to_english_digits, Currency};
use crate::navigation::PageLoader;
use crate::routing::{Page, RouteParams};

/// Page loader that renders into a line buffer.
#[derive(Debug)]
pub struct ConsolePageLoader {
    data: DataStore,
    locale: LocaleConfig,
    output: Vec<String>,
}

impl ConsolePageLoader {
    pub fn new(data: DataStore, locale: LocaleConfig) -> Self {
        Self {
            data,
            locale,
            output: Vec::new(),
        }
    }

    pub fn data(&self) -> &DataStore {
        &self.data
    }

    /// Take everything rendered since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl PageLoader for ConsolePageLoader {
    fn load_page(&mut self, page: Page, params: &RouteParams) {
        let lines = render_page(&self.data, &self.locale, page, params);
        if self.locale.persian_digits {
            self.output.extend(lines);
        } else {
            self.output.extend(lines.iter().map(|line| to_english_digits(line)));
        }
    }
}

fn money(amount: f64, currency: &str, locale: &LocaleConfig) -> String {
    let currency = if currency.is_empty() { locale.currency.as_str() } else { currency };
    format_currency(amount, currency)
}

fn invoice_line(invoice: &Invoice, locale: &LocaleConfig) -> String {
    format!(
        "{}  {}  {}  {}  {}",
        invoice.number,
        invoice.client_name,
        money(invoice.total, &invoice.currency, locale),
        format_jalali_str(&invoice.date),
        invoice.status.label()
    )
}

/// Render `page` as text lines.
pub fn render_page(data: &DataStore, locale: &LocaleConfig, page: Page, params: &RouteParams) -> Vec<String> {
    let currency = locale.currency.as_str();
    let mut lines = Vec::new();

    match page {
        Page::Home => {
            lines.push("== دفتر: مدیریت فاکتور و هزینه ==".to_string());
            lines.push("برای شروع وارد شوید: go /login".to_string());
        }
        Page::Login => lines.push("== ورود ==".to_string()),
        Page::Signup => lines.push("== ثبت‌نام ==".to_string()),
        Page::Onboarding => {
            lines.push("== شروع کار ==".to_string());
            lines.push(format!("نام شرکت: {}", data.settings.company_name));
        }
        Page::Dashboard => {
            lines.push("== داشبورد ==".to_string());
            lines.push(format!("درآمد: {}", money(data.revenue(), currency, locale)));
            lines.push(format!("هزینه‌ها: {}", money(data.expense_total(), currency, locale)));
            lines.push(format!(
                "فاکتورها: {}  مشتریان: {}  محصولات: {}",
                format_number(data.invoices.len() as f64),
                format_number(data.clients.len() as f64),
                format_number(data.products.len() as f64)
            ));
        }
        Page::Invoices => {
            lines.push("== فاکتورها ==".to_string());
            lines.extend(data.invoices.iter().map(|invoice| invoice_line(invoice, locale)));
        }
        Page::InvoiceDetail => {
            let id = params.get("id").unwrap_or_default();
            match data.invoice(id) {
                Some(invoice) => {
                    lines.push(format!("== فاکتور {} ==", invoice.number));
                    lines.push(format!("مشتری: {}", invoice.client_name));
                    if let Some(client) = data.client(&invoice.client_id) {
                        lines.push(format!("  {}  {}", client.email, client.phone));
                    }
                    lines.push(format!(
                        "تاریخ: {}  سررسید: {}",
                        format_jalali_str(&invoice.date),
                        format_jalali_str(&invoice.due_date)
                    ));
                    for item in &invoice.items {
                        lines.push(format!(
                            "  {} × {}  {}",
                            item.name,
                            format_number(item.quantity),
                            money(item.total, &invoice.currency, locale)
                        ));
                    }
                    lines.push(format!("جمع: {}", money(invoice.subtotal, &invoice.currency, locale)));
                    lines.push(format!("مالیات: {}", money(invoice.tax, &invoice.currency, locale)));
                    lines.push(format!("مبلغ کل: {}", money(invoice.total, &invoice.currency, locale)));
                    lines.push(format!("وضعیت: {}", invoice.status.label()));
                }
                None => lines.push(format!("فاکتور یافت نشد: {id}")),
            }
        }
        Page::InvoiceNew => lines.push("== فاکتور جدید ==".to_string()),
        Page::Expenses => {
            lines.push("== هزینه‌ها ==".to_string());
            lines.extend(data.expenses.iter().map(|e| {
                format!(
                    "{}  {}  {}  {}",
                    e.category,
                    e.description,
                    money(e.amount, &e.currency, locale),
                    format_jalali_str(&e.date)
                )
            }));
        }
        Page::ExpenseNew => {
            lines.push("== هزینه جدید ==".to_string());
            lines.push(format!("دسته‌ها: {}", EXPENSE_CATEGORIES.join("، ")));
        }
        Page::Products => {
            lines.push("== محصولات ==".to_string());
            lines.extend(data.products.iter().map(|p| {
                format!("{}  {} / {}  {}", p.name, money(p.price, &p.currency, locale), p.unit, p.category)
            }));
        }
        Page::ProductNew => {
            lines.push("== محصول جدید ==".to_string());
            lines.push(format!("دسته‌ها: {}", PRODUCT_CATEGORIES.join("، ")));
        }
        Page::Clients => {
            lines.push("== مشتریان ==".to_string());
            lines.extend(
                data.clients
                    .iter()
                    .map(|c| format!("{}  {}  {}  {}", c.name, c.email, c.phone, c.address)),
            );
        }
        Page::ClientNew => lines.push("== مشتری جدید ==".to_string()),
        Page::Reports => {
            lines.push("== گزارش‌ها ==".to_string());
            let revenue = data.revenue();
            let expenses = data.expense_total();
            lines.push(format!("درآمد: {}", money(revenue, currency, locale)));
            lines.push(format!("هزینه: {}", money(expenses, currency, locale)));
            lines.push(format!("سود: {}", money(revenue - expenses, currency, locale)));

            let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
            for expense in &data.expenses {
                *by_category.entry(expense.category.as_str()).or_default() += expense.amount;
            }
            for (category, total) in by_category {
                lines.push(format!("  {category}: {}", money(total, currency, locale)));
            }
        }
        Page::Settings => {
            let settings = &data.settings;
            lines.push("== تنظیمات ==".to_string());
            lines.push(format!("نام شرکت: {}", settings.company_name));
            let currency_name = settings
                .currency
                .parse::<Currency>()
                .map(|c| c.name())
                .unwrap_or(settings.currency.as_str());
            lines.push(format!("ارز: {currency_name}"));
            lines.push(format!("نرخ مالیات: {}٪", format_number(settings.tax_rate)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SharedStore};
    use std::sync::Arc;

    fn data() -> DataStore {
        let store: SharedStore = Arc::new(MemoryStore::new());
        DataStore::load(store, true).unwrap()
    }

    #[test]
    fn test_invoice_detail() {
        let params: RouteParams = [("id", "1")].into_iter().collect();
        let lines = render_page(&data(), &LocaleConfig::default(), Page::InvoiceDetail, &params);
        assert_eq!(lines[0], "== فاکتور INV-001 ==");
        assert!(lines.contains(&"تاریخ: ۱۴۰۲/۱۰/۲۵  سررسید: ۱۴۰۲/۱۱/۲۶".to_string()));
        assert!(lines.contains(&"مبلغ کل: ۸٬۰۵۰٬۰۰۰ ریال".to_string()));
    }

    #[test]
    fn test_detail_shows_client_contact() {
        let data = data();
        let client = data.client("1").unwrap();
        let params: RouteParams = [("id", "1")].into_iter().collect();
        let lines = render_page(&data, &LocaleConfig::default(), Page::InvoiceDetail, &params);
        assert_eq!(lines[2], format!("  {}  {}", client.email, client.phone));
    }

    #[test]
    fn test_settings_and_new_pages() {
        let data = data();
        let locale = LocaleConfig::default();
        let settings = render_page(&data, &locale, Page::Settings, &RouteParams::new());
        assert!(settings.contains(&"ارز: ریال ایران".to_string()));

        let product_new = render_page(&data, &locale, Page::ProductNew, &RouteParams::new());
        assert!(product_new[1].contains("مشاوره"));
        let expense_new = render_page(&data, &locale, Page::ExpenseNew, &RouteParams::new());
        assert!(expense_new[1].contains("اجاره"));
    }

    #[test]
    fn test_unknown_invoice() {
        let params: RouteParams = [("id", "abc123")].into_iter().collect();
        let lines = render_page(&data(), &LocaleConfig::default(), Page::InvoiceDetail, &params);
        assert_eq!(lines, vec!["فاکتور یافت نشد: abc123".to_string()]);
    }

    #[test]
    fn test_every_page_renders() {
        let data = data();
        for page in Page::ALL {
            assert!(!render_page(&data, &LocaleConfig::default(), page, &RouteParams::new()).is_empty());
        }
    }

    #[test]
    fn test_latin_digits_option() {
        let locale = LocaleConfig {
            persian_digits: false,
            ..LocaleConfig::default()
        };
        let mut loader = ConsolePageLoader::new(data(), locale);
        loader.load_page(Page::Dashboard, &RouteParams::new());
        let output = loader.take_output();
        assert!(output.iter().any(|line| line.contains("13٬800٬000")));
        assert!(loader.take_output().is_empty());
    }
}
