//! Sample records used when the store has no saved data.

use crate::data::model::{Client, Expense, Invoice, InvoiceItem, InvoiceStatus, Product};

pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "اداری",
    "نرم‌افزار",
    "سخت‌افزار",
    "سفر",
    "بازاریابی",
    "حقوق",
    "اجاره",
    "آب و برق",
    "اینترنت",
    "سایر",
];

pub const PRODUCT_CATEGORIES: [&str; 5] = ["خدمات", "محصولات دیجیتال", "مشاوره", "آموزش", "سایر"];

fn item(name: &str, quantity: f64, price: f64) -> InvoiceItem {
    InvoiceItem {
        name: name.to_string(),
        quantity,
        price,
        total: quantity * price,
    }
}

pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "1".into(),
            number: "INV-001".into(),
            client_id: "1".into(),
            client_name: "شرکت نمونه".into(),
            date: "2024-01-15".into(),
            due_date: "2024-02-15".into(),
            items: vec![item("خدمات مشاوره", 10.0, 500_000.0), item("طراحی وب", 1.0, 2_000_000.0)],
            subtotal: 7_000_000.0,
            tax: 1_050_000.0,
            total: 8_050_000.0,
            status: InvoiceStatus::Paid,
            currency: "IRR".into(),
        },
        Invoice {
            id: "2".into(),
            number: "INV-002".into(),
            client_id: "2".into(),
            client_name: "فروشگاه آنلاین".into(),
            date: "2024-01-20".into(),
            due_date: "2024-02-20".into(),
            items: vec![item("توسعه اپلیکیشن", 1.0, 5_000_000.0)],
            subtotal: 5_000_000.0,
            tax: 750_000.0,
            total: 5_750_000.0,
            status: InvoiceStatus::Pending,
            currency: "IRR".into(),
        },
    ]
}

pub fn sample_expenses() -> Vec<Expense> {
    let expense = |id: &str, category: &str, description: &str, amount: f64, date: &str| Expense {
        id: id.into(),
        category: category.into(),
        description: description.into(),
        amount,
        date: date.into(),
        currency: "IRR".into(),
        receipt: None,
    };
    vec![
        expense("1", "اداری", "خرید کاغذ و لوازم التحریر", 500_000.0, "2024-01-10"),
        expense("2", "نرم‌افزار", "اشتراک سرویس ابری", 2_000_000.0, "2024-01-05"),
        expense("3", "سفر", "هزینه سفر کاری", 3_000_000.0, "2024-01-12"),
    ]
}

pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".into(),
            name: "شرکت نمونه".into(),
            email: "info@example.com".into(),
            phone: "09123456789".into(),
            address: "تهران، خیابان نمونه".into(),
            tax_id: "1234567890".into(),
            currency: "IRR".into(),
            created_at: "2024-01-01".into(),
        },
        Client {
            id: "2".into(),
            name: "فروشگاه آنلاین".into(),
            email: "contact@shop.com".into(),
            phone: "09187654321".into(),
            address: "اصفهان، خیابان اصلی".into(),
            tax_id: "0987654321".into(),
            currency: "IRR".into(),
            created_at: "2024-01-05".into(),
        },
    ]
}

pub fn sample_products() -> Vec<Product> {
    let product = |id: &str, name: &str, description: &str, price: f64, unit: &str| Product {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        unit: unit.into(),
        category: PRODUCT_CATEGORIES[0].into(),
        currency: "IRR".into(),
        tax_rate: 9.0,
    };
    vec![
        product("1", "خدمات مشاوره", "مشاوره تخصصی در زمینه کسب و کار", 500_000.0, "ساعت"),
        product("2", "طراحی وب", "طراحی و توسعه وبسایت", 2_000_000.0, "پروژه"),
        product("3", "توسعه اپلیکیشن", "توسعه اپلیکیشن موبایل", 5_000_000.0, "پروژه"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_totals_add_up() {
        for invoice in sample_invoices() {
            let items: f64 = invoice.items.iter().map(|i| i.total).sum();
            assert_eq!(items, invoice.subtotal, "{}", invoice.number);
            assert_eq!(invoice.subtotal + invoice.tax, invoice.total, "{}", invoice.number);
        }
    }

    #[test]
    fn test_expense_categories_known() {
        for expense in sample_expenses() {
            assert!(EXPENSE_CATEGORIES.contains(&expense.category.as_str()));
        }
    }
}
