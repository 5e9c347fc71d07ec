//! Business records.
//!
//! Field names serialize in camelCase so stored collections stay
//! compatible with the browser client's local storage layout.

use serde::{Deserialize, Serialize};

/// Invoice state. Values this client does not know are kept verbatim so a
/// load and save never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "پیش‌نویس",
            InvoiceStatus::Pending => "در انتظار",
            InvoiceStatus::Paid => "پرداخت شده",
            InvoiceStatus::Overdue => "معوق",
            InvoiceStatus::Other(_) => "نامشخص",
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "draft" => InvoiceStatus::Draft,
            "pending" => InvoiceStatus::Pending,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Other(raw),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub client_id: String,
    pub client_name: String,
    pub date: String,
    pub due_date: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub tax_id: String,
    pub currency: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub unit: String,
    pub category: String,
    pub currency: String,
    pub tax_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub theme: String,
    pub currency: String,
    pub language: String,
    pub tax_rate: f64,
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: String,
    pub company_tax_id: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            currency: "IRR".to_string(),
            language: "fa".to_string(),
            tax_rate: 9.0,
            company_name: "شرکت من".to_string(),
            company_address: String::new(),
            company_phone: String::new(),
            company_email: String::new(),
            company_tax_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_uses_camel_case() {
        let json = r#"{
            "id": "9", "number": "INV-009", "clientId": "1", "clientName": "x",
            "date": "2024-05-01", "dueDate": "2024-06-01", "items": [],
            "subtotal": 0, "tax": 0, "total": 0, "status": "cancelled", "currency": "IRR"
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.client_id, "1");
        assert_eq!(invoice.due_date, "2024-06-01");
        assert_eq!(invoice.status, InvoiceStatus::Other("cancelled".into()));
        assert_eq!(invoice.status.label(), "نامشخص");
    }

    #[test]
    fn test_status_keeps_its_text() {
        assert_eq!(serde_json::to_string(&InvoiceStatus::Paid).unwrap(), "\"paid\"");
        let status: InvoiceStatus = serde_json::from_str("\"overdue\"").unwrap();
        assert_eq!(status, InvoiceStatus::Overdue);

        let other = InvoiceStatus::from("Refunded".to_string());
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Refunded\"");
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: UserSettings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.currency, "IRR");
        assert_eq!(settings.tax_rate, 9.0);
    }
}
