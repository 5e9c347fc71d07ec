//! Collections backed by the key-value store.
//!
//! # Responsibilities
//! - Load each collection from its store key as JSON
//! - Seed sample data when a key is absent (or holds `null`)
//! - Write every collection back on save
//!
//! # Design Decisions
//! - A corrupt collection is an error, not silently reseeded
//! - Save writes keys one by one; there is no cross-key atomicity

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::data::model::{Client, Expense, Invoice, Product, UserSettings};
use crate::data::seed;
use crate::data::DataError;
use crate::storage::SharedStore;

pub const INVOICES_KEY: &str = "invoices";
pub const EXPENSES_KEY: &str = "expenses";
pub const CLIENTS_KEY: &str = "clients";
pub const PRODUCTS_KEY: &str = "products";
pub const SETTINGS_KEY: &str = "userSettings";

/// In-memory view of the business data.
#[derive(Debug, Clone)]
pub struct DataStore {
    store: SharedStore,
    pub invoices: Vec<Invoice>,
    pub expenses: Vec<Expense>,
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub settings: UserSettings,
}

fn load_key<T: DeserializeOwned>(store: &SharedStore, key: &'static str) -> Result<Option<T>, DataError> {
    match store.get(key) {
        Some(raw) => serde_json::from_str::<Option<T>>(&raw).map_err(|source| DataError::Decode { key, source }),
        None => Ok(None),
    }
}

fn save_key<T: Serialize>(store: &SharedStore, key: &'static str, value: &T) -> Result<(), DataError> {
    let raw = serde_json::to_string(value).map_err(|source| DataError::Encode { key, source })?;
    store.set(key, &raw)?;
    Ok(())
}

impl DataStore {
    /// Load all collections. Missing ones are seeded when `seed` is true,
    /// otherwise they start empty.
    pub fn load(store: SharedStore, seed: bool) -> Result<Self, DataError> {
        fn or_seed<T>(loaded: Option<T>, seed: bool, sample: impl FnOnce() -> T, empty: T) -> T {
            match loaded {
                Some(value) => value,
                None if seed => sample(),
                None => empty,
            }
        }

        let invoices = or_seed(load_key(&store, INVOICES_KEY)?, seed, seed::sample_invoices, Vec::new());
        let expenses = or_seed(load_key(&store, EXPENSES_KEY)?, seed, seed::sample_expenses, Vec::new());
        let clients = or_seed(load_key(&store, CLIENTS_KEY)?, seed, seed::sample_clients, Vec::new());
        let products = or_seed(load_key(&store, PRODUCTS_KEY)?, seed, seed::sample_products, Vec::new());
        let settings = load_key(&store, SETTINGS_KEY)?.unwrap_or_default();

        tracing::debug!(
            invoices = invoices.len(),
            expenses = expenses.len(),
            clients = clients.len(),
            products = products.len(),
            "Data loaded"
        );

        Ok(Self {
            store,
            invoices,
            expenses,
            clients,
            products,
            settings,
        })
    }

    /// Write every collection back to the store.
    pub fn save(&self) -> Result<(), DataError> {
        save_key(&self.store, INVOICES_KEY, &self.invoices)?;
        save_key(&self.store, EXPENSES_KEY, &self.expenses)?;
        save_key(&self.store, CLIENTS_KEY, &self.clients)?;
        save_key(&self.store, PRODUCTS_KEY, &self.products)?;
        save_key(&self.store, SETTINGS_KEY, &self.settings)?;
        tracing::debug!("Data saved");
        Ok(())
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Sum of invoice totals (all currencies, as stored).
    pub fn revenue(&self) -> f64 {
        self.invoices.iter().map(|i| i.total).sum()
    }

    pub fn expense_total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}
