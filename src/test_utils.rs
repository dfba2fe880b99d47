//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases, small catalogs, and an in-memory
//! purchase store with failure injection.

use crate::{
    config::catalog::{CatalogConfig, ItemConfig},
    core::{billing::BillLine, catalog::Catalog, purchase::PurchaseStore},
    entities::PurchaseRecord,
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, DbErr};
use std::cell::RefCell;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Catalog with Milk at 45.00 and Bread at 25.00, nothing selected.
#[allow(clippy::expect_used)]
pub fn milk_and_bread() -> Catalog {
    let config = CatalogConfig {
        items: vec![
            ItemConfig {
                name: "Milk".to_string(),
                price: 45.0,
            },
            ItemConfig {
                name: "Bread".to_string(),
                price: 25.0,
            },
        ],
    };
    Catalog::from_config(&config).expect("test catalog is valid")
}

/// Purchase store that keeps records in memory.
///
/// Writes for the item named in `fail_item` return a database error.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<PurchaseRecord>>,
    fail_item: Option<String>,
}

impl MemoryStore {
    /// Store that rejects every write for `item`.
    pub fn failing_on(item: &str) -> Self {
        Self {
            records: RefCell::default(),
            fail_item: Some(item.to_string()),
        }
    }

    /// Records written so far, oldest first.
    pub fn records(&self) -> Vec<PurchaseRecord> {
        self.records.borrow().clone()
    }
}

impl PurchaseStore for MemoryStore {
    async fn record_purchase(&self, line: &BillLine) -> Result<PurchaseRecord> {
        if self.fail_item.as_deref() == Some(line.item.as_str()) {
            return Err(Error::Database(DbErr::Custom(format!(
                "disk full while writing {}",
                line.item
            ))));
        }
        let mut records = self.records.borrow_mut();
        let record = PurchaseRecord {
            id: i64::try_from(records.len()).unwrap_or(i64::MAX) + 1,
            item: line.item.clone(),
            price: line.unit_price,
            quantity: i64::from(line.quantity),
            total: line.cost,
            date: crate::core::purchase::timestamp_now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn purchase_history(&self) -> Result<Vec<PurchaseRecord>> {
        let mut records = self.records();
        records.reverse();
        Ok(records)
    }
}
