//! Purchase persistence - writing sold lines and reading them back.
//!
//! [`PurchaseStore`] is the seam between the billing engine and storage. The production
//! store is the `SeaORM` [`DatabaseConnection`]; each recorded line is its own database
//! transaction, so a write is durable as soon as `record_purchase` returns.

use crate::{
    core::billing::BillLine,
    entities::{Purchase, PurchaseColumn, PurchaseRecord, purchase},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// Timestamp format stored in the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only storage for purchase records.
#[allow(async_fn_in_trait)]
pub trait PurchaseStore {
    /// Persists one bill line with the current timestamp.
    async fn record_purchase(&self, line: &BillLine) -> Result<PurchaseRecord>;

    /// Every stored record, newest first.
    async fn purchase_history(&self) -> Result<Vec<PurchaseRecord>>;
}

impl PurchaseStore for DatabaseConnection {
    async fn record_purchase(&self, line: &BillLine) -> Result<PurchaseRecord> {
        record_purchase(self, line).await
    }

    async fn purchase_history(&self) -> Result<Vec<PurchaseRecord>> {
        list_purchases(self).await
    }
}

/// Current local time in [`DATE_FORMAT`].
#[must_use]
pub fn timestamp_now() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Inserts one purchase row inside its own transaction.
///
/// # Errors
/// Returns an error if the transaction cannot be opened, the insert fails, or the commit fails.
#[instrument(skip(db, line), fields(item = %line.item, quantity = %line.quantity))]
pub async fn record_purchase(db: &DatabaseConnection, line: &BillLine) -> Result<PurchaseRecord> {
    let txn = db.begin().await?;

    let purchase = purchase::ActiveModel {
        item: Set(line.item.clone()),
        price: Set(line.unit_price),
        quantity: Set(i64::from(line.quantity)),
        total: Set(line.cost),
        date: Set(timestamp_now()),
        ..Default::default()
    };
    let saved = purchase.insert(&txn).await?;

    txn.commit().await?;
    debug!(id = saved.id, "Purchase recorded");
    Ok(saved)
}

/// Retrieves every purchase, ordered by id descending (newest first).
pub async fn list_purchases(db: &DatabaseConnection) -> Result<Vec<PurchaseRecord>> {
    Purchase::find()
        .order_by_desc(PurchaseColumn::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
