//! Purchase history report.
//!
//! Read-only view of the `purchases` table, newest first, rendered as plain text.

use crate::{core::purchase::PurchaseStore, entities::PurchaseRecord, errors::Result};

/// Text shown when nothing has been sold yet.
pub const EMPTY_HISTORY: &str = "No purchases found.";

/// Formats a single stored row.
#[must_use]
pub fn format_purchase(record: &PurchaseRecord) -> String {
    format!(
        "#{}  {}  {} x {} @ {:.2} = {:.2}",
        record.id, record.date, record.item, record.quantity, record.price, record.total
    )
}

/// Renders rows in the order given, one per line.
#[must_use]
pub fn render_purchase_history(records: &[PurchaseRecord]) -> String {
    if records.is_empty() {
        return EMPTY_HISTORY.to_string();
    }
    records
        .iter()
        .map(format_purchase)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetches the full history from `store` and renders it.
pub async fn purchase_history_report<S: PurchaseStore>(store: &S) -> Result<String> {
    let records = store.purchase_history().await?;
    Ok(render_purchase_history(&records))
}
