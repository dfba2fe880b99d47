//! Billing engine - turns the current selection into a bill and records each sold line.
//!
//! A bill is computed from the catalog's selected entries in catalog order. Every line is
//! handed to the [`PurchaseStore`] exactly once before the result is returned. Writes are
//! independent: a failed line does not stop later lines and nothing already written is
//! rolled back.

use crate::{
    core::{catalog::Catalog, purchase::PurchaseStore, quantity::Quantity},
    errors::{Error, Result},
};
use std::fmt;
use tracing::{error, info, instrument};

/// One priced line of a bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine {
    /// Item name
    pub item: String,
    /// Unit price at time of billing
    pub unit_price: f64,
    /// Units billed
    pub quantity: Quantity,
    /// `unit_price * quantity`
    pub cost: f64,
}

impl BillLine {
    /// Prices a line; the cost is always derived from price and quantity.
    #[must_use]
    pub fn new(item: impl Into<String>, unit_price: f64, quantity: Quantity) -> Self {
        Self {
            item: item.into(),
            unit_price,
            quantity,
            cost: unit_price * f64::from(quantity),
        }
    }
}

impl fmt::Display for BillLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = {:.2}", self.item, self.quantity, self.cost)
    }
}

/// A computed bill: ordered lines plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct BillResult {
    /// Lines in catalog order
    pub lines: Vec<BillLine>,
    /// Sum of line costs
    pub total: f64,
}

impl BillResult {
    /// Receipt text shown to the clerk.
    #[must_use]
    pub fn summary(&self) -> String {
        let lines: Vec<String> = self.lines.iter().map(ToString::to_string).collect();
        format!(
            "{}\n\n---------------------------\nTotal: {:.2}",
            lines.join("\n"),
            self.total
        )
    }
}

/// Result of a billing action.
#[derive(Debug, Clone, PartialEq)]
pub enum BillOutcome {
    /// A bill was produced and its lines recorded
    Billed(BillResult),
    /// Nothing to bill
    Empty,
}

/// Prices every selected entry without touching storage.
#[must_use]
pub fn compute_lines(catalog: &Catalog) -> Vec<BillLine> {
    catalog
        .selected_entries()
        .map(|entry| {
            BillLine::new(
                entry.item.name.clone(),
                entry.item.unit_price,
                entry.selection.quantity,
            )
        })
        .collect()
}

/// Generates a bill from the current selection and records each line.
///
/// Returns [`BillOutcome::Empty`] when the total is not positive. Selected lines are
/// recorded before that check, so a selection consisting only of free items is still
/// written but reported as empty.
///
/// # Errors
/// Returns [`Error::PersistenceFailure`] naming every line that could not be recorded.
/// All lines are attempted regardless of earlier failures.
#[instrument(skip_all)]
pub async fn generate_bill<S: PurchaseStore>(catalog: &Catalog, store: &S) -> Result<BillOutcome> {
    let lines = compute_lines(catalog);

    let mut failed_items = Vec::new();
    let mut first_error = None;
    for line in &lines {
        if let Err(e) = store.record_purchase(line).await {
            error!(item = %line.item, "Failed to record purchase: {e}");
            failed_items.push(line.item.clone());
            first_error.get_or_insert_with(|| e.to_string());
        }
    }

    if let Some(message) = first_error {
        return Err(Error::PersistenceFailure {
            failed_items,
            message,
        });
    }

    let total: f64 = lines.iter().map(|line| line.cost).sum();
    if total <= 0.0 {
        return Ok(BillOutcome::Empty);
    }

    info!(lines = lines.len(), total, "Bill generated");
    Ok(BillOutcome::Billed(BillResult { lines, total }))
}
