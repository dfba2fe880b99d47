/// Billing engine: line pricing, totals, and recording sold lines
pub mod billing;
/// Catalog items and the clerk's selection state
pub mod catalog;
/// Purchase persistence and the store seam used by billing
pub mod purchase;
/// Lenient, never-below-one quantities
pub mod quantity;
/// Read-only purchase history report
pub mod report;
