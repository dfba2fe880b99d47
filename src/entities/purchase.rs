//! Purchase entity - One sold bill line, written once and never modified.
//!
//! Rows are append-only: each generated bill inserts one row per selected item.
//! The `item` column is plain text and does not reference the live catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Auto-incrementing identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Item name at time of sale
    pub item: String,
    /// Unit price at time of sale
    pub price: f64,
    /// Quantity sold (always >= 1)
    pub quantity: i64,
    /// `price * quantity`
    pub total: f64,
    /// Local time of sale, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
}

/// Purchases stand alone and have no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
