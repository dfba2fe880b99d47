//! Entity module - SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod purchase;

pub use purchase::{Column as PurchaseColumn, Entity as Purchase, Model as PurchaseRecord};
