//! Catalog and selection state - the items on sale and what the clerk has picked.
//!
//! The catalog is an explicit state object owned by the caller (the register session in
//! the binary, a plain value in tests). Items are kept in insertion order, which is also
//! the order bill lines are produced in. Items are never removed; the only structural
//! change is appending a custom item.

use crate::{
    config::catalog::CatalogConfig,
    core::quantity::Quantity,
    errors::{Error, Result},
};
use tracing::debug;

/// A sellable item.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// Unique display name
    pub name: String,
    /// Unit price, finite and non-negative
    pub unit_price: f64,
}

/// The clerk's choice for one item in the current bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Whether the item goes on the next bill
    pub selected: bool,
    /// Units to bill
    pub quantity: Quantity,
}

/// A catalog item together with its selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// The item itself
    pub item: CatalogItem,
    /// Current selection for this item
    pub selection: Selection,
}

/// In-memory catalog with per-item selection state.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds the startup catalog from configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if any configured item is invalid or duplicated.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut catalog = Self::new();
        for item in &config.items {
            catalog
                .add_item(&item.name, item.price)
                .map_err(|e| Error::Config {
                    message: format!("Invalid catalog item '{}': {e}", item.name),
                })?;
        }
        Ok(catalog)
    }

    /// Inserts a new item, unselected with quantity 1.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if the name is blank or the price is negative or not finite
    /// - [`Error::DuplicateItem`] if an item with the same name exists
    pub fn add_item(&mut self, name: &str, unit_price: f64) -> Result<&CatalogItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_input("Enter item name."));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(Error::invalid_input(
                "Price must be a non-negative number.",
            ));
        }
        if self.get(name).is_some() {
            return Err(Error::DuplicateItem {
                name: name.to_string(),
            });
        }

        let index = self.entries.len();
        self.entries.push(CatalogEntry {
            item: CatalogItem {
                name: name.to_string(),
                unit_price,
            },
            selection: Selection::default(),
        });
        debug!(item = name, unit_price, "Added catalog item");
        Ok(&self.entries[index].item)
    }

    /// Adds a clerk-entered item, parsing the price from text.
    ///
    /// Checks run in the order the clerk would fix them: name, then price, then duplicates.
    /// On any error the catalog is unchanged.
    pub fn add_custom_item(&mut self, name: &str, price_text: &str) -> Result<&CatalogItem> {
        if name.trim().is_empty() {
            return Err(Error::invalid_input("Enter item name."));
        }
        let price = parse_price(price_text)
            .ok_or_else(|| Error::invalid_input("Enter a valid numeric price."))?;
        self.add_item(name, price)
    }

    /// Flips the selected flag. Returns the new state, or `None` for an unknown name.
    pub fn toggle_selection(&mut self, name: &str) -> Option<bool> {
        let entry = self.get_mut(name)?;
        entry.selection.selected = !entry.selection.selected;
        Some(entry.selection.selected)
    }

    /// Sets the quantity from clerk input, coercing anything invalid to 1.
    /// Returns the stored quantity, or `None` for an unknown name.
    pub fn set_quantity(&mut self, name: &str, value: &str) -> Option<Quantity> {
        let entry = self.get_mut(name)?;
        entry.selection.quantity = Quantity::parse_lenient(value);
        Some(entry.selection.quantity)
    }

    /// Deselects every item. Quantities are kept.
    pub fn clear_all_selections(&mut self) {
        for entry in &mut self.entries {
            entry.selection.selected = false;
        }
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        let name = name.trim();
        self.entries.iter().find(|entry| entry.item.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut CatalogEntry> {
        let name = name.trim();
        self.entries.iter_mut().find(|entry| entry.item.name == name)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Selected entries in insertion order.
    pub fn selected_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.selection.selected)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a clerk-entered price. Underscores are accepted as digit separators
/// (`1_000`), but only between two digits.
fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    text.replace('_', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::catalog::ItemConfig;
    use crate::test_utils::milk_and_bread;

    #[test]
    fn test_default_config_builds_catalog() {
        let catalog = Catalog::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.entries()[0].item.name, "Milk");
        assert!(catalog.entries().iter().all(|e| !e.selection.selected));
        assert!(
            catalog
                .entries()
                .iter()
                .all(|e| e.selection.quantity == Quantity::ONE)
        );
    }

    #[test]
    fn test_from_config_rejects_duplicates() {
        let config = CatalogConfig {
            items: vec![
                ItemConfig {
                    name: "Milk".to_string(),
                    price: 45.0,
                },
                ItemConfig {
                    name: "Milk".to_string(),
                    price: 50.0,
                },
            ],
        };
        let result = Catalog::from_config(&config);
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_add_custom_item() {
        let mut catalog = milk_and_bread();

        let item = catalog.add_custom_item("  Paneer ", "90.5").unwrap();
        assert_eq!(item.name, "Paneer");
        assert_eq!(item.unit_price, 90.5);

        assert_eq!(catalog.len(), 3);
        let entry = catalog.get("Paneer").unwrap();
        assert!(!entry.selection.selected);
        assert_eq!(entry.selection.quantity, Quantity::ONE);
        // Appended after the existing items
        assert_eq!(catalog.entries()[2].item.name, "Paneer");
    }

    #[test]
    fn test_add_custom_item_free_item_allowed() {
        let mut catalog = milk_and_bread();
        assert!(catalog.add_custom_item("Carry Bag", "0").is_ok());
    }

    #[test]
    fn test_add_custom_item_accepts_digit_separators() {
        let mut catalog = milk_and_bread();
        let item = catalog.add_custom_item("Rice (25kg)", "1_000.5").unwrap();
        assert_eq!(item.unit_price, 1000.5);

        for price in ["_100", "100_", "1__000", "1_.5"] {
            let result = catalog.add_custom_item("Atta", price);
            assert!(
                matches!(result, Err(Error::InvalidInput { message: _ })),
                "price {price:?} should be rejected"
            );
        }
        assert!(catalog.get("Atta").is_none());
    }

    #[test]
    fn test_add_custom_item_rejects_empty_name() {
        let mut catalog = milk_and_bread();
        let result = catalog.add_custom_item("   ", "10");
        assert!(matches!(result, Err(Error::InvalidInput { message: _ })));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_add_custom_item_rejects_bad_price() {
        let mut catalog = milk_and_bread();

        for price in ["abc", "", "12,50", "-3", "NaN", "inf"] {
            let result = catalog.add_custom_item("Butter", price);
            assert!(
                matches!(result, Err(Error::InvalidInput { message: _ })),
                "price {price:?} should be rejected"
            );
        }
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Butter").is_none());
    }

    #[test]
    fn test_add_custom_item_rejects_duplicate() {
        let mut catalog = milk_and_bread();
        catalog.toggle_selection("Milk");
        catalog.set_quantity("Milk", "3");

        let result = catalog.add_custom_item("Milk", "99");
        assert!(matches!(result, Err(Error::DuplicateItem { ref name }) if name == "Milk"));

        let milk = catalog.get("Milk").unwrap();
        assert_eq!(milk.item.unit_price, 45.0);
        assert!(milk.selection.selected);
        assert_eq!(milk.selection.quantity, Quantity::new(3));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut catalog = milk_and_bread();
        assert!(catalog.add_custom_item("milk", "40").is_ok());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_toggle_selection() {
        let mut catalog = milk_and_bread();
        assert_eq!(catalog.toggle_selection("Milk"), Some(true));
        assert!(catalog.get("Milk").unwrap().selection.selected);
        assert_eq!(catalog.toggle_selection("Milk"), Some(false));
        assert!(!catalog.get("Milk").unwrap().selection.selected);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut catalog = milk_and_bread();
        let before = catalog.entries().to_vec();
        assert_eq!(catalog.toggle_selection("Caviar"), None);
        assert_eq!(catalog.entries(), before.as_slice());
    }

    #[test]
    fn test_set_quantity_coerces() {
        let mut catalog = milk_and_bread();
        assert_eq!(catalog.set_quantity("Bread", "4"), Some(Quantity::new(4)));
        assert_eq!(catalog.set_quantity("Bread", "0"), Some(Quantity::ONE));
        assert_eq!(catalog.set_quantity("Bread", "-2"), Some(Quantity::ONE));
        assert_eq!(catalog.set_quantity("Bread", "abc"), Some(Quantity::ONE));
        assert_eq!(catalog.set_quantity("Caviar", "3"), None);
    }

    #[test]
    fn test_clear_all_selections_keeps_quantities() {
        let mut catalog = milk_and_bread();
        catalog.toggle_selection("Milk");
        catalog.toggle_selection("Bread");
        catalog.set_quantity("Milk", "5");

        catalog.clear_all_selections();

        assert_eq!(catalog.selected_entries().count(), 0);
        assert_eq!(
            catalog.get("Milk").unwrap().selection.quantity,
            Quantity::new(5)
        );
    }

    #[test]
    fn test_selected_entries_in_insertion_order() {
        let mut catalog = milk_and_bread();
        catalog.add_custom_item("Jam", "80").unwrap();
        catalog.toggle_selection("Jam");
        catalog.toggle_selection("Milk");

        let names: Vec<&str> = catalog
            .selected_entries()
            .map(|e| e.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Milk", "Jam"]);
    }
}
