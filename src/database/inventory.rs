//! Inventory operations. Each takes an already loaded document; persisting the
//! result is the caller's job.

use super::models::{CategoryKey, Inventory, Item};
use crate::constants::SUMMARY_PREVIEW_LIMIT;
use crate::error::{InventoryError, Result};
use tracing::instrument;

/// One row of the aggregate view.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: CategoryKey,
    pub total: usize,
    /// At most `SUMMARY_PREVIEW_LIMIT` items, in listing order.
    pub preview: Vec<Item>,
}

impl CategorySummary {
    /// How many items the preview left out.
    pub fn hidden(&self) -> usize {
        self.total - self.preview.len()
    }
}

/// Items of `category`, or an empty slice when the category does not exist.
pub fn list_category<'a>(inventory: &'a Inventory, category: &CategoryKey) -> &'a [Item] {
    inventory.get(category).map(Vec::as_slice).unwrap_or_default()
}

/// Summaries for every non-empty category, in document order.
pub fn list_all(inventory: &Inventory) -> Vec<CategorySummary> {
    inventory
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(key, items)| CategorySummary {
            category: key.clone(),
            total: items.len(),
            preview: items.iter().take(SUMMARY_PREVIEW_LIMIT).cloned().collect(),
        })
        .collect()
}

/// Appends an item, creating the category if needed. Duplicate names are kept.
#[instrument(level = "debug", skip(inventory))]
pub fn add_item(
    mut inventory: Inventory,
    category: CategoryKey,
    name: &str,
    price: f64,
) -> Inventory {
    inventory.entry(category).push(Item::new(name, price));
    inventory
}

/// Removes every item named exactly `name`.
#[instrument(level = "debug", skip(inventory))]
pub fn remove_item(
    mut inventory: Inventory,
    category: &CategoryKey,
    name: &str,
) -> Result<Inventory> {
    let items = inventory
        .get_mut(category)
        .ok_or_else(|| InventoryError::CategoryNotFound(category.to_string()))?;
    let before = items.len();
    items.retain(|item| item.name != name);
    if items.len() == before {
        return Err(InventoryError::ItemNotFound {
            category: category.to_string(),
            name: name.to_string(),
        });
    }
    Ok(inventory)
}

/// Re-prices the first item named exactly `name`; returns the old price.
#[instrument(level = "debug", skip(inventory))]
pub fn edit_item(
    mut inventory: Inventory,
    category: &CategoryKey,
    name: &str,
    new_price: f64,
) -> Result<(Inventory, f64)> {
    let items = inventory
        .get_mut(category)
        .ok_or_else(|| InventoryError::CategoryNotFound(category.to_string()))?;
    let Some(item) = items.iter_mut().find(|item| item.name == name) else {
        return Err(InventoryError::ItemNotFound {
            category: category.to_string(),
            name: name.to_string(),
        });
    };
    let old_price = std::mem::replace(&mut item.price, new_price);
    Ok((inventory, old_price))
}
