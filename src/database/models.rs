//! The shapes persisted in the inventory file: items, category keys and the
//! whole-document `Inventory` mapping.

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// One sellable entry. A price of `0` means "price to be announced".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The categories every fresh inventory starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Streaming,
    Gaming,
    Vpn,
    Accounts,
    Codes,
    OutOfStock,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Streaming,
        Category::Gaming,
        Category::Vpn,
        Category::Accounts,
        Category::Codes,
        Category::OutOfStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Streaming => "streaming",
            Category::Gaming => "gaming",
            Category::Vpn => "vpn",
            Category::Accounts => "accounts",
            Category::Codes => "codes",
            Category::OutOfStock => "outofstock",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Streaming => "📺",
            Category::Gaming => "🎮",
            Category::Vpn => "🔒",
            Category::Accounts => "👤",
            Category::Codes => "🎟️",
            Category::OutOfStock => "❌",
        }
    }

    /// Short blurb used as the slash command description.
    pub fn command_description(&self) -> &'static str {
        match self {
            Category::Streaming => "View available Streaming services",
            Category::Gaming => "View available Gaming items",
            Category::Vpn => "View available VPN services",
            Category::Accounts => "View available Accounts",
            Category::Codes => "View available Codes",
            Category::OutOfStock => "View out of stock items",
        }
    }

    pub fn key(&self) -> CategoryKey {
        CategoryKey(self.as_str().to_string())
    }
}

impl FromStr for Category {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "streaming" => Ok(Category::Streaming),
            "gaming" => Ok(Category::Gaming),
            "vpn" => Ok(Category::Vpn),
            "accounts" => Ok(Category::Accounts),
            "codes" => Ok(Category::Codes),
            "outofstock" => Ok(Category::OutOfStock),
            _ => Err(()),
        }
    }
}

/// A category name as it appears in the document: trimmed and lowercased.
/// Unknown names are allowed; `add` may introduce new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Normalises user input. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn known(&self) -> Option<Category> {
        Category::from_str(&self.0).ok()
    }

    /// Emoji for known categories, a generic box otherwise.
    pub fn emoji(&self) -> &'static str {
        self.known().map_or("📦", |c| c.emoji())
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The full persisted inventory. Category order is the order keys were first
/// written and is preserved through load and save.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inventory {
    categories: Vec<(CategoryKey, Vec<Item>)>,
}

impl Inventory {
    /// The first-run document: the six known categories, all empty.
    pub fn with_default_categories() -> Self {
        Self {
            categories: Category::ALL.iter().map(|c| (c.key(), Vec::new())).collect(),
        }
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&Vec<Item>> {
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, items)| items)
    }

    pub fn get_mut(&mut self, key: &CategoryKey) -> Option<&mut Vec<Item>> {
        self.categories
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, items)| items)
    }

    /// Returns the category's items, appending an empty category if absent.
    pub fn entry(&mut self, key: CategoryKey) -> &mut Vec<Item> {
        let idx = match self.categories.iter().position(|(k, _)| *k == key) {
            Some(idx) => idx,
            None => {
                self.categories.push((key, Vec::new()));
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &[Item])> {
        self.categories.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|(_, v)| v.len()).sum()
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (key, items) in &self.categories {
            map.serialize_entry(key.as_str(), items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InventoryVisitor;

        impl<'de> Visitor<'de> for InventoryVisitor {
            type Value = Inventory;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of category name to a list of items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Inventory, A::Error> {
                let mut inventory = Inventory::default();
                while let Some((raw, items)) = access.next_entry::<String, Vec<Item>>()? {
                    let key = CategoryKey::parse(&raw).ok_or_else(|| {
                        A::Error::custom("category name must not be blank")
                    })?;
                    if inventory.get(&key).is_some() {
                        // Keys differing only by case collapse into the first one seen.
                        warn!(category = %key, key = %raw, "category_keys_merged");
                    } else if raw != key.as_str() {
                        warn!(category = %key, key = %raw, "category_key_normalised");
                    }
                    inventory.entry(key).extend(items);
                }
                Ok(inventory)
            }
        }

        deserializer.deserialize_map(InventoryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_key_normalises() {
        let key = CategoryKey::parse("  GaMing ").unwrap();
        assert_eq!(key.as_str(), "gaming");
        assert_eq!(key.known(), Some(Category::Gaming));
        assert!(CategoryKey::parse("   ").is_none());
    }

    #[test]
    fn unknown_category_gets_box_emoji() {
        let key = CategoryKey::parse("giftcards").unwrap();
        assert_eq!(key.known(), None);
        assert_eq!(key.emoji(), "📦");
    }

    #[test]
    fn document_preserves_key_order() {
        let json = r#"{"vpn":[{"name":"Nord","price":3.5}],"accounts":[],"zeta":[]}"#;
        let inv: Inventory = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = inv.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["vpn", "accounts", "zeta"]);
        let back = serde_json::to_string(&inv).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn case_variant_keys_merge_into_first() {
        let json = r#"{"Gaming":[{"name":"A","price":1.0}],"vpn":[],"GAMING":[{"name":"B","price":2.0}]}"#;
        let inv: Inventory = serde_json::from_str(json).unwrap();
        assert_eq!(inv.category_count(), 2);
        let gaming = inv.get(&Category::Gaming.key()).unwrap();
        assert_eq!(gaming, &[Item::new("A", 1.0), Item::new("B", 2.0)]);
        assert_eq!(
            serde_json::to_string(&inv).unwrap(),
            r#"{"gaming":[{"name":"A","price":1.0},{"name":"B","price":2.0}],"vpn":[]}"#
        );
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<Inventory>(r#"{"vpn":{"name":"x"}}"#).is_err());
        assert!(serde_json::from_str::<Inventory>(r#"{"vpn":[{"name":"x"}]}"#).is_err());
        assert!(serde_json::from_str::<Inventory>("[]").is_err());
    }

    #[test]
    fn default_document_has_six_empty_categories() {
        let inv = Inventory::with_default_categories();
        assert_eq!(inv.category_count(), 6);
        assert_eq!(inv.total_items(), 0);
        for c in Category::ALL {
            assert_eq!(inv.get(&c.key()).map(Vec::len), Some(0));
        }
    }
}
