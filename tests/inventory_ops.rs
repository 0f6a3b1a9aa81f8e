use shopkeeper_bot::InventoryError;
use shopkeeper_bot::database::InventoryStore;
use shopkeeper_bot::database::inventory::{add_item, edit_item, list_category, remove_item};
use shopkeeper_bot::database::models::{Category, CategoryKey, Inventory, Item};

fn key(s: &str) -> CategoryKey {
    CategoryKey::parse(s).unwrap()
}

#[test]
fn default_init_yields_six_empty_categories() {
    let dir = tempfile::tempdir().unwrap();
    let store = InventoryStore::new(dir.path().join("inventory.json"));
    let inv = store.load().unwrap();
    let keys: Vec<&str> = inv.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        ["streaming", "gaming", "vpn", "accounts", "codes", "outofstock"]
    );
    assert_eq!(inv.total_items(), 0);
    // Persisted, so a second load reads the same document back.
    assert_eq!(store.load().unwrap(), inv);
}

#[test]
fn save_load_round_trip_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let store = InventoryStore::new(&path);
    let mut inv = store.load().unwrap();
    inv = add_item(inv, key("gaming"), "Steam Key", 19.99);
    inv = add_item(inv, key("giftcards"), "Amazon", 0.0);
    store.save(&inv).unwrap();

    let first = std::fs::read_to_string(&path).unwrap();
    store.save(&store.load().unwrap()).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.load().unwrap(), inv);
}

#[test]
fn add_increases_count_by_one() {
    let mut inv = Inventory::with_default_categories();
    for (cat, name) in [("vpn", "Nord"), ("vpn", "Nord"), ("newcat", "Thing")] {
        let before = list_category(&inv, &key(cat)).len();
        inv = add_item(inv, key(cat), name, 1.0);
        assert_eq!(list_category(&inv, &key(cat)).len(), before + 1);
    }
}

#[test]
fn remove_deletes_every_match() {
    let mut inv = Inventory::with_default_categories();
    inv = add_item(inv, key("codes"), "Promo", 1.0);
    inv = add_item(inv, key("codes"), "Other", 2.0);
    inv = add_item(inv, key("codes"), "Promo", 3.0);

    let inv = remove_item(inv, &key("codes"), "Promo").unwrap();
    assert_eq!(list_category(&inv, &key("codes")), [Item::new("Other", 2.0)]);
}

#[test]
fn remove_missing_item_or_category_is_not_found() {
    let inv = add_item(Inventory::with_default_categories(), key("codes"), "Promo", 1.0);

    let err = remove_item(inv.clone(), &key("codes"), "Nope").unwrap_err();
    assert!(matches!(err, InventoryError::ItemNotFound { .. }), "got: {err}");
    let err = remove_item(inv.clone(), &key("gift"), "Promo").unwrap_err();
    assert!(matches!(err, InventoryError::CategoryNotFound(ref c) if c == "gift"));
    assert!(err.is_not_found());
}

#[test]
fn edit_changes_only_first_match() {
    let mut inv = Inventory::with_default_categories();
    inv = add_item(inv, Category::Gaming.key(), "Steam Key", 0.0);
    inv = add_item(inv, Category::Gaming.key(), "Steam Key", 19.99);

    let (inv, old) = edit_item(inv, &Category::Gaming.key(), "Steam Key", 9.99).unwrap();
    assert_eq!(old, 0.0);
    assert_eq!(
        list_category(&inv, &Category::Gaming.key()),
        [Item::new("Steam Key", 9.99), Item::new("Steam Key", 19.99)]
    );
}

#[test]
fn edit_missing_is_not_found() {
    let inv = Inventory::with_default_categories();
    assert!(edit_item(inv.clone(), &key("vpn"), "Nord", 1.0).unwrap_err().is_not_found());
    assert!(edit_item(inv, &key("unknown"), "Nord", 1.0).unwrap_err().is_not_found());
}
