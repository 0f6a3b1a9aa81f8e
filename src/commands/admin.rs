//! Administrator commands that change or re-read the inventory file.
//!
//! The dispatcher has already checked the administrator capability by the time
//! any of these run.

use super::dispatcher::Dispatcher;
use super::invocation::Invocation;
use crate::database::inventory::{add_item, edit_item, remove_item};
use crate::error::Result;
use crate::ui::reply::{EmbedView, Reply};
use crate::ui::style::{
    COLOR_ALERT, COLOR_LISTING, COLOR_SUCCESS, EMOJI_OK, category_title, format_price,
};
use tracing::info;

pub fn run_add(dispatcher: &Dispatcher, invocation: &Invocation) -> Result<Reply> {
    let category = invocation.category()?;
    let name = invocation.item_name()?;
    let price = invocation.price("price")?;

    let store = dispatcher.store();
    let inventory = add_item(store.load()?, category.clone(), name, price);
    store.save(&inventory)?;
    info!(%category, item = name, price, user = invocation.caller.user_id, "item_added");

    let embed = EmbedView::new(format!("{EMOJI_OK} Item Added Successfully"), COLOR_SUCCESS)
        .description(format!("Added to {} category", category_title(category.as_str())))
        .field("Item", name, true)
        .field("Price", format_price(price), true);
    Ok(Reply::embed(embed))
}

pub fn run_remove(dispatcher: &Dispatcher, invocation: &Invocation) -> Result<Reply> {
    let category = invocation.category()?;
    let name = invocation.item_name()?;

    let store = dispatcher.store();
    let inventory = remove_item(store.load()?, &category, name)?;
    store.save(&inventory)?;
    info!(%category, item = name, user = invocation.caller.user_id, "item_removed");

    let embed = EmbedView::new(format!("{EMOJI_OK} Item Removed Successfully"), COLOR_ALERT)
        .description(format!(
            "Removed '{name}' from {}",
            category_title(category.as_str())
        ));
    Ok(Reply::embed(embed))
}

pub fn run_edit(dispatcher: &Dispatcher, invocation: &Invocation) -> Result<Reply> {
    let category = invocation.category()?;
    let name = invocation.item_name()?;
    let new_price = invocation.price("new_price")?;

    let store = dispatcher.store();
    let (inventory, old_price) = edit_item(store.load()?, &category, name, new_price)?;
    store.save(&inventory)?;
    info!(
        %category,
        item = name,
        old_price,
        new_price,
        user = invocation.caller.user_id,
        "item_repriced"
    );

    let embed = EmbedView::new(format!("{EMOJI_OK} Item Updated Successfully"), COLOR_LISTING)
        .description(format!(
            "Updated '{name}' in {}",
            category_title(category.as_str())
        ))
        .field("Old Price", format_price(old_price), true)
        .field("New Price", format_price(new_price), true);
    Ok(Reply::embed(embed))
}

/// Confirms the file is readable, creating the default document if absent.
pub fn run_reload(dispatcher: &Dispatcher, _invocation: &Invocation) -> Result<Reply> {
    let inventory = dispatcher.store().load()?;
    info!(
        categories = inventory.category_count(),
        items = inventory.total_items(),
        "inventory_reloaded"
    );
    Ok(Reply::private(format!("{EMOJI_OK} Inventory reloaded from file!")))
}
