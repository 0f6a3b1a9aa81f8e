//! Read-only listing commands: one per category plus `/all`.

use super::dispatcher::Dispatcher;
use super::invocation::Invocation;
use crate::database::inventory::{list_all, list_category};
use crate::database::models::{Category, CategoryKey, Inventory, Item};
use crate::error::Result;
use crate::ui::reply::{EmbedView, Reply};
use crate::ui::style::{
    COLOR_ALERT, COLOR_LISTING, COLOR_SUMMARY, EMOJI_PRICE, EMOJI_STORE, category_title,
    format_price,
};

pub fn run_category(dispatcher: &Dispatcher, category: Category) -> Result<Reply> {
    let inventory = dispatcher.store().load()?;
    let key = category.key();
    let items = list_category(&inventory, &key);
    Ok(Reply::embed(category_embed(&key, items)))
}

pub fn run_all(dispatcher: &Dispatcher, _invocation: &Invocation) -> Result<Reply> {
    let inventory = dispatcher.store().load()?;
    Ok(Reply::embed(summary_embed(&inventory)))
}

/// Numbered listing of one category.
pub fn category_embed(category: &CategoryKey, items: &[Item]) -> EmbedView {
    let color = if category.known() == Some(Category::OutOfStock) {
        COLOR_ALERT
    } else {
        COLOR_LISTING
    };
    let mut embed = EmbedView::new(
        format!("{} {}", category.emoji(), category_title(category.as_str())),
        color,
    )
    .description(format!("Available {category} items"));

    if items.is_empty() {
        embed = embed.field("No items available", "Check back later!", false);
    } else {
        for (idx, item) in items.iter().enumerate() {
            embed = embed.field(
                format!("#{} - {}", idx + 1, item.name),
                format!("{EMOJI_PRICE} {}", format_price(item.price)),
                true,
            );
        }
    }
    embed.footer(format!("Total items: {}", items.len()))
}

/// Aggregate view: non-empty categories with a short preview each.
pub fn summary_embed(inventory: &Inventory) -> EmbedView {
    let mut embed = EmbedView::new(format!("{EMOJI_STORE} All Available Items"), COLOR_SUMMARY)
        .description("Complete inventory");
    let mut total = 0;
    for row in list_all(inventory) {
        let mut lines: Vec<String> = row
            .preview
            .iter()
            .map(|item| format!("• {} - {}", item.name, format_price(item.price)))
            .collect();
        if row.hidden() > 0 {
            lines.push(format!("... and {} more", row.hidden()));
        }
        embed = embed.field(
            format!(
                "{} {} ({} items)",
                row.category.emoji(),
                category_title(row.category.as_str()),
                row.total
            ),
            lines.join("\n"),
            false,
        );
        total += row.total;
    }
    embed.footer(format!("Total items in stock: {total}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::inventory::add_item;

    #[test]
    fn empty_category_has_placeholder_field() {
        let embed = category_embed(&Category::Vpn.key(), &[]);
        assert_eq!(embed.title, "🔒 VPN");
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "No items available");
        assert_eq!(embed.footer.as_deref(), Some("Total items: 0"));
    }

    #[test]
    fn out_of_stock_is_red() {
        let embed = category_embed(&Category::OutOfStock.key(), &[]);
        assert_eq!(embed.color, COLOR_ALERT);
        assert_eq!(category_embed(&Category::Codes.key(), &[]).color, COLOR_LISTING);
    }

    #[test]
    fn listing_numbers_items_and_shows_tba() {
        let items = [Item::new("Steam Key", 0.0), Item::new("Steam Key", 19.99)];
        let embed = category_embed(&Category::Gaming.key(), &items);
        assert_eq!(embed.fields[0].name, "#1 - Steam Key");
        assert_eq!(embed.fields[0].value, "💰 Price TBA");
        assert_eq!(embed.fields[1].value, "💰 $19.99");
        assert!(embed.fields.iter().all(|f| f.inline));
    }

    #[test]
    fn summary_reports_overflow_and_total() {
        let mut inv = Inventory::with_default_categories();
        for i in 0..6 {
            inv = add_item(inv, Category::Streaming.key(), &format!("Show {i}"), 2.0);
        }
        let embed = summary_embed(&inv);
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "📺 STREAMING (6 items)");
        assert!(embed.fields[0].value.ends_with("... and 1 more"));
        assert_eq!(embed.footer.as_deref(), Some("Total items in stock: 6"));
    }
}
