//! `/list_emojis`: the guild's custom emoji markup, for pasting into item names.
//! Does not touch the inventory.

use super::dispatcher::Dispatcher;
use super::invocation::{GuildEmoji, Invocation};
use crate::constants::{EMOJI_LIST_FILENAME, EMOJI_LIST_INLINE_LIMIT};
use crate::error::{InventoryError, Result};
use crate::ui::reply::{EmbedView, Reply, ReplyFile};
use crate::ui::style::COLOR_SUCCESS;
use std::io::Write;
use tracing::debug;

pub fn run_list(_dispatcher: &Dispatcher, invocation: &Invocation) -> Result<Reply> {
    let emojis = invocation
        .emojis
        .as_ref()
        .map_err(|why| InventoryError::EmojiUnavailable(why.clone()))?;
    if emojis.is_empty() {
        return Ok(Reply::private("This server has no custom emojis."));
    }

    let listing = render_listing(emojis);
    if listing.chars().count() <= EMOJI_LIST_INLINE_LIMIT {
        let embed = EmbedView::new("Custom Server Emojis", COLOR_SUCCESS).description(listing);
        return Ok(Reply::embed(embed));
    }

    debug!(count = emojis.len(), "emoji_list_as_attachment");
    let attachment = write_attachment(emojis).map_err(InventoryError::Attachment)?;
    Ok(
        Reply::text("The list is too long, so I've attached it as a file:")
            .with_attachment(attachment),
    )
}

/// Markdown lines shown inline: `**name**: `<:name:id>``.
pub fn render_listing(emojis: &[GuildEmoji]) -> String {
    emojis
        .iter()
        .map(|e| format!("**{}**: `{}`", e.name, e.mention))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain lines for the file variant. The temp file is deleted when the
/// returned value is dropped, i.e. right after the reply is sent.
fn write_attachment(emojis: &[GuildEmoji]) -> std::io::Result<ReplyFile> {
    let mut file = tempfile::Builder::new()
        .prefix("emojis-")
        .suffix(".txt")
        .tempfile()?;
    let body = emojis
        .iter()
        .map(|e| format!("{}: {}", e.name, e.mention))
        .collect::<Vec<_>>()
        .join("\n");
    file.write_all(body.as_bytes())?;
    file.flush()?;
    Ok(ReplyFile {
        filename: EMOJI_LIST_FILENAME.to_string(),
        file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(i: usize) -> GuildEmoji {
        GuildEmoji {
            name: format!("emoji_{i}"),
            mention: format!("<:emoji_{i}:{}>", 100_000_000_000_000_000u64 + i as u64),
        }
    }

    #[test]
    fn listing_format() {
        let text = render_listing(&[emoji(1), emoji(2)]);
        assert_eq!(
            text,
            "**emoji_1**: `<:emoji_1:100000000000000001>`\n**emoji_2**: `<:emoji_2:100000000000000002>`"
        );
    }
}
