// Central constants for storage, listings and message limits.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";
pub const MIN_PRICE: f64 = 0.01; // smallest non-TBA price; prices show two decimals
pub const SUMMARY_PREVIEW_LIMIT: usize = 5; // items shown per category in `/all`
// Discord caps messages at 2000 chars; leave headroom for markup.
pub const EMOJI_LIST_INLINE_LIMIT: usize = 1900;
pub const EMOJI_LIST_FILENAME: &str = "emojis.txt";
