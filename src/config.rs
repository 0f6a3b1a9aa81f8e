//! Process configuration, read from the environment (after `.env`, if present).

use crate::constants::DEFAULT_INVENTORY_FILE;
use anyhow::{Context, Result};
use serenity::model::id::GuildId;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// Register commands to this guild only; global registration when unset.
    pub guild_id: Option<GuildId>,
    pub inventory_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get("DISCORD_TOKEN").context("Expected DISCORD_TOKEN in the environment.")?;
        let guild_id = get("GUILD_ID")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .map(GuildId::new)
                    .with_context(|| {
                        format!("GUILD_ID must be a valid non-zero number, got {raw:?}")
                    })
            })
            .transpose()?;
        let inventory_path = get("INVENTORY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_FILE));

        Ok(Self {
            token,
            guild_id,
            inventory_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let cfg = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();
        assert_eq!(cfg.token, "abc");
        assert!(cfg.guild_id.is_none());
        assert_eq!(cfg.inventory_path, PathBuf::from("inventory.json"));
    }

    #[test]
    fn token_is_required() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
        assert!(Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn guild_id_is_parsed_or_rejected() {
        let cfg = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("GUILD_ID", "123456789"),
            ("INVENTORY_FILE", "/data/stock.json"),
        ]))
        .unwrap();
        assert_eq!(cfg.guild_id, Some(GuildId::new(123456789)));
        assert_eq!(cfg.inventory_path, PathBuf::from("/data/stock.json"));

        let bad = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("GUILD_ID", "guild")]));
        assert!(bad.is_err());
    }
}
