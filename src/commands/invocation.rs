//! What a command receives: its name, typed arguments and facts about the caller.

use crate::constants::MIN_PRICE;
use crate::database::models::CategoryKey;
use crate::error::{InventoryError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Number(f64),
    Integer(i64),
}

/// The invoking principal, as reported by the transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caller {
    pub user_id: u64,
    /// Administrator capability in the current guild. Trusted as given.
    pub is_admin: bool,
}

impl Caller {
    pub fn admin(user_id: u64) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}

/// A custom emoji available where the command was invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildEmoji {
    pub name: String,
    /// Chat markup that renders the emoji, e.g. `<:wave:1234>`.
    pub mention: String,
}

#[derive(Debug, Clone)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<(String, ArgValue)>,
    pub caller: Caller,
    /// The guild's custom emojis, or why they could not be read.
    pub emojis: std::result::Result<Vec<GuildEmoji>, String>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, caller: Caller) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            caller,
            emojis: Ok(Vec::new()),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.args.push((name.into(), value));
        self
    }

    pub fn text_arg(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arg(name, ArgValue::Text(value.into()))
    }

    pub fn number_arg(self, name: impl Into<String>, value: f64) -> Self {
        self.arg(name, ArgValue::Number(value))
    }

    pub fn with_emojis(mut self, emojis: Vec<GuildEmoji>) -> Self {
        self.emojis = Ok(emojis);
        self
    }

    pub fn with_emoji_error(mut self, reason: impl Into<String>) -> Self {
        self.emojis = Err(reason.into());
        self
    }

    fn get(&self, key: &str) -> Option<&ArgValue> {
        self.args.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn text(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(ArgValue::Text(s)) => Ok(s.as_str()),
            Some(_) => Err(InventoryError::InvalidArgument(format!("`{key}` must be text"))),
            None => Err(missing(key)),
        }
    }

    pub fn number(&self, key: &str) -> Result<f64> {
        match self.get(key) {
            Some(ArgValue::Number(n)) => Ok(*n),
            Some(ArgValue::Integer(n)) => Ok(*n as f64),
            Some(ArgValue::Text(_)) => Err(InventoryError::InvalidArgument(format!(
                "`{key}` must be a number"
            ))),
            None => Err(missing(key)),
        }
    }

    /// The `category` argument, trimmed and lowercased.
    pub fn category(&self) -> Result<CategoryKey> {
        CategoryKey::parse(self.text("category")?).ok_or_else(|| {
            InventoryError::InvalidArgument("`category` must not be blank".to_string())
        })
    }

    /// The `name` argument, trimmed.
    pub fn item_name(&self) -> Result<&str> {
        let name = self.text("name")?.trim();
        if name.is_empty() {
            return Err(InventoryError::InvalidArgument(
                "`name` must not be blank".to_string(),
            ));
        }
        Ok(name)
    }

    /// A finite price of zero or at least one cent. `0` is the price-TBA sentinel.
    pub fn price(&self, key: &str) -> Result<f64> {
        let price = self.number(key)?;
        if !price.is_finite() || price < 0.0 {
            return Err(InventoryError::InvalidArgument(format!(
                "`{key}` must be zero or a positive amount"
            )));
        }
        if price > 0.0 && price < MIN_PRICE {
            return Err(InventoryError::InvalidArgument(format!(
                "`{key}` must be 0 (TBA) or at least {MIN_PRICE}"
            )));
        }
        Ok(price)
    }
}

fn missing(key: &str) -> InventoryError {
    InventoryError::InvalidArgument(format!("missing required option `{key}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_integers_and_zero() {
        let inv = Invocation::new("add", Caller::admin(1))
            .arg("price", ArgValue::Integer(4))
            .number_arg("new_price", 0.0);
        assert_eq!(inv.price("price").unwrap(), 4.0);
        assert_eq!(inv.price("new_price").unwrap(), 0.0);
    }

    #[test]
    fn price_rejects_negative_and_nan() {
        let inv = Invocation::new("add", Caller::admin(1))
            .number_arg("a", -0.01)
            .number_arg("b", f64::NAN);
        assert!(inv.price("a").is_err());
        assert!(inv.price("b").is_err());
        assert!(inv.price("c").is_err());
    }

    #[test]
    fn sub_cent_prices_are_rejected() {
        let inv = Invocation::new("edit", Caller::admin(1))
            .number_arg("tiny", 0.004)
            .number_arg("cent", 0.01);
        assert!(inv.price("tiny").is_err());
        assert_eq!(inv.price("cent").unwrap(), 0.01);
    }

    #[test]
    fn name_is_trimmed_and_required() {
        let inv = Invocation::new("add", Caller::admin(1)).text_arg("name", "  Steam Key ");
        assert_eq!(inv.item_name().unwrap(), "Steam Key");
        let blank = Invocation::new("add", Caller::admin(1)).text_arg("name", "   ");
        assert!(blank.item_name().is_err());
    }

    #[test]
    fn category_is_normalised() {
        let inv = Invocation::new("add", Caller::admin(1)).text_arg("category", " VPN ");
        assert_eq!(inv.category().unwrap().as_str(), "vpn");
    }
}
