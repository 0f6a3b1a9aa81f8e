//! Transport-neutral reply model.
//!
//! Command handlers build a [`Reply`]; the Discord handler turns it into
//! serenity builders. Keeping the two apart lets the dispatcher be exercised
//! without a gateway connection.

use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmbedView {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl EmbedView {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn to_create_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().title(&self.title).color(self.color);
        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        for f in &self.fields {
            embed = embed.field(&f.name, &f.value, f.inline);
        }
        if let Some(footer) = &self.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        embed
    }
}

/// A file delivered alongside the reply. The backing temp file is removed
/// when this value is dropped.
#[derive(Debug)]
pub struct ReplyFile {
    pub filename: String,
    pub file: NamedTempFile,
}

#[derive(Debug, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<EmbedView>,
    pub attachment: Option<ReplyFile>,
    /// Only the invoker sees ephemeral replies.
    pub ephemeral: bool,
}

impl Reply {
    pub fn embed(embed: EmbedView) -> Self {
        Self {
            embed: Some(embed),
            ..Self::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// A plain-text reply only the invoker can see.
    pub fn private(content: impl Into<String>) -> Self {
        Self::text(content).ephemeral()
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn with_attachment(mut self, attachment: ReplyFile) -> Self {
        self.attachment = Some(attachment);
        self
    }
}
