use crate::commands::{ArgValue, Caller, GuildEmoji, Invocation};
use crate::model::AppState;
use crate::ui::reply::Reply;
use crate::ui::style::EMOJI_ERR;
use serenity::async_trait;
use serenity::builder::{
    CreateAttachment, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::client::Context;
use serenity::model::application::{
    Command, CommandDataOptionValue, CommandInteraction, Interaction,
};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct Handler {
    /// Guild for command registration; `None` registers globally.
    pub guild_id: Option<GuildId>,
    pub state: Arc<AppState>,
}

impl Handler {
    pub fn new(guild_id: Option<GuildId>, state: Arc<AppState>) -> Self {
        Self { guild_id, state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let invocation = build_invocation(&ctx, &command).await;
        let dispatcher = self.state.dispatcher.clone();
        // Store access is blocking file I/O; keep it off the gateway tasks.
        let reply = match tokio::task::spawn_blocking(move || dispatcher.dispatch(&invocation))
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                error!(command = %command.data.name, error = %e, "dispatch_task_failed");
                Reply::private(format!(
                    "{EMOJI_ERR} Something went wrong while running this command."
                ))
            }
        };
        deliver(&ctx, &command, reply).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected");
        let commands = self.state.dispatcher.table().create_commands();
        let count = commands.len();
        let result = match self.guild_id {
            Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
            None => Command::set_global_commands(&ctx.http, commands).await,
        };
        match result {
            Ok(_) => info!(count, guild = ?self.guild_id, "commands_registered"),
            Err(e) => error!(error = ?e, "command_registration_failed"),
        }
    }
}

/// Translates a slash command into the transport-neutral invocation.
async fn build_invocation(ctx: &Context, command: &CommandInteraction) -> Invocation {
    let is_admin = command
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .is_some_and(|p| p.administrator());
    let caller = Caller {
        user_id: command.user.id.get(),
        is_admin,
    };

    let mut invocation = Invocation::new(command.data.name.clone(), caller);
    for option in &command.data.options {
        let value = match &option.value {
            CommandDataOptionValue::String(s) => ArgValue::Text(s.clone()),
            CommandDataOptionValue::Number(n) => ArgValue::Number(*n),
            CommandDataOptionValue::Integer(n) => ArgValue::Integer(*n),
            _ => continue,
        };
        invocation = invocation.arg(option.name.clone(), value);
    }

    // Only fetched for callers who will pass the gate.
    if command.data.name != "list_emojis" || !is_admin {
        return invocation;
    }
    let Some(guild_id) = command.guild_id else {
        return invocation.with_emoji_error("command used outside a server");
    };
    match guild_id.emojis(&ctx.http).await {
        Ok(emojis) => {
            let emojis = emojis
                .iter()
                .map(|e| GuildEmoji {
                    name: e.name.clone(),
                    mention: e.to_string(),
                })
                .collect();
            invocation.with_emojis(emojis)
        }
        Err(e) => {
            warn!(guild = %guild_id, error = ?e, "emoji_fetch_failed");
            invocation.with_emoji_error(e.to_string())
        }
    }
}

async fn deliver(ctx: &Context, command: &CommandInteraction, reply: Reply) {
    let mut message = CreateInteractionResponseMessage::new().ephemeral(reply.ephemeral);
    if let Some(content) = &reply.content {
        message = message.content(content);
    }
    if let Some(embed) = &reply.embed {
        message = message.embed(embed.to_create_embed());
    }
    if let Some(attachment) = &reply.attachment {
        match tokio::fs::read(attachment.file.path()).await {
            Ok(bytes) => {
                message = message.add_file(CreateAttachment::bytes(bytes, &attachment.filename));
            }
            Err(e) => warn!(error = %e, "attachment_read_failed"),
        }
    }
    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        error!(command = %command.data.name, error = ?e, "response_failed");
    }
    // Dropping the reply removes any temp attachment file.
    drop(reply);
}
