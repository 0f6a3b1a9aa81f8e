use std::sync::Arc;

use anyhow::Context as _;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopkeeper_bot::AppState;
use shopkeeper_bot::commands::Dispatcher;
use shopkeeper_bot::config::Config;
use shopkeeper_bot::database::InventoryStore;
use shopkeeper_bot::handler::Handler;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;

    let store = InventoryStore::new(&config.inventory_path);
    // A store we cannot create or read is fatal at startup.
    let inventory = store.load().with_context(|| {
        format!(
            "failed to open inventory at {}",
            config.inventory_path.display()
        )
    })?;
    info!(
        path = %config.inventory_path.display(),
        categories = inventory.category_count(),
        items = inventory.total_items(),
        "inventory_ready"
    );

    let app_state = Arc::new(AppState::new(Dispatcher::new(store)));

    // Slash commands arrive with GUILDS; emoji listing reads guild emojis over HTTP.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler::new(config.guild_id, app_state))
        .await
        .context("Error creating the Discord client.")?;

    client.start().await.context("Client error")?;
    Ok(())
}
