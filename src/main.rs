mod config;
mod content;
mod models;
mod providers;
mod services;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use providers::gemini::GeminiBackend;
use providers::AssistantGateway;
use services::{ChatController, ConversationStore, Preferences, Storage};
use ui::Repl;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let storage = Storage::open().await?;
    let preferences = Preferences::load(&storage).await;

    // Checked once; a missing key degrades the assistant, never the app.
    let api_key = std::env::var(config::API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty());
    if api_key.is_none() {
        tracing::warn!(
            "{} is not set; the assistant will reply with a connection apology",
            config::API_KEY_ENV
        );
    }

    let gateway = AssistantGateway::new(
        Arc::new(GeminiBackend::new()),
        api_key,
        content::profile::assistant_instruction(),
    );
    let assistant_ready = gateway.has_credentials();

    let store = ConversationStore::restore(storage.clone()).await;
    let controller = ChatController::new(store, gateway);

    Repl::new(controller, preferences, storage, assistant_ready)
        .run()
        .await
}
