// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the Posy storefront.
//!
//! Runs the storefront behind a Telegram bot via teloxide: long polling,
//! command and callback routing, inline keyboards, and MarkdownV2
//! rendering of storefront views.

pub mod delivery;
pub mod handler;
pub mod keyboard;
pub mod markdown;

use std::sync::Arc;

use async_trait::async_trait;
use posy_catalog::Storefront;
use posy_config::TelegramConfig;
use posy_core::error::PosyError;
use posy_core::traits::PluginAdapter;
use posy_core::types::{AdapterType, HealthStatus};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::handler::Command;

/// Telegram channel serving one [`Storefront`].
pub struct TelegramChannel {
    bot: Bot,
}

impl TelegramChannel {
    /// Creates a new Telegram channel adapter.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, PosyError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            PosyError::Config("telegram.bot_token is required to serve the bot".into())
        })?;

        if token.trim().is_empty() {
            return Err(PosyError::Config("telegram.bot_token cannot be empty".into()));
        }

        Ok(Self {
            bot: Bot::new(token),
        })
    }

    /// Polls for updates and answers them until Ctrl-C.
    pub async fn run(&self, storefront: Arc<Storefront>) -> Result<(), PosyError> {
        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!(error = %e, "failed to register bot commands");
        }

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(handler::on_command),
            )
            .branch(Update::filter_callback_query().endpoint(handler::on_callback));

        info!("starting Telegram long polling");
        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![storefront])
            .default_handler(|_| async {}) // Plain messages and other updates are ignored
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram polling stopped");
        Ok(())
    }
}

#[async_trait]
impl PluginAdapter for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, PosyError> {
        // Check if the bot token is valid by calling getMe.
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Telegram bot unreachable: {e}"
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), PosyError> {
        debug!("Telegram channel shutting down");
        Ok(())
    }
}
