// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `posy check-config` and `posy probe` command implementations.

use posy_config::PosyConfig;
use posy_core::{PluginAdapter, PosyError};

use crate::serve::catalog_source;

/// Prints a summary of the validated configuration.
pub fn run_check_config(config: &PosyConfig) {
    println!("{}", summarize(config));
}

fn summarize(config: &PosyConfig) -> String {
    let on_off = |enabled: bool| if enabled { "enabled" } else { "disabled" };
    let mut lines = vec![
        "Configuration OK".to_string(),
        format!("  shop:       {}", config.bot.shop_name),
        format!("  currency:   {}", config.bot.currency),
        format!("  log level:  {}", config.bot.log_level),
        format!(
            "  telegram:   {}",
            if config.telegram.bot_token.is_some() { "token set" } else { "no token" }
        ),
        format!("  products:   {}", on_off(config.shopify.is_enabled())),
    ];
    if let Some(url) = config.shopify.graphql_url() {
        lines.push(format!("  endpoint:   {url}"));
    }
    lines.push(format!(
        "  cache:      {}s ttl, {} sessions max",
        config.catalog.ttl_secs, config.catalog.max_sessions
    ));
    lines.push(format!(
        "  instagram:  {}",
        config.contact.instagram_username.as_deref().unwrap_or("-")
    ));
    lines.push(format!(
        "  whatsapp:   {}",
        config.contact.whatsapp_number.as_deref().unwrap_or("-")
    ));
    lines.push(format!("  faq:        {} entries", config.faq.len()));
    lines.join("\n")
}

/// Fetches one product by handle and prints it as JSON.
pub async fn run_probe(config: &PosyConfig, handle: &str) -> Result<(), PosyError> {
    let source = catalog_source(config)?.ok_or_else(|| {
        PosyError::Config("shopify.store and shopify.access_token must both be set".into())
    })?;

    let product = source.fetch_by_identifier(handle).await?;
    source.shutdown().await?;

    match product {
        Some(product) => {
            let json = serde_json::to_string_pretty(&product)
                .map_err(|e| PosyError::Internal(format!("failed to render product: {e}")))?;
            println!("{json}");
            Ok(())
        }
        None => Err(PosyError::NotFound(format!("product `{handle}`"))),
    }
}
