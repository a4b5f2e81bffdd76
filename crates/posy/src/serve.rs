// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `posy serve` command implementation.
//!
//! Wires the catalog source, the per-session cache, and the storefront
//! behind the Telegram channel, then polls until Ctrl-C.

use std::sync::Arc;

use posy_catalog::{CatalogCache, Storefront};
use posy_config::PosyConfig;
use posy_core::PosyError;
use posy_core::{CatalogSource, HealthStatus, PluginAdapter};
use tracing::{info, warn};

#[cfg(feature = "shopify")]
use posy_shopify::ShopifySource;

#[cfg(feature = "telegram")]
use posy_telegram::TelegramChannel;

/// Runs the `posy serve` command.
pub async fn run_serve(config: PosyConfig) -> Result<(), PosyError> {
    init_tracing(&config.bot.log_level);

    let config = Arc::new(config);
    let storefront = Arc::new(build_storefront(config.clone()).await?);
    info!(
        shop = %config.bot.shop_name,
        products_enabled = storefront.is_enabled(),
        "storefront ready"
    );

    serve_telegram(&config, storefront).await
}

#[cfg(feature = "telegram")]
async fn serve_telegram(config: &PosyConfig, storefront: Arc<Storefront>) -> Result<(), PosyError> {
    let channel = TelegramChannel::new(&config.telegram)?;
    if let HealthStatus::Unhealthy(reason) = channel.health_check().await? {
        warn!(reason = %reason, "Telegram health check failed");
    }
    channel.run(storefront.clone()).await?;

    if let Some(cache) = storefront.cache() {
        cache.source().shutdown().await?;
    }
    channel.shutdown().await
}

#[cfg(not(feature = "telegram"))]
async fn serve_telegram(_config: &PosyConfig, _storefront: Arc<Storefront>) -> Result<(), PosyError> {
    Err(PosyError::Config(
        "this build has no Telegram support; rebuild with the `telegram` feature".into(),
    ))
}

/// Builds the storefront, with product browsing enabled only when a
/// catalog source is configured and compiled in.
pub async fn build_storefront(config: Arc<PosyConfig>) -> Result<Storefront, PosyError> {
    let cache = match catalog_source(&config)? {
        Some(source) => {
            match source.health_check().await? {
                HealthStatus::Healthy => info!(source = source.name(), "catalog source healthy"),
                HealthStatus::Degraded(reason) | HealthStatus::Unhealthy(reason) => {
                    warn!(source = source.name(), reason = %reason, "catalog source unhealthy, serving cached or empty results");
                }
            }
            Some(Arc::new(CatalogCache::new(source, &config.catalog)))
        }
        None => {
            warn!("Shopify configuration incomplete - product features disabled");
            None
        }
    };
    Ok(Storefront::new(config, cache))
}

/// The configured catalog source, or `None` when product browsing is off.
pub fn catalog_source(config: &PosyConfig) -> Result<Option<Arc<dyn CatalogSource>>, PosyError> {
    if !config.shopify.is_enabled() {
        return Ok(None);
    }

    #[cfg(feature = "shopify")]
    {
        let source: Arc<dyn CatalogSource> = Arc::new(ShopifySource::new(&config.shopify)?);
        Ok(Some(source))
    }

    #[cfg(not(feature = "shopify"))]
    {
        warn!("Shopify is configured but this build has no Shopify support");
        Ok(None)
    }
}

/// Initializes the tracing subscriber with an env filter.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("posy={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
