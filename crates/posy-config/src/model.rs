// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Posy storefront assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Posy configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PosyConfig {
    /// Bot identity and presentation settings.
    #[serde(default)]
    pub bot: BotConfig,

    /// Telegram bot integration settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Shopify catalog backend settings.
    #[serde(default)]
    pub shopify: ShopifyConfig,

    /// Catalog cache and listing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Links shown on menus and product pages.
    #[serde(default)]
    pub contact: ContactConfig,

    /// FAQ topics, in menu order.
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Bot identity and presentation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Shop name used in greetings.
    #[serde(default = "default_shop_name")]
    pub shop_name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Currency code prefixed to prices and price labels.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            shop_name: default_shop_name(),
            log_level: default_log_level(),
            currency: default_currency(),
        }
    }
}

fn default_shop_name() -> String {
    "Prosto Flowers".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    "AED".to_string()
}

/// Telegram bot integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. Required by `posy serve`.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// Shopify Admin GraphQL configuration.
///
/// Product features are disabled unless both `store` and `access_token` are set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShopifyConfig {
    /// Store subdomain, the `<store>` in `<store>.myshopify.com`.
    #[serde(default)]
    pub store: Option<String>,

    /// Admin API access token.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Admin API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of active products fetched per catalog snapshot.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store: None,
            access_token: None,
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl ShopifyConfig {
    /// Whether both the store and the access token are configured.
    pub fn is_enabled(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.store) && set(&self.access_token)
    }

    /// Public storefront base URL, e.g. `https://my-shop.myshopify.com`.
    pub fn storefront_url(&self) -> Option<String> {
        self.store
            .as_deref()
            .map(|store| format!("https://{store}.myshopify.com"))
    }

    /// Admin GraphQL endpoint for the configured store and API version.
    pub fn graphql_url(&self) -> Option<String> {
        self.storefront_url()
            .map(|base| format!("{base}/admin/api/{}/graphql.json", self.api_version))
    }
}

fn default_api_version() -> String {
    "2025-07".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> u32 {
    250
}

/// Catalog cache and listing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Seconds a session's catalog snapshot stays fresh.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of sessions holding a snapshot at once.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Number of "You Might Also Like" suggestions on a product page.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,

    /// Characters of a product title kept on a list button.
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_sessions: default_max_sessions(),
            similar_limit: default_similar_limit(),
            title_max_chars: default_title_max_chars(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    600
}

fn default_max_sessions() -> usize {
    1000
}

fn default_similar_limit() -> usize {
    3
}

fn default_title_max_chars() -> usize {
    25
}

/// External contact links.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Instagram account name, without the `@`.
    #[serde(default)]
    pub instagram_username: Option<String>,

    /// WhatsApp number in international format, digits only.
    #[serde(default)]
    pub whatsapp_number: Option<String>,
}

/// One FAQ topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    /// Short identifier used in callback payloads.
    pub key: String,
    /// Button label and answer heading.
    pub question: String,
    pub answer: String,
}
