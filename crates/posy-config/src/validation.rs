// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as positive TTLs, store names, and FAQ keys that fit in a callback payload.

use std::collections::HashSet;

use posy_core::CALLBACK_DATA_LIMIT;

use crate::diagnostic::ConfigError;
use crate::model::PosyConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Shopify caps a single products page at 250.
const MAX_PAGE_SIZE: u32 = 250;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns all collected validation errors (does not fail fast).
pub fn validate_config(config: &PosyConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if !LOG_LEVELS.contains(&config.bot.log_level.as_str()) {
        fail(format!(
            "bot.log_level `{}` must be one of {}",
            config.bot.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    if config.bot.currency.trim().is_empty() {
        fail("bot.currency must not be empty".to_string());
    }

    if let Some(token) = &config.telegram.bot_token
        && token.trim().is_empty()
    {
        fail("telegram.bot_token must not be empty when set".to_string());
    }

    if let Some(store) = &config.shopify.store
        && (store.is_empty()
            || !store
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-'))
    {
        fail(format!(
            "shopify.store `{store}` must be the store subdomain (letters, digits, hyphens)"
        ));
    }

    if config.shopify.api_version.trim().is_empty() {
        fail("shopify.api_version must not be empty".to_string());
    }

    if config.shopify.timeout_secs == 0 {
        fail("shopify.timeout_secs must be at least 1".to_string());
    }

    if config.shopify.page_size == 0 || config.shopify.page_size > MAX_PAGE_SIZE {
        fail(format!(
            "shopify.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
            config.shopify.page_size
        ));
    }

    if config.catalog.ttl_secs == 0 {
        fail("catalog.ttl_secs must be at least 1".to_string());
    }

    if config.catalog.max_sessions == 0 {
        fail("catalog.max_sessions must be at least 1".to_string());
    }

    if config.catalog.title_max_chars == 0 {
        fail("catalog.title_max_chars must be at least 1".to_string());
    }

    if let Some(number) = &config.contact.whatsapp_number
        && (number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()))
    {
        fail(format!(
            "contact.whatsapp_number `{number}` must contain digits only (international format, no +)"
        ));
    }

    let mut seen_keys = HashSet::new();
    for (i, entry) in config.faq.iter().enumerate() {
        let key = entry.key.trim();
        if key.is_empty() {
            fail(format!("faq[{i}].key must not be empty"));
            continue;
        }
        if key == "main" {
            fail(format!("faq[{i}].key `main` is reserved for the FAQ index"));
        }
        if "faq_".len() + key.len() > CALLBACK_DATA_LIMIT {
            fail(format!(
                "faq[{i}].key `{key}` is too long for a {CALLBACK_DATA_LIMIT}-byte callback payload"
            ));
        }
        if !seen_keys.insert(key) {
            fail(format!("duplicate faq key `{key}`"));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaqEntry;

    fn faq(key: &str) -> FaqEntry {
        FaqEntry {
            key: key.to_string(),
            question: "Q".to_string(),
            answer: "A".to_string(),
        }
    }

    fn messages(config: &PosyConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&PosyConfig::default()).is_ok());
    }

    #[test]
    fn zero_ttl_fails_validation() {
        let mut config = PosyConfig::default();
        config.catalog.ttl_secs = 0;
        assert!(messages(&config).iter().any(|m| m.contains("ttl_secs")));
    }

    #[test]
    fn bad_store_name_fails_validation() {
        let mut config = PosyConfig::default();
        config.shopify.store = Some("my shop.myshopify.com".into());
        assert!(messages(&config).iter().any(|m| m.contains("shopify.store")));
    }

    #[test]
    fn page_size_above_shopify_cap_fails() {
        let mut config = PosyConfig::default();
        config.shopify.page_size = 500;
        assert!(messages(&config).iter().any(|m| m.contains("page_size")));
    }

    #[test]
    fn whatsapp_number_must_be_digits() {
        let mut config = PosyConfig::default();
        config.contact.whatsapp_number = Some("+971 50 123".into());
        assert!(messages(&config).iter().any(|m| m.contains("whatsapp_number")));
    }

    #[test]
    fn faq_keys_are_unique_non_reserved_and_short() {
        let mut config = PosyConfig::default();
        config.faq = vec![faq("delivery"), faq("delivery"), faq("main"), faq(&"k".repeat(61))];
        let msgs = messages(&config);
        assert!(msgs.iter().any(|m| m.contains("duplicate faq key `delivery`")));
        assert!(msgs.iter().any(|m| m.contains("reserved")));
        assert!(msgs.iter().any(|m| m.contains("too long")));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = PosyConfig::default();
        config.bot.log_level = "verbose".into();
        config.catalog.max_sessions = 0;
        config.shopify.timeout_secs = 0;
        assert_eq!(messages(&config).len(), 3);
    }
}
