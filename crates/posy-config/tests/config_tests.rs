// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Posy configuration system.

use posy_config::diagnostic::{ConfigError, suggest_key};
use posy_config::model::PosyConfig;
use posy_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known sections deserializes successfully.
#[test]
fn valid_toml_deserializes_into_posy_config() {
    let toml = r#"
[bot]
shop_name = "Test Florist"
log_level = "debug"
currency = "USD"

[telegram]
bot_token = "123:ABC"

[shopify]
store = "test-florist"
access_token = "shpat_abc"
api_version = "2024-10"
timeout_secs = 5
page_size = 100

[catalog]
ttl_secs = 60
max_sessions = 10
similar_limit = 4
title_max_chars = 30

[contact]
instagram_username = "testflorist"
whatsapp_number = "971500000000"

[[faq]]
key = "delivery"
question = "Do you deliver?"
answer = "Same day across the city."

[[faq]]
key = "care"
question = "How do I care for my bouquet?"
answer = "Fresh water daily."
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should load");
    assert_eq!(config.bot.shop_name, "Test Florist");
    assert_eq!(config.bot.currency, "USD");
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert!(config.shopify.is_enabled());
    assert_eq!(
        config.shopify.graphql_url().as_deref(),
        Some("https://test-florist.myshopify.com/admin/api/2024-10/graphql.json")
    );
    assert_eq!(config.catalog.ttl_secs, 60);
    assert_eq!(config.catalog.similar_limit, 4);
    assert_eq!(config.contact.instagram_username.as_deref(), Some("testflorist"));
    assert_eq!(config.faq.len(), 2);
    assert_eq!(config.faq[1].key, "care");
}

/// Empty TOML yields defaults and leaves product features disabled.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("empty config is valid");
    assert_eq!(config.bot.shop_name, "Prosto Flowers");
    assert_eq!(config.bot.currency, "AED");
    assert_eq!(config.catalog.ttl_secs, 600);
    assert_eq!(config.catalog.similar_limit, 3);
    assert_eq!(config.catalog.title_max_chars, 25);
    assert_eq!(config.shopify.page_size, 250);
    assert!(!config.shopify.is_enabled());
    assert!(config.faq.is_empty());
}

/// Store without a token is not enough to enable product browsing.
#[test]
fn shopify_requires_store_and_token() {
    let config = load_config_from_str("[shopify]\nstore = \"shop\"\n").unwrap();
    assert!(!config.shopify.is_enabled());
    assert!(config.shopify.storefront_url().is_some());
}

#[test]
fn unknown_field_in_catalog_produces_error() {
    let toml = r#"
[catalog]
ttl_sec = 60
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("ttl_sec"),
        "error should mention the bad key, got: {err_str}"
    );
}

/// Typos are converted into UnknownKey diagnostics with a suggestion.
#[test]
fn typo_produces_unknown_key_with_suggestion() {
    let toml = r#"
[shopify]
acess_token = "abc"
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should fail");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey {
                key, suggestion, ..
            } => Some((key.clone(), suggestion.clone())),
            _ => None,
        })
        .expect("expected an UnknownKey diagnostic");
    assert_eq!(unknown.0, "acess_token");
    assert_eq!(unknown.1.as_deref(), Some("access_token"));
}

#[test]
fn unknown_key_in_faq_table_array_is_reported() {
    let toml = r#"
[[faq]]
key = "delivery"
questoin = "Do you deliver?"
answer = "Yes"
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "questoin"))
    );
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[catalog]\nttl_secs = \"ten\"\n")
        .expect_err("string for integer should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. }))
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_through_load_and_validate() {
    let toml = r#"
[catalog]
ttl_secs = 0

[[faq]]
key = "main"
question = "?"
answer = "!"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

#[test]
fn suggest_key_matches_close_names() {
    let valid = ["instagram_username", "whatsapp_number"];
    assert_eq!(
        suggest_key("instagram_usrname", &valid).as_deref(),
        Some("instagram_username")
    );
    assert_eq!(suggest_key("zzz", &valid), None);
}

#[test]
fn config_round_trips_through_toml() {
    let config = PosyConfig::default();
    let rendered = toml::to_string(&config).expect("serialize");
    let reparsed = load_config_from_str(&rendered).expect("reparse");
    assert_eq!(reparsed.bot.shop_name, config.bot.shop_name);
    assert_eq!(reparsed.catalog.ttl_secs, config.catalog.ttl_secs);
}

#[test]
fn shipped_example_config_validates() {
    let example = include_str!("../../../posy.example.toml");
    let config = load_and_validate_str(example).expect("example config should validate");
    assert_eq!(config.bot.currency, "AED");
    assert!(!config.shopify.is_enabled());
    let keys: Vec<&str> = config.faq.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["delivery", "payment", "care", "contact"]);
}
