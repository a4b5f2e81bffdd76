// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./posy.toml` > `~/.config/posy/posy.toml` > `/etc/posy/posy.toml`
//! with environment variable overrides via `POSY_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PosyConfig;

/// Sections that accept `POSY_<SECTION>_<KEY>` environment overrides.
const ENV_SECTIONS: &[&str] = &["bot", "telegram", "shopify", "catalog", "contact"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/posy/posy.toml` (system-wide)
/// 3. `~/.config/posy/posy.toml` (user XDG config)
/// 4. `./posy.toml` (local directory)
/// 5. `POSY_*` environment variables
pub fn load_config() -> Result<PosyConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PosyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PosyConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PosyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PosyConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PosyConfig::default()))
        .merge(Toml::file("/etc/posy/posy.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("posy/posy.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("posy.toml"))
        .merge(env_provider())
}

/// Environment provider mapping `POSY_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `POSY_SHOPIFY_ACCESS_TOKEN` must become
/// `shopify.access_token`, not `shopify.access.token`. Figment hands the
/// key over in its original case.
fn env_provider() -> Env {
    Env::prefixed("POSY_").map(|key| {
        let key_str = key.as_str().to_ascii_lowercase();
        ENV_SECTIONS
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or(key_str)
            .into()
    })
}
