// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the catalog, the storefront, and the adapters.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::PosyError;

/// Identifier for one conversation (a Telegram chat id, for example).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a [`PluginAdapter`](crate::traits::PluginAdapter).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    CatalogSource,
    Channel,
}

/// A product record as delivered by the catalog source.
///
/// The cache keeps read-only snapshots of these. `price` stays in its raw
/// backend form; use [`Product::price_value`] to parse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable storefront identifier (the Shopify handle). Unbounded length.
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Decimal price string, e.g. `"149.00"`.
    pub price: String,
    /// Raw tag strings. A single entry may hold a comma-delimited list.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub online_store_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Parses the price as a finite, non-negative number.
    pub fn price_value(&self) -> Result<f64, PosyError> {
        let malformed = || PosyError::MalformedPrice {
            handle: self.handle.clone(),
            raw: self.price.clone(),
        };
        let value: f64 = self.price.trim().parse().map_err(|_| malformed())?;
        if !value.is_finite() || value < 0.0 {
            return Err(malformed());
        }
        Ok(value)
    }

    /// Iterates over individual tags, splitting comma-delimited entries and
    /// dropping empty pieces.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: &str, tags: &[&str]) -> Product {
        Product {
            handle: "rose-box".into(),
            title: "Rose Box".into(),
            description: String::new(),
            price: price.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            online_store_url: None,
            image_url: None,
        }
    }

    #[test]
    fn price_value_parses_decimal_strings() {
        assert_eq!(product("49.99", &[]).price_value().unwrap(), 49.99);
        assert_eq!(product(" 120 ", &[]).price_value().unwrap(), 120.0);
    }

    #[test]
    fn price_value_rejects_garbage_negative_and_non_finite() {
        for raw in ["", "abc", "-1", "NaN", "inf"] {
            let err = product(raw, &[]).price_value().unwrap_err();
            assert!(matches!(err, PosyError::MalformedPrice { .. }), "{raw}");
        }
    }

    #[test]
    fn tag_list_splits_delimited_entries() {
        let p = product("1", &["Valentine's Day, roses", " ", "gift"]);
        let tags: Vec<&str> = p.tag_list().collect();
        assert_eq!(tags, vec!["Valentine's Day", "roses", "gift"]);
    }

    #[test]
    fn adapter_type_round_trips_through_strings() {
        use std::str::FromStr;
        for variant in [AdapterType::CatalogSource, AdapterType::Channel] {
            let parsed = AdapterType::from_str(&variant.to_string()).unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn product_deserializes_with_optional_fields_missing() {
        let json = r#"{"handle":"a","title":"A","price":"10.00"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.tags.is_empty());
        assert!(p.image_url.is_none());
    }
}
