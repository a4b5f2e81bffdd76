// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Posy storefront assistant.
//!
//! Holds the product model, the error type, the closed set of filter keys,
//! the typed interaction intents, and the adapter traits that the catalog,
//! Shopify, and Telegram crates build on.

pub mod error;
pub mod filter_key;
pub mod intent;
pub mod traits;
pub mod types;
pub mod view;

// Re-export key items at crate root for ergonomic imports.
pub use error::PosyError;
pub use filter_key::{Category, FilterKey, PriceBucket};
pub use intent::{CALLBACK_DATA_LIMIT, Intent, Navigation, PRODUCT_PREFIX};
pub use traits::{CatalogSource, PluginAdapter};
pub use types::{AdapterType, HealthStatus, Product, SessionId};
pub use view::{Button, ButtonAction, Delivery, Reply, Span, View};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posy_error_variants_render_messages() {
        let cases = [
            (PosyError::Config("x".into()), "configuration error: x"),
            (PosyError::source_unavailable("down"), "catalog source unavailable: down"),
            (PosyError::NotFound("rose".into()), "not found: rose"),
            (
                PosyError::MalformedPrice {
                    handle: "h".into(),
                    raw: "abc".into(),
                },
                "malformed price `abc` on product h",
            ),
            (PosyError::InvalidIntent("zz".into()), "invalid interaction payload: zz"),
            (PosyError::Internal("boom".into()), "internal error: boom"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn session_ids_compare_by_value() {
        let a = SessionId::from("42");
        assert_eq!(a, SessionId("42".into()));
        assert_eq!(a.to_string(), "42");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_catalog_source<T: CatalogSource>() {}
    }
}
