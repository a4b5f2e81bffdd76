// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Price-bucket and tag predicates over a product list.
//!
//! Filters never fail: unknown keys, empty inputs, and malformed prices all
//! shrink the result instead of raising an error. Results keep the input
//! order, which the identifier shortener relies on for stable collision
//! resolution.

use posy_core::{FilterKey, PriceBucket, Product};
use tracing::debug;

use crate::normalize::normalize;
use crate::synonyms::normalized_targets;

/// Products carrying any tag equivalent to one of `key`'s surface forms.
pub fn filter_by_tag<'a>(products: &'a [Product], key: &str) -> Vec<&'a Product> {
    if products.is_empty() || key.trim().is_empty() {
        return Vec::new();
    }

    let targets = normalized_targets(key);
    products
        .iter()
        .filter(|product| {
            product
                .tag_list()
                .any(|tag| targets.contains(&normalize(tag)))
        })
        .collect()
}

/// Products whose price falls inside `bucket` (inclusive on both ends).
pub fn filter_by_price(products: &[Product], bucket: PriceBucket) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| match product.price_value() {
            Ok(price) => bucket.contains(price),
            Err(e) => {
                debug!(handle = %product.handle, error = %e, "excluding product from price filter");
                false
            }
        })
        .collect()
}

/// Applies `key`: price keys filter by bucket, all others by tag.
pub fn apply<'a>(products: &'a [Product], key: FilterKey) -> Vec<&'a Product> {
    match key.price_bucket() {
        Some(bucket) => filter_by_price(products, bucket),
        None => filter_by_tag(products, key.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use posy_test_utils::fixtures::{product, product_with_tags};
    use tracing_test::traced_test;

    use super::*;

    fn handles<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.handle.as_str()).collect()
    }

    #[test]
    fn valentine_matches_delimited_tag_string() {
        let products = vec![
            product_with_tags("classic-red", "80.00", &["Valentine's Day, roses"]),
            product_with_tags("party-mix", "60.00", &["birthday"]),
        ];
        assert_eq!(handles(&filter_by_tag(&products, "valentine")), vec!["classic-red"]);
    }

    #[test]
    fn tag_filter_matches_any_surface_form() {
        let products = vec![
            product_with_tags("a", "10", &["Get-Well"]),
            product_with_tags("b", "10", &["feel better", "lily"]),
            product_with_tags("c", "10", &["wellness"]),
        ];
        assert_eq!(handles(&filter_by_tag(&products, "getwell")), vec!["a", "b"]);
        assert_eq!(handles(&filter_by_tag(&products, "lilies")), vec!["b"]);
    }

    #[test]
    fn tag_filter_preserves_input_order() {
        let products = vec![
            product_with_tags("z", "10", &["rose"]),
            product_with_tags("a", "10", &["ROSES"]),
            product_with_tags("m", "10", &["tulip"]),
            product_with_tags("b", "10", &["Rose"]),
        ];
        assert_eq!(handles(&filter_by_tag(&products, "roses")), vec!["z", "a", "b"]);
    }

    #[test]
    fn tag_filter_on_empty_input_or_blank_key_is_empty() {
        assert!(filter_by_tag(&[], "roses").is_empty());
        let products = vec![product_with_tags("a", "10", &["", " "])];
        assert!(filter_by_tag(&products, "").is_empty());
        assert!(filter_by_tag(&products, "   ").is_empty());
    }

    #[test]
    fn unknown_tag_key_matches_verbatim() {
        let products = vec![
            product_with_tags("peony-cloud", "10", &["Peonies"]),
            product_with_tags("rose-box", "10", &["roses"]),
        ];
        assert_eq!(handles(&filter_by_tag(&products, "peonies")), vec!["peony-cloud"]);
    }

    #[test]
    fn under50_is_inclusive_at_fifty() {
        let products = vec![
            product("a", "49.99"),
            product("b", "50"),
            product("c", "50.01"),
        ];
        assert_eq!(handles(&filter_by_price(&products, PriceBucket::Under50)), vec!["a", "b"]);
    }

    #[test]
    fn fifty_belongs_to_two_buckets() {
        let products = vec![product("fifty", "50.00")];
        assert_eq!(filter_by_price(&products, PriceBucket::Under50).len(), 1);
        assert_eq!(filter_by_price(&products, PriceBucket::From50To150).len(), 1);
    }

    #[test]
    fn prices_between_buckets_fall_through() {
        let products = vec![product("gap-low", "150.50"), product("gap-high", "250.50")];
        for bucket in [
            PriceBucket::Under50,
            PriceBucket::From50To150,
            PriceBucket::From151To250,
            PriceBucket::Over250,
        ] {
            assert!(filter_by_price(&products, bucket).is_empty(), "{bucket:?}");
        }
    }

    #[traced_test]
    #[test]
    fn malformed_prices_are_excluded_and_logged() {
        let products = vec![
            product("ok", "20"),
            product("words", "twenty"),
            product("negative", "-5"),
            product("blank", ""),
        ];
        assert_eq!(handles(&filter_by_price(&products, PriceBucket::Under50)), vec!["ok"]);
        assert!(logs_contain("excluding product from price filter"));
    }

    #[test]
    fn apply_dispatches_on_key_kind() {
        let products = vec![
            product_with_tags("cheap-roses", "30", &["roses"]),
            product_with_tags("lux-orchid", "400", &["orchid"]),
        ];
        assert_eq!(handles(&apply(&products, FilterKey::Over250)), vec!["lux-orchid"]);
        assert_eq!(handles(&apply(&products, FilterKey::Roses)), vec!["cheap-roses"]);
        assert!(apply(&products, FilterKey::Wedding).is_empty());
    }
}
