// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product fixtures.

use posy_core::Product;

/// A published product with no tags. The title is derived from the handle.
pub fn product(handle: &str, price: &str) -> Product {
    Product {
        handle: handle.to_string(),
        title: title_from_handle(handle),
        description: format!("Fresh {handle} arrangement."),
        price: price.to_string(),
        tags: Vec::new(),
        online_store_url: Some(format!("https://shop.example/products/{handle}")),
        image_url: None,
    }
}

/// A published product carrying the given raw tags.
pub fn product_with_tags(handle: &str, price: &str, tags: &[&str]) -> Product {
    Product {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..product(handle, price)
    }
}

fn title_from_handle(handle: &str) -> String {
    handle
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
