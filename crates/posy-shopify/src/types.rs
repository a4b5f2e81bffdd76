// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Shopify Admin GraphQL API.

use posy_core::Product;
use serde::{Deserialize, Serialize};

/// A GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub variables: serde_json::Value,
}

/// A GraphQL response envelope. Shopify answers 200 even when the query
/// fails, reporting problems in `errors`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ShopData {
    pub shop: ShopNode,
}

#[derive(Debug, Deserialize)]
pub struct ShopNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Product fields selected by the catalog queries. Everything beyond the
/// handle and title is optional since each query selects a different subset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<ImageNode>,
    #[serde(default)]
    pub online_store_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_on_current_publication: Option<bool>,
    #[serde(default)]
    pub variants: Option<Connection<VariantNode>>,
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct VariantNode {
    pub price: String,
}

impl ProductNode {
    /// Active, published, and reachable on the online store.
    pub fn is_listed(&self) -> bool {
        self.status.as_deref() == Some("ACTIVE")
            && self.published_on_current_publication == Some(true)
            && self.online_store_url.is_some()
    }

    /// Converts to a [`Product`], taking the first variant's price.
    /// `None` when the product has no variant.
    pub fn into_product(self) -> Option<Product> {
        let price = self.variants?.into_nodes().next()?.price;
        Some(Product {
            handle: self.handle,
            title: self.title,
            description: self.description.unwrap_or_default(),
            price,
            tags: self.tags,
            online_store_url: self.online_store_url,
            image_url: self.featured_image.map(|image| image.url),
        })
    }
}
