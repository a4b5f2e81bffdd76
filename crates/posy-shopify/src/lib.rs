// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shopify catalog source for the Posy storefront.
//!
//! Implements [`CatalogSource`] over the Shopify Admin GraphQL API: the
//! active product list, single-product lookups by handle, and tag-based
//! suggestions.

pub mod client;
pub mod queries;
pub mod types;

use async_trait::async_trait;
use posy_config::ShopifyConfig;
use posy_core::error::PosyError;
use posy_core::traits::{CatalogSource, PluginAdapter};
use posy_core::types::{AdapterType, HealthStatus, Product};
use serde_json::json;
use tracing::{debug, info};

use crate::client::ShopifyClient;
use crate::types::{ProductsData, ShopData};

/// Extra search results requested for suggestions, since inactive and
/// unpublished matches are dropped after the query.
const SUGGESTION_HEADROOM: usize = 2;

/// Shopify-backed catalog source.
pub struct ShopifySource {
    client: ShopifyClient,
    page_size: u32,
}

impl ShopifySource {
    /// Creates a source from configuration. Fails when the store or token
    /// is missing.
    pub fn new(config: &ShopifyConfig) -> Result<Self, PosyError> {
        let client = ShopifyClient::new(config)?;
        info!(endpoint = client.endpoint(), "Shopify catalog source initialized");
        Ok(Self {
            client,
            page_size: config.page_size,
        })
    }

    /// Creates a source with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: ShopifyClient, page_size: u32) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl PluginAdapter for ShopifySource {
    fn name(&self) -> &str {
        "shopify"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::CatalogSource
    }

    async fn health_check(&self) -> Result<HealthStatus, PosyError> {
        match self
            .client
            .query::<ShopData>(queries::SHOP_NAME, serde_json::Value::Null)
            .await
        {
            Ok(data) => {
                debug!(shop = %data.shop.name, "Shopify health check passed");
                Ok(HealthStatus::Healthy)
            }
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), PosyError> {
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for ShopifySource {
    async fn fetch_active_products(&self) -> Result<Vec<Product>, PosyError> {
        let data: ProductsData = self
            .client
            .query(queries::ACTIVE_PRODUCTS, json!({ "first": self.page_size }))
            .await?;

        let mut skipped = 0usize;
        let products: Vec<Product> = data
            .products
            .into_nodes()
            .filter_map(|node| {
                let handle = node.handle.clone();
                let product = node.into_product();
                if product.is_none() {
                    debug!(handle = %handle, "skipping product without a variant price");
                    skipped += 1;
                }
                product
            })
            .collect();

        info!(count = products.len(), skipped, "fetched active products");
        Ok(products)
    }

    async fn fetch_by_identifier(&self, handle: &str) -> Result<Option<Product>, PosyError> {
        let data: ProductsData = self
            .client
            .query(
                queries::SEARCH_PRODUCTS,
                json!({ "first": 1, "query": queries::handle_query(handle) }),
            )
            .await?;

        // Search is fuzzy; only an exact handle counts.
        Ok(data
            .products
            .into_nodes()
            .find(|node| node.handle == handle)
            .and_then(|node| node.into_product()))
    }

    async fn fetch_by_tags(
        &self,
        tags: &[String],
        exclude_handle: &str,
        limit: usize,
    ) -> Result<Vec<Product>, PosyError> {
        if tags.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let search = queries::tag_query(tags);
        debug!(query = %search, "fetching similar products");
        let data: ProductsData = self
            .client
            .query(
                queries::SEARCH_PRODUCTS,
                json!({ "first": limit + SUGGESTION_HEADROOM, "query": search }),
            )
            .await?;

        let similar: Vec<Product> = data
            .products
            .into_nodes()
            .filter(|node| node.handle != exclude_handle && node.is_listed())
            .filter_map(|node| node.into_product())
            .take(limit)
            .collect();
        if similar.is_empty() {
            debug!(exclude_handle, "no similar products found");
        }
        Ok(similar)
    }
}
