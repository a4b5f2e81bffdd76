// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog source trait for commerce backends.

use async_trait::async_trait;

use crate::error::PosyError;
use crate::traits::adapter::PluginAdapter;
use crate::types::Product;

/// Supplies raw product records on demand.
///
/// Implementations enforce their own request timeout; callers never wait on
/// a source without bound. Every failure is reported as
/// [`PosyError::SourceUnavailable`].
#[async_trait]
pub trait CatalogSource: PluginAdapter {
    /// Fetches the bounded list of active products, in backend order.
    async fn fetch_active_products(&self) -> Result<Vec<Product>, PosyError>;

    /// Fetches one product by its handle. `Ok(None)` when it does not exist.
    async fn fetch_by_identifier(&self, handle: &str) -> Result<Option<Product>, PosyError>;

    /// Fetches up to `limit` published products sharing any of `tags`,
    /// never including `exclude_handle`.
    async fn fetch_by_tags(
        &self,
        tags: &[String],
        exclude_handle: &str,
        limit: usize,
    ) -> Result<Vec<Product>, PosyError>;
}
