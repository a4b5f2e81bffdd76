// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock catalog source for deterministic testing.
//!
//! `MockCatalogSource` implements `CatalogSource` over an in-memory product
//! list, counts fetches, and can be switched into a failing mode to exercise
//! degraded paths. Outcomes queued with `queue_fetch` are served first, one
//! per `fetch_active_products` call.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use posy_core::traits::{CatalogSource, PluginAdapter};
use posy_core::types::{AdapterType, HealthStatus, Product};
use posy_core::PosyError;

/// An in-memory catalog source.
///
/// Tag lookups match raw tag strings exactly, the way the backend's tag
/// search does.
pub struct MockCatalogSource {
    products: Arc<Mutex<Vec<Product>>>,
    queued: Mutex<VecDeque<Result<Vec<Product>, PosyError>>>,
    failing: AtomicBool,
    fetches: AtomicUsize,
    lookups: AtomicUsize,
}

impl MockCatalogSource {
    /// Create an empty mock catalog.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a mock catalog pre-loaded with products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
            queued: Mutex::new(VecDeque::new()),
            failing: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Replace the catalog contents.
    pub async fn set_products(&self, products: Vec<Product>) {
        *self.products.lock().await = products;
    }

    /// Queue an outcome for `fetch_active_products`. Queued outcomes are
    /// served in order before the failure switch or the product list apply.
    pub async fn queue_fetch(&self, outcome: Result<Vec<Product>, PosyError>) {
        self.queued.lock().await.push_back(outcome);
    }

    /// When set, every fetch returns `PosyError::SourceUnavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `fetch_active_products` calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of `fetch_by_identifier` calls so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), PosyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PosyError::source_unavailable("mock catalog is failing"));
        }
        Ok(())
    }
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockCatalogSource {
    fn name(&self) -> &str {
        "mock-catalog"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::CatalogSource
    }

    async fn health_check(&self) -> Result<HealthStatus, PosyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Ok(HealthStatus::Unhealthy("mock catalog is failing".into()));
        }
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PosyError> {
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_active_products(&self) -> Result<Vec<Product>, PosyError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(outcome) = self.queued.lock().await.pop_front() {
            return outcome;
        }
        self.check_available()?;
        Ok(self.products.lock().await.clone())
    }

    async fn fetch_by_identifier(&self, handle: &str) -> Result<Option<Product>, PosyError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self
            .products
            .lock()
            .await
            .iter()
            .find(|p| p.handle == handle)
            .cloned())
    }

    async fn fetch_by_tags(
        &self,
        tags: &[String],
        exclude_handle: &str,
        limit: usize,
    ) -> Result<Vec<Product>, PosyError> {
        self.check_available()?;
        Ok(self
            .products
            .lock()
            .await
            .iter()
            .filter(|p| p.handle != exclude_handle && p.online_store_url.is_some())
            .filter(|p| p.tag_list().any(|t| tags.iter().any(|want| want == t)))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{product, product_with_tags};

    #[tokio::test]
    async fn counts_fetches_and_fails_on_demand() {
        let mock = MockCatalogSource::with_products(vec![product("a", "1")]);
        assert_eq!(mock.fetch_active_products().await.unwrap().len(), 1);
        mock.set_failing(true);
        assert!(mock.fetch_active_products().await.is_err());
        assert_eq!(mock.fetch_count(), 2);
        assert!(matches!(
            mock.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
    }

    #[tokio::test]
    async fn queued_outcomes_are_served_in_order() {
        let mock = MockCatalogSource::with_products(vec![product("a", "1")]);
        mock.queue_fetch(Err(PosyError::source_unavailable("timeout"))).await;
        mock.queue_fetch(Ok(vec![product("b", "2"), product("c", "3")])).await;

        assert!(mock.fetch_active_products().await.is_err());
        assert_eq!(mock.fetch_active_products().await.unwrap().len(), 2);
        let fallback = mock.fetch_active_products().await.unwrap();
        assert_eq!(fallback[0].handle, "a");
        assert_eq!(mock.fetch_count(), 3);
    }

    #[tokio::test]
    async fn tag_lookup_excludes_current_and_respects_limit() {
        let mock = MockCatalogSource::with_products(vec![
            product_with_tags("a", "1", &["Roses"]),
            product_with_tags("b", "1", &["Roses"]),
            product_with_tags("c", "1", &["Roses"]),
            product_with_tags("d", "1", &["Lilies"]),
        ]);
        let found = mock
            .fetch_by_tags(&["Roses".to_string()], "a", 1)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].handle, "b");
    }

    #[tokio::test]
    async fn identifier_lookup_returns_none_for_unknown() {
        let mock = MockCatalogSource::with_products(vec![product("a", "1")]);
        assert!(mock.fetch_by_identifier("zzz").await.unwrap().is_none());
        assert_eq!(mock.lookup_count(), 1);
    }
}
