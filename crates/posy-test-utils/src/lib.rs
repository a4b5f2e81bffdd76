// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Posy integration tests.
//!
//! Provides a scriptable catalog source and product fixtures for fast,
//! deterministic tests without a Shopify store.
//!
//! # Components
//!
//! - [`MockCatalogSource`] - In-memory catalog with failure injection and call counting
//! - [`fixtures`] - Product builders

pub mod fixtures;
pub mod mock_catalog;

pub use mock_catalog::MockCatalogSource;
