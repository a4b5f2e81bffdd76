// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog layer of the Posy storefront.
//!
//! Tag normalization and synonym matching, the filter engine, per-session
//! catalog snapshots, callback-safe product references, and the storefront
//! screens built on top of them.

pub mod cache;
pub mod filter;
pub mod links;
pub mod normalize;
pub mod shortener;
pub mod storefront;
pub mod synonyms;

pub use cache::CatalogCache;
pub use links::Links;
pub use shortener::Token;
pub use storefront::Storefront;
