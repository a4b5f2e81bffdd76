// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed interaction intents carried in callback payloads.
//!
//! Buttons on the interaction surface carry short opaque strings. They are
//! parsed into an [`Intent`] once, at the boundary, and rendered back with
//! [`Display`](std::fmt::Display). Parsing and rendering are inverses.

use std::fmt;
use std::str::FromStr;

use crate::error::PosyError;
use crate::filter_key::{Category, FilterKey};

/// Hard limit on the size of a callback payload, in bytes.
pub const CALLBACK_DATA_LIMIT: usize = 64;

/// Prefix used for product references.
pub const PRODUCT_PREFIX: &str = "product";

/// Where a navigation button leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The welcome menu (`back_to_main`).
    MainMenu,
    /// Every cached product (`show_all`).
    AllProducts,
    /// The full product list, refetched (`back_to_menu`).
    ProductList,
}

/// A user action decoded from a callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open the option menu of a category.
    CategoryFilter(Category),
    /// List the products matching a filter key.
    ApplyFilter(FilterKey),
    /// Show one product. Holds the token payload (identifier or digest).
    ShowProduct(String),
    Navigation(Navigation),
    /// `None` opens the FAQ index, `Some(topic)` one answer.
    Faq(Option<String>),
}

impl Intent {
    /// Serialized payload length in bytes.
    pub fn encoded_len(&self) -> usize {
        self.to_string().len()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::CategoryFilter(category) => write!(f, "category_{category}"),
            Intent::ApplyFilter(key) => write!(f, "filter_{}_{key}", key.category()),
            Intent::ShowProduct(payload) => write!(f, "{PRODUCT_PREFIX}_{payload}"),
            Intent::Navigation(Navigation::MainMenu) => f.write_str("back_to_main"),
            Intent::Navigation(Navigation::AllProducts) => f.write_str("show_all"),
            Intent::Navigation(Navigation::ProductList) => f.write_str("back_to_menu"),
            Intent::Faq(None) => f.write_str("faq_main"),
            Intent::Faq(Some(topic)) => write!(f, "faq_{topic}"),
        }
    }
}

impl FromStr for Intent {
    type Err = PosyError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let invalid = || PosyError::InvalidIntent(data.to_string());

        match data {
            "back_to_main" => return Ok(Intent::Navigation(Navigation::MainMenu)),
            "show_all" => return Ok(Intent::Navigation(Navigation::AllProducts)),
            "back_to_menu" => return Ok(Intent::Navigation(Navigation::ProductList)),
            "faq_main" => return Ok(Intent::Faq(None)),
            _ => {}
        }

        let (prefix, rest) = data.split_once('_').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Err(invalid());
        }

        match prefix {
            "category" => Category::from_str(rest)
                .map(Intent::CategoryFilter)
                .map_err(|_| invalid()),
            "filter" => {
                let (category, key) = rest.split_once('_').ok_or_else(invalid)?;
                let category = Category::from_str(category).map_err(|_| invalid())?;
                let key = FilterKey::from_str(key).map_err(|_| invalid())?;
                if key.category() != category {
                    return Err(invalid());
                }
                Ok(Intent::ApplyFilter(key))
            }
            PRODUCT_PREFIX => Ok(Intent::ShowProduct(rest.to_string())),
            "faq" => Ok(Intent::Faq(Some(rest.to_string()))),
            _ => Err(invalid()),
        }
    }
}
