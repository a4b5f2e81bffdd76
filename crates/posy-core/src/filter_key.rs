// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of filter keys the storefront offers, grouped by category.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A menu category grouping related filter keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Price,
    Occasion,
    Flowers,
}

impl Category {
    /// Menu heading shown above the category's options.
    pub fn title(self) -> &'static str {
        match self {
            Category::Price => "💰 Select Price Range",
            Category::Occasion => "🎉 Select Occasion",
            Category::Flowers => "🌷 Select Flower Type",
        }
    }

    /// Filter keys offered in this category, in menu order.
    pub fn keys(self) -> &'static [FilterKey] {
        use FilterKey::*;
        match self {
            Category::Price => &[Under50, From50To150, From151To250, Over250],
            Category::Occasion => &[
                Anniversary,
                Valentine,
                Romantic,
                GetWell,
                Wedding,
                Birthday,
                FathersDay,
            ],
            Category::Flowers => &[Roses, Lilies, Tulips, Orchids, Sunflowers, Mixed],
        }
    }
}

/// Canonical filter key. The string form is the key used in callback
/// payloads and in the synonym table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
pub enum FilterKey {
    #[strum(serialize = "under50")]
    #[serde(rename = "under50")]
    Under50,
    #[strum(serialize = "50-150")]
    #[serde(rename = "50-150")]
    From50To150,
    #[strum(serialize = "151-250")]
    #[serde(rename = "151-250")]
    From151To250,
    #[strum(serialize = "over250")]
    #[serde(rename = "over250")]
    Over250,
    #[strum(serialize = "anniversary")]
    #[serde(rename = "anniversary")]
    Anniversary,
    #[strum(serialize = "valentine")]
    #[serde(rename = "valentine")]
    Valentine,
    #[strum(serialize = "romantic")]
    #[serde(rename = "romantic")]
    Romantic,
    #[strum(serialize = "getwell")]
    #[serde(rename = "getwell")]
    GetWell,
    #[strum(serialize = "wedding")]
    #[serde(rename = "wedding")]
    Wedding,
    #[strum(serialize = "birthday")]
    #[serde(rename = "birthday")]
    Birthday,
    #[strum(serialize = "fathersday")]
    #[serde(rename = "fathersday")]
    FathersDay,
    #[strum(serialize = "roses")]
    #[serde(rename = "roses")]
    Roses,
    #[strum(serialize = "lilies")]
    #[serde(rename = "lilies")]
    Lilies,
    #[strum(serialize = "tulips")]
    #[serde(rename = "tulips")]
    Tulips,
    #[strum(serialize = "orchids")]
    #[serde(rename = "orchids")]
    Orchids,
    #[strum(serialize = "sunflowers")]
    #[serde(rename = "sunflowers")]
    Sunflowers,
    #[strum(serialize = "mixed")]
    #[serde(rename = "mixed")]
    Mixed,
}

impl FilterKey {
    pub fn category(self) -> Category {
        use FilterKey::*;
        match self {
            Under50 | From50To150 | From151To250 | Over250 => Category::Price,
            Anniversary | Valentine | Romantic | GetWell | Wedding | Birthday | FathersDay => {
                Category::Occasion
            }
            Roses | Lilies | Tulips | Orchids | Sunflowers | Mixed => Category::Flowers,
        }
    }

    /// The price interval for price keys, `None` for tag keys.
    pub fn price_bucket(self) -> Option<PriceBucket> {
        match self {
            FilterKey::Under50 => Some(PriceBucket::Under50),
            FilterKey::From50To150 => Some(PriceBucket::From50To150),
            FilterKey::From151To250 => Some(PriceBucket::From151To250),
            FilterKey::Over250 => Some(PriceBucket::Over250),
            _ => None,
        }
    }

    /// Label for the option button in a category menu.
    pub fn menu_label(self, currency: &str) -> String {
        match self {
            FilterKey::Valentine => "Valentine".to_string(),
            FilterKey::Birthday => "Happy Birthday".to_string(),
            other => other.label(currency),
        }
    }

    /// Human-readable category label shown above filtered results.
    pub fn label(self, currency: &str) -> String {
        use FilterKey::*;
        let fixed = match self {
            Under50 => return format!("Under {currency}50"),
            From50To150 => return format!("{currency}50-150"),
            From151To250 => return format!("{currency}151-250"),
            Over250 => return format!("Over {currency}250"),
            Anniversary => "Anniversary",
            Valentine => "Valentine's Day",
            Romantic => "Romantic",
            GetWell => "Get Well Soon",
            Wedding => "Wedding",
            Birthday => "Birthday",
            FathersDay => "Father's Day",
            Roses => "Roses",
            Lilies => "Lilies",
            Tulips => "Tulips",
            Orchids => "Orchids",
            Sunflowers => "Sunflowers",
            Mixed => "Mixed Flowers",
        };
        fixed.to_string()
    }
}

/// Inclusive price interval behind a price filter key.
///
/// The boundaries overlap at 50 (`Under50` and `From50To150` both include it).
/// This matches the live storefront and is kept until the shop decides which
/// bucket a 50.00 bouquet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    Under50,
    From50To150,
    From151To250,
    Over250,
}

impl PriceBucket {
    /// Inclusive `(min, max)` bounds.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            PriceBucket::Under50 => (0.0, 50.0),
            PriceBucket::From50To150 => (50.0, 150.0),
            PriceBucket::From151To250 => (151.0, 250.0),
            PriceBucket::Over250 => (251.0, f64::INFINITY),
        }
    }

    pub fn contains(self, price: f64) -> bool {
        let (min, max) = self.bounds();
        min <= price && price <= max
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_key_parses_back_from_its_string_form() {
        for key in FilterKey::iter() {
            assert_eq!(FilterKey::from_str(&key.to_string()).unwrap(), key);
        }
    }

    #[test]
    fn every_key_is_listed_in_its_own_category() {
        for key in FilterKey::iter() {
            assert!(key.category().keys().contains(&key), "{key}");
        }
        let listed: usize = Category::iter().map(|c| c.keys().len()).sum();
        assert_eq!(listed, FilterKey::iter().count());
    }

    #[test]
    fn price_keys_have_buckets_and_tag_keys_do_not() {
        for key in FilterKey::iter() {
            assert_eq!(
                key.price_bucket().is_some(),
                key.category() == Category::Price,
                "{key}"
            );
        }
    }

    #[test]
    fn bucket_bounds_are_inclusive_and_overlap_at_fifty() {
        assert!(PriceBucket::Under50.contains(50.0));
        assert!(PriceBucket::From50To150.contains(50.0));
        assert!(!PriceBucket::Under50.contains(50.01));
        assert!(!PriceBucket::From151To250.contains(150.5));
        assert!(!PriceBucket::Over250.contains(250.5));
        assert!(PriceBucket::Over250.contains(10_000.0));
    }

    #[test]
    fn labels_use_the_configured_currency() {
        assert_eq!(FilterKey::Under50.label("AED"), "Under AED50");
        assert_eq!(FilterKey::From50To150.label("USD"), "USD50-150");
        assert_eq!(FilterKey::Valentine.label("AED"), "Valentine's Day");
        assert_eq!(FilterKey::Valentine.menu_label("AED"), "Valentine");
        assert_eq!(FilterKey::Birthday.menu_label("AED"), "Happy Birthday");
    }

    #[test]
    fn category_parses_lowercase() {
        assert_eq!(Category::from_str("flowers").unwrap(), Category::Flowers);
        assert!(Category::from_str("gifts").is_err());
    }
}
