// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static synonym table mapping filter keys to the tag spellings the shop uses.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Canonical key followed by its accepted surface forms, key first.
const SYNONYMS: &[(&str, &[&str])] = &[
    // Price ranges
    ("under50", &["under50", "under 50", "cheap", "budget"]),
    ("50-150", &["50-150", "50 to 150", "midrange", "affordable"]),
    ("151-250", &["151-250", "151 to 250", "premium"]),
    ("over250", &["over250", "over 250", "luxury"]),
    // Occasions
    ("anniversary", &["anniversary", "anniversaries"]),
    ("valentine", &["valentine", "valentines", "valentine's day"]),
    ("romantic", &["romantic", "romance", "love"]),
    ("getwell", &["getwell", "get well", "recovery", "feel better"]),
    ("wedding", &["wedding", "bridal", "bridesmaid"]),
    ("birthday", &["birthday", "bday", "birthdays"]),
    ("fathersday", &["fathersday", "father's day", "dad"]),
    // Flower types
    ("roses", &["roses", "rose"]),
    ("lilies", &["lilies", "lily"]),
    ("tulips", &["tulips", "tulip"]),
    ("orchids", &["orchids", "orchid"]),
    ("sunflowers", &["sunflowers", "sunflower"]),
    ("mixed", &["mixed", "assorted", "variety"]),
];

/// Surface forms for `key`, or just `[key]` for keys the table does not know.
///
/// Unknown keys fall back to themselves so catalog tags that are not modelled
/// yet can still be filtered on verbatim.
pub fn surface_forms(key: &str) -> Vec<&str> {
    SYNONYMS
        .iter()
        .find(|(canonical, _)| *canonical == key)
        .map(|(_, forms)| forms.to_vec())
        .unwrap_or_else(|| vec![key])
}

/// Normalized surface forms for `key`, ready for set membership tests.
pub fn normalized_targets(key: &str) -> HashSet<String> {
    surface_forms(key).into_iter().map(normalize).collect()
}
