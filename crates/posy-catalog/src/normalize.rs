// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tag canonicalization.
//!
//! Two tags are equivalent iff their normalized forms are equal. There is no
//! similarity scoring: `"Valentine's Day"`, `"valentines day"` and
//! `" VALENTINES-DAY "` all normalize to `"valentinesday"`, while
//! `"valentine"` stays distinct.

/// Characters removed entirely during normalization.
const STRIPPED: &[char] = &[' ', '-', '\'', '\u{2019}'];

/// Lowercases, trims, and removes spaces, hyphens, and apostrophes.
pub fn normalize(tag: &str) -> String {
    let stripped: String = tag
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .flat_map(char::to_lowercase)
        .collect();
    stripped.trim().to_string()
}
