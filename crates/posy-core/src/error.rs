// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Posy storefront assistant.

use thiserror::Error;

/// The primary error type used across Posy crates.
///
/// Most variants are recovered close to where they occur: the catalog cache
/// absorbs [`PosyError::SourceUnavailable`], the storefront turns
/// [`PosyError::NotFound`] into an empty-result view, and the filter engine
/// only logs [`PosyError::MalformedPrice`].
#[derive(Debug, Error)]
pub enum PosyError {
    /// Configuration errors (missing token, invalid store name).
    #[error("configuration error: {0}")]
    Config(String),

    /// The catalog backend could not be reached or returned an unusable response.
    #[error("catalog source unavailable: {message}")]
    SourceUnavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A filter or product reference resolved to nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A product price could not be parsed as a finite non-negative number.
    #[error("malformed price `{raw}` on product {handle}")]
    MalformedPrice { handle: String, raw: String },

    /// A callback payload did not match any known interaction intent.
    #[error("invalid interaction payload: {0}")]
    InvalidIntent(String),

    /// Messaging channel errors (send failure, bad chat id).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PosyError {
    /// Shorthand for a [`PosyError::SourceUnavailable`] without an underlying cause.
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            source: None,
        }
    }
}
